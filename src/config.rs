//! Configuration constants for the stopwatch firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Timer1 compare value for the 1 Hz tick.
///
/// With the /1024 prescaler the timer runs at 15 625 Hz; a CTC period is
/// `OCR1A + 1` counts, so 15 624 gives exactly one second per compare match.
pub const TICK_COMPARE: u16 = (CPU_FREQ_HZ / 1024) as u16 - 1;

/// How long each 7-segment digit stays driven during one multiplexing scan.
///
/// Six digits at 2 ms each refresh the whole display every 12 ms, safely
/// under the ~16 ms flicker-fusion threshold.
pub const DIGIT_DWELL_MS: u8 = 2;

/// Debug console baud rate
pub const UART_BAUD: u32 = 9600;
