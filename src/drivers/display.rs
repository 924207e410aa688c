//! Six-digit multiplexed 7-segment display driver.
//!
//! The six digits share one 4-bit value bus; only one digit-enable line is
//! asserted at a time and the scan cycles fast enough that all six appear
//! lit. The driver is generic over the electrical side ([`DisplayBus`]) and
//! the dwell delay, so the scan logic runs unchanged on the host in tests.

use embedded_hal::blocking::delay::DelayMs;

use crate::clock::TimeValue;
use crate::config::DIGIT_DWELL_MS;

/// Number of multiplexed digit positions.
pub const DIGIT_COUNT: usize = 6;

/// Electrical interface of the multiplexed display.
pub trait DisplayBus {
    /// Route the shared value bus to exactly one digit position,
    /// 0 = seconds-ones through 5 = hours-tens.
    fn select(&mut self, position: usize);

    /// Drive the 4-bit value bus with a BCD digit (0..=9).
    fn write_bcd(&mut self, digit: u8);
}

/// Split a two-digit field into (ones, tens).
///
/// Fields never exceed 59, so the tens digit always fits the bus nibble.
pub fn split_digits(value: u8) -> (u8, u8) {
    (value % 10, value / 10)
}

pub struct DisplayMux<B, D> {
    bus: B,
    delay: D,
}

impl<B: DisplayBus, D: DelayMs<u8>> DisplayMux<B, D> {
    pub fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Drive one full scan over all six digits: seconds-ones, seconds-tens,
    /// minutes-ones, minutes-tens, hours-ones, hours-tens.
    ///
    /// Runs unconditionally every main-loop iteration; one scan takes
    /// `6 * DIGIT_DWELL_MS` milliseconds.
    pub fn refresh(&mut self, time: &TimeValue) {
        let fields = [time.seconds(), time.minutes(), time.hours()];
        let mut position = 0;
        for value in fields {
            let (ones, tens) = split_digits(value);
            for digit in [ones, tens] {
                self.bus.select(position);
                self.bus.write_bcd(digit);
                self.delay.delay_ms(DIGIT_DWELL_MS);
                position += 1;
            }
        }
    }
}
