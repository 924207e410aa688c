//! External-interrupt lines for the asynchronous stopwatch controls:
//! INT0 = reset (falling edge), INT1 = pause (rising edge),
//! INT2 = resume (falling edge).

use avr_device::atmega1280::EXINT;

// EICRA sense-control values
const INT0_FALLING: u8 = 0b10;
const INT1_RISING: u8 = 0b11 << 2;
const INT2_FALLING: u8 = 0b10 << 4;
// EIMSK enable bits for INT0..INT2
const INT_ENABLE: u8 = 0x07;

/// Program the edge sensitivity of all three control lines and unmask them.
///
/// The caller configures the pins themselves (INT0 and INT2 ride the
/// internal pull-ups; INT1 floats, its source drives the line high).
pub fn init(exint: EXINT) {
    unsafe {
        exint
            .eicra
            .write(|w| w.bits(INT0_FALLING | INT1_RISING | INT2_FALLING));
        exint.eimsk.modify(|r, w| w.bits(r.bits() | INT_ENABLE));
    }
}
