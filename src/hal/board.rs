//! Board wiring: which ports and pins carry the display, buttons, LEDs,
//! buzzer and control-interrupt lines, and the port-wide implementations
//! of the driver traits.

use avr_device::atmega1280::{PORTA, PORTB, PORTC, PORTD};

use crate::drivers::buttons::{Button, ButtonPins};
use crate::drivers::display::{DisplayBus, DIGIT_COUNT};
use crate::hal::gpio::{Input, Output, Pin};

pub type RedLed = Pin<PORTD, 4, Output>;
pub type YellowLed = Pin<PORTD, 5, Output>;
pub type BuzzerPin = Pin<PORTD, 7, Output>;
pub type ResetLine = Pin<PORTD, 0, Input>;
pub type PauseLine = Pin<PORTD, 1, Input>;
pub type ResumeLine = Pin<PORTD, 2, Input>;

/// Count-up indicator, on at power-up.
pub fn red_led() -> RedLed {
    Pin::<PORTD, 4, Input>::new().into_output()
}

/// Count-down indicator.
pub fn yellow_led() -> YellowLed {
    Pin::<PORTD, 5, Input>::new().into_output()
}

pub fn buzzer() -> BuzzerPin {
    Pin::<PORTD, 7, Input>::new().into_output()
}

/// INT0 input, falling edge, pulled up.
pub fn reset_line() -> ResetLine {
    Pin::<PORTD, 0, Input>::new().into_pull_up_input()
}

/// INT1 input, rising edge; left floating, the source drives it.
pub fn pause_line() -> PauseLine {
    Pin::<PORTD, 1, Input>::new().into_floating_input()
}

/// INT2 input, falling edge, pulled up.
pub fn resume_line() -> ResumeLine {
    Pin::<PORTD, 2, Input>::new().into_pull_up_input()
}

// PORTA: PA0..PA5 digit enables, PA6 stop-buzzer input
const ENABLE_MASK: u8 = 0x3F;
const STOP_BUZZER_BIT: u8 = 1 << 6;
// PORTC: PC0..PC3 BCD value bus
const VALUE_MASK: u8 = 0x0F;

/// The shared 7-segment bus: six enable lines on PORTA and the 4-bit BCD
/// value nibble on PORTC, feeding the segment decoder.
pub struct SegmentBus {
    porta: PORTA,
    portc: PORTC,
}

impl SegmentBus {
    pub fn new(porta: PORTA, portc: PORTC) -> Self {
        unsafe {
            porta
                .ddra
                .modify(|r, w| w.bits((r.bits() | ENABLE_MASK) & !STOP_BUZZER_BIT));
            // All digits off; pull-up on the stop-buzzer input.
            porta
                .porta
                .modify(|r, w| w.bits((r.bits() & !ENABLE_MASK) | STOP_BUZZER_BIT));
            portc.ddrc.modify(|r, w| w.bits(r.bits() | VALUE_MASK));
        }
        Self { porta, portc }
    }
}

impl DisplayBus for SegmentBus {
    fn select(&mut self, position: usize) {
        debug_assert!(position < DIGIT_COUNT);
        // Scan position 0 (seconds-ones) sits on PA5, position 5 on PA0.
        let enable = 1u8 << (5 - position as u8);
        unsafe {
            self.porta
                .porta
                .modify(|r, w| w.bits((r.bits() & !ENABLE_MASK) | enable));
        }
    }

    fn write_bcd(&mut self, digit: u8) {
        unsafe {
            self.portc
                .portc
                .modify(|r, w| w.bits((r.bits() & !VALUE_MASK) | (digit & VALUE_MASK)));
        }
    }
}

/// Button lines on PORTB, active low behind the internal pull-ups. PB2 is
/// not wired.
const BUTTON_MASK: u8 = 0b1111_1011;

pub struct ButtonBank {
    portb: PORTB,
}

impl ButtonBank {
    pub fn new(portb: PORTB) -> Self {
        unsafe {
            portb.ddrb.modify(|r, w| w.bits(r.bits() & !BUTTON_MASK));
            portb.portb.modify(|r, w| w.bits(r.bits() | BUTTON_MASK));
        }
        Self { portb }
    }

    fn line(button: Button) -> u8 {
        match button {
            Button::HoursDec => 0,
            Button::HoursInc => 1,
            Button::MinutesDec => 3,
            Button::MinutesInc => 4,
            Button::SecondsDec => 5,
            Button::SecondsInc => 6,
            Button::ModeToggle => 7,
        }
    }
}

impl ButtonPins for ButtonBank {
    fn is_pressed(&self, button: Button) -> bool {
        self.portb.pinb.read().bits() & (1 << Self::line(button)) == 0
    }

    fn stop_buzzer(&self) -> bool {
        // PA6 lives on the display port; reading an input register has no
        // side effects, so the bus driver's ownership is not disturbed.
        unsafe { (*PORTA::ptr()).pina.read().bits() & STOP_BUZZER_BIT == 0 }
    }
}
