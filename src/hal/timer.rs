//! Timer1 drives the 1 Hz tick; Timer0 provides the digit dwell delay.

use avr_device::atmega1280::{TC0, TC1};
use embedded_hal::blocking::delay::DelayMs;

use crate::config::TICK_COMPARE;

// TCCR1B bits
const WGM12: u8 = 1 << 3;
const CS12: u8 = 1 << 2;
const CS10: u8 = 1 << 0;
/// Clock-select field (CS12:CS10); all zeros stops the counter.
const CLOCK_SELECT_MASK: u8 = 0x07;
const CLOCK_SELECT_DIV1024: u8 = CS12 | CS10;
// TIMSK1 bits
const OCIE1A: u8 = 1 << 1;

/// Timer1 in CTC mode, raising a compare-match interrupt once per second.
///
/// 16 MHz / 1024 = 15 625 counts per second; the compare value is one less
/// because the period of a CTC cycle is `OCR1A + 1` counts.
pub struct TickTimer {
    _tc1: TC1,
}

impl TickTimer {
    pub fn new(tc1: TC1) -> Self {
        unsafe {
            tc1.tccr1a.write(|w| w.bits(0));
            tc1.tcnt1.write(|w| w.bits(0));
            tc1.ocr1a.write(|w| w.bits(TICK_COMPARE));
            tc1.timsk1.write(|w| w.bits(OCIE1A));
            // CTC mode 4, /1024 prescaler; writing the clock select starts it.
            tc1.tccr1b.write(|w| w.bits(WGM12 | CLOCK_SELECT_DIV1024));
        }
        Self { _tc1: tc1 }
    }
}

// The pause/resume/reset interrupts run without access to the owned
// peripheral, so the clock gate and counter are reached through the
// register block pointer.

/// Gate off Timer1's clock source; the counter holds its value.
pub fn halt_tick_clock() {
    unsafe {
        (*TC1::ptr())
            .tccr1b
            .modify(|r, w| w.bits(r.bits() & !CLOCK_SELECT_MASK));
    }
}

/// Re-enable Timer1's clock source; counting resumes from wherever the
/// counter was left.
pub fn resume_tick_clock() {
    unsafe {
        (*TC1::ptr())
            .tccr1b
            .modify(|r, w| w.bits(r.bits() | CLOCK_SELECT_DIV1024));
    }
}

/// Restart the in-flight tick period from zero.
pub fn rewind_tick_counter() {
    unsafe {
        (*TC1::ptr()).tcnt1.write(|w| w.bits(0));
    }
}

// TCCR0B clock select: /64 prescaler
const TC0_CLOCK_DIV64: u8 = 0x03;
/// 16 MHz / 64 = 250 counts per millisecond.
const COUNTS_PER_MS: u8 = 250;

/// Millisecond busy-wait on Timer0, used for the per-digit display dwell.
pub struct Delay {
    tc0: TC0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        unsafe {
            tc0.tccr0a.write(|w| w.bits(0));
            tc0.tccr0b.write(|w| w.bits(TC0_CLOCK_DIV64));
        }
        Self { tc0 }
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        for _ in 0..ms {
            unsafe {
                self.tc0.tcnt0.write(|w| w.bits(0));
            }
            while self.tc0.tcnt0.read().bits() < COUNTS_PER_MS {}
        }
    }
}
