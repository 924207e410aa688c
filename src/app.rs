//! Per-iteration control logic for the stopwatch.
//!
//! [`Stopwatch`] holds the state the main loop owns outright (count mode,
//! button latches, the countdown-alarm condition) and mutates the state it
//! shares with interrupt handlers (time value, stop-buzzer latch) through
//! references, so the same code runs under a critical section on the MCU
//! and directly in host tests.

use core::cell::Cell;

use crate::clock::TimeValue;
use crate::drivers::buttons::{Button, ButtonPad, ButtonPins};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    CountUp,
    CountDown,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::CountUp => Mode::CountDown,
            Mode::CountDown => Mode::CountUp,
        }
    }
}

impl ufmt::uDisplay for Mode {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(match self {
            Mode::CountUp => "count-up",
            Mode::CountDown => "count-down",
        })
    }
}

/// Output line levels computed for one loop iteration.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Outputs {
    pub red_led: bool,
    pub yellow_led: bool,
    pub buzzer: bool,
}

/// Single-consumer pending-tick flag.
///
/// The tick interrupt raises it; the main loop takes it once per iteration.
/// A second raise before consumption coalesces into the first: the flag
/// carries no count, so a loop running slower than 1 Hz silently drops
/// ticks instead of catching up.
pub struct TickFlag {
    pending: Cell<bool>,
}

impl TickFlag {
    pub const fn new() -> Self {
        Self {
            pending: Cell::new(false),
        }
    }

    /// Interrupt side: mark a tick as pending.
    pub fn raise(&self) {
        self.pending.set(true);
    }

    /// Main-loop side: consume the pending tick, if any.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}

/// The main loop's controller state.
pub struct Stopwatch {
    mode: Mode,
    buzzer_on: bool,
    pad: ButtonPad,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            mode: Mode::CountUp,
            buzzer_on: false,
            pad: ButtonPad::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Consume one 1 Hz tick.
    ///
    /// In count-down mode the alarm condition is recomputed on every
    /// decrement: it turns on exactly when the decrement lands on 00:00:00
    /// with the stop-buzzer latch clear, and back off on any decrement from
    /// a nonzero value or while the latch is set.
    pub fn advance(&mut self, time: &mut TimeValue, stop_latch: bool) {
        match self.mode {
            Mode::CountUp => time.increment_seconds(),
            Mode::CountDown => {
                time.decrement_seconds();
                self.buzzer_on = time.is_zero() && !stop_latch;
            }
        }
    }

    /// One poll pass over the seven buttons plus the stop-buzzer line.
    ///
    /// Every button is evaluated each pass, so simultaneous presses all act
    /// within the same iteration. The stop-buzzer input is level-sensed and
    /// latches whenever it reads asserted.
    pub fn scan<P: ButtonPins>(&mut self, pins: &P, time: &mut TimeValue, stop_latch: &mut bool) {
        for button in Button::ALL {
            if self.pad.update(button, pins.is_pressed(button)) {
                self.press(button, time, stop_latch);
            }
        }
        if pins.stop_buzzer() {
            *stop_latch = true;
        }
    }

    fn press(&mut self, button: Button, time: &mut TimeValue, stop_latch: &mut bool) {
        match button {
            Button::HoursInc => time.increment_hours(),
            Button::HoursDec => time.decrement_hours(),
            Button::MinutesInc => time.increment_minutes(),
            Button::MinutesDec => time.decrement_minutes(),
            Button::SecondsInc => time.increment_seconds(),
            Button::SecondsDec => time.decrement_seconds(),
            Button::ModeToggle => {
                // Toggling re-arms the buzzer for the next countdown-zero.
                *stop_latch = false;
                self.mode = self.mode.toggled();
            }
        }
    }

    /// Output levels for this iteration. The buzzer sounds only while the
    /// alarm condition holds and the stop-buzzer latch is clear.
    pub fn outputs(&self, stop_latch: bool) -> Outputs {
        Outputs {
            red_led: self.mode == Mode::CountUp,
            yellow_led: self.mode == Mode::CountDown,
            buzzer: self.buzzer_on && !stop_latch,
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
