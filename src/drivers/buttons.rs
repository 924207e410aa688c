//! Push-button input with press-once latching.
//!
//! Each button carries an armed/disarmed latch: a press fires its action
//! exactly once and disarms the latch; releasing the button re-arms it.
//! Holding a button therefore never repeats the action.

pub const BUTTON_COUNT: usize = 7;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Button {
    HoursDec,
    HoursInc,
    MinutesDec,
    MinutesInc,
    SecondsDec,
    SecondsInc,
    ModeToggle,
}

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::HoursDec,
        Button::HoursInc,
        Button::MinutesDec,
        Button::MinutesInc,
        Button::SecondsDec,
        Button::SecondsInc,
        Button::ModeToggle,
    ];

    fn index(self) -> usize {
        match self {
            Button::HoursDec => 0,
            Button::HoursInc => 1,
            Button::MinutesDec => 2,
            Button::MinutesInc => 3,
            Button::SecondsDec => 4,
            Button::SecondsInc => 5,
            Button::ModeToggle => 6,
        }
    }
}

/// Level reads of the input lines, sampled once per main-loop iteration.
pub trait ButtonPins {
    /// True while the button's line reads pressed (driven low).
    fn is_pressed(&self, button: Button) -> bool;

    /// True while the stop-buzzer line is asserted. Level-sensed; this
    /// input has no latch of its own.
    fn stop_buzzer(&self) -> bool;
}

/// Armed/disarmed state for a single button.
struct EdgeLatch {
    armed: bool,
}

impl EdgeLatch {
    const fn new() -> Self {
        Self { armed: true }
    }

    /// Feed one level sample; returns true exactly once per press.
    fn update(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.armed = true;
            return false;
        }
        if self.armed {
            self.armed = false;
            return true;
        }
        false
    }
}

/// The seven button latches, polled together.
pub struct ButtonPad {
    latches: [EdgeLatch; BUTTON_COUNT],
}

impl ButtonPad {
    pub const fn new() -> Self {
        Self {
            latches: [
                EdgeLatch::new(),
                EdgeLatch::new(),
                EdgeLatch::new(),
                EdgeLatch::new(),
                EdgeLatch::new(),
                EdgeLatch::new(),
                EdgeLatch::new(),
            ],
        }
    }

    /// Feed the current level of one button; returns true on the press edge.
    pub fn update(&mut self, button: Button, pressed: bool) -> bool {
        self.latches[button.index()].update(pressed)
    }
}

impl Default for ButtonPad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_press_regardless_of_hold_length() {
        let mut pad = ButtonPad::new();
        let mut fired = 0;
        for _ in 0..50 {
            if pad.update(Button::SecondsInc, true) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn release_rearms_the_latch() {
        let mut pad = ButtonPad::new();
        assert!(pad.update(Button::ModeToggle, true));
        assert!(!pad.update(Button::ModeToggle, true));
        assert!(!pad.update(Button::ModeToggle, false));
        assert!(pad.update(Button::ModeToggle, true));
    }

    #[test]
    fn latches_are_independent_per_button() {
        let mut pad = ButtonPad::new();
        assert!(pad.update(Button::HoursInc, true));
        // A held HoursInc does not interfere with other buttons.
        assert!(pad.update(Button::HoursDec, true));
        assert!(pad.update(Button::MinutesInc, true));
        assert!(!pad.update(Button::HoursInc, true));
    }
}
