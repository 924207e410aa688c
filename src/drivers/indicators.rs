//! Mode LEDs and buzzer outputs.

use embedded_hal::digital::v2::OutputPin;

use crate::app::Outputs;

/// Red/yellow mode LEDs plus the buzzer line, driven from the computed
/// [`Outputs`] once per main-loop iteration.
pub struct Indicators<R, Y, B> {
    red: R,
    yellow: Y,
    buzzer: B,
}

impl<R, Y, B> Indicators<R, Y, B>
where
    R: OutputPin,
    Y: OutputPin,
    B: OutputPin,
{
    pub fn new(red: R, yellow: Y, buzzer: B) -> Self {
        Self { red, yellow, buzzer }
    }

    pub fn apply(&mut self, outputs: Outputs) {
        set(&mut self.red, outputs.red_led);
        set(&mut self.yellow, outputs.yellow_led);
        set(&mut self.buzzer, outputs.buzzer);
    }
}

fn set<P: OutputPin>(pin: &mut P, level: bool) {
    if level {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction};

    #[test]
    fn apply_drives_all_three_lines() {
        let mut red = PinMock::new(&[Transaction::set(State::High)]);
        let mut yellow = PinMock::new(&[Transaction::set(State::Low)]);
        let mut buzzer = PinMock::new(&[Transaction::set(State::Low)]);

        let mut indicators = Indicators::new(red.clone(), yellow.clone(), buzzer.clone());
        indicators.apply(Outputs {
            red_led: true,
            yellow_led: false,
            buzzer: false,
        });

        red.done();
        yellow.done();
        buzzer.done();
    }
}
