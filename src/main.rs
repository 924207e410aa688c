//! Firmware entry point: peripheral bring-up, the four interrupt service
//! routines, and the forever loop that renders the display, consumes the
//! 1 Hz tick, polls the buttons and drives the outputs.
#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega1280::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::Cell;

    use stopwatch_firmware::app::{Stopwatch, TickFlag};
    use stopwatch_firmware::clock::TimeValue;
    use stopwatch_firmware::drivers::{DisplayMux, Indicators, SerialConsole};
    use stopwatch_firmware::hal::{board, exint, timer, ButtonBank, Delay, SegmentBus, TickTimer, Uart};

    // State shared with the interrupt handlers. The time value is multi-byte,
    // so every access goes through a critical section rather than relying on
    // word-size atomicity.
    static TIME: Mutex<Cell<TimeValue>> = Mutex::new(Cell::new(TimeValue::ZERO));
    static TICK: Mutex<TickFlag> = Mutex::new(TickFlag::new());
    static STOP_BUZZER_LATCH: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

    /// 1 Hz compare match: just raise the pending-tick flag; the main loop
    /// does the arithmetic.
    #[avr_device::interrupt(atmega1280)]
    fn TIMER1_COMPA() {
        interrupt::free(|cs| TICK.borrow(cs).raise());
    }

    /// Reset control: zero the clock and restart the in-flight tick period.
    /// Running state, mode and the stop-buzzer latch are untouched.
    #[avr_device::interrupt(atmega1280)]
    fn INT0() {
        interrupt::free(|cs| TIME.borrow(cs).set(TimeValue::ZERO));
        timer::rewind_tick_counter();
    }

    /// Pause control: gate off the tick clock and re-arm the buzzer.
    #[avr_device::interrupt(atmega1280)]
    fn INT1() {
        timer::halt_tick_clock();
        interrupt::free(|cs| STOP_BUZZER_LATCH.borrow(cs).set(false));
    }

    /// Resume control: ticks continue from wherever the counter was left.
    #[avr_device::interrupt(atmega1280)]
    fn INT2() {
        timer::resume_tick_clock();
    }

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        let mut display = DisplayMux::new(SegmentBus::new(dp.PORTA, dp.PORTC), Delay::new(dp.TC0));
        let buttons = ButtonBank::new(dp.PORTB);
        let mut indicators = Indicators::new(board::red_led(), board::yellow_led(), board::buzzer());
        let mut console = SerialConsole::new(Uart::new(dp.USART0));

        board::reset_line();
        board::pause_line();
        board::resume_line();
        exint::init(dp.EXINT);

        // Starts counting immediately; pause/resume only gate its clock.
        let _tick = TickTimer::new(dp.TC1);

        unsafe { avr_device::interrupt::enable() };

        let mut app = Stopwatch::new();
        // Count-up is the power-on mode: red LED on from the start.
        indicators.apply(app.outputs(false));
        ufmt::uwriteln!(&mut console, "stopwatch ready ({})", app.mode()).ok();

        loop {
            // Phase 1: one full six-digit scan, every iteration.
            let shown = interrupt::free(|cs| TIME.borrow(cs).get());
            display.refresh(&shown);

            // Phase 2: consume at most one pending tick.
            if interrupt::free(|cs| TICK.borrow(cs).take()) {
                interrupt::free(|cs| {
                    let time_cell = TIME.borrow(cs);
                    let mut time = time_cell.get();
                    app.advance(&mut time, STOP_BUZZER_LATCH.borrow(cs).get());
                    time_cell.set(time);
                });
            }

            // Phase 3: poll the buttons and the stop-buzzer line.
            let mode_before = app.mode();
            let latch = interrupt::free(|cs| {
                let time_cell = TIME.borrow(cs);
                let latch_cell = STOP_BUZZER_LATCH.borrow(cs);
                let mut time = time_cell.get();
                let mut latch = latch_cell.get();
                app.scan(&buttons, &mut time, &mut latch);
                time_cell.set(time);
                latch_cell.set(latch);
                latch
            });
            if app.mode() != mode_before {
                ufmt::uwriteln!(&mut console, "{} mode: {}", shown, app.mode()).ok();
            }

            // Keep an attached serial terminal responsive.
            if let Some(byte) = console.read_byte() {
                console.write_byte(byte);
            }

            // Phase 4: LEDs and buzzer.
            indicators.apply(app.outputs(latch));
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    // AVR firmware image; nothing to run on the host.
}
