pub mod buttons;
pub mod display;
pub mod indicators;

#[cfg(target_arch = "avr")]
pub mod console;

// Re-export commonly used types
pub use buttons::{Button, ButtonPad, ButtonPins};
pub use display::{DisplayBus, DisplayMux};
pub use indicators::Indicators;

#[cfg(target_arch = "avr")]
pub use console::SerialConsole;
