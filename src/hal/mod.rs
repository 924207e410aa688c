pub mod board;
pub mod exint;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use board::{ButtonBank, SegmentBus};
pub use gpio::{Input, Output, Pin};
pub use timer::{Delay, TickTimer};
pub use uart::Uart;
