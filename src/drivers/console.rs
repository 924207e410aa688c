//! Debug console over the polled UART.
//!
//! Development aid only: nothing in the control loop depends on it. Lines
//! are written with `ufmt`, which keeps `core::fmt` out of the image.

use core::convert::Infallible;

use crate::hal::uart::Uart;

pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.uart.write_blocking(byte);
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.uart.read().ok()
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.uart.write_blocking(b'\r');
            }
            self.uart.write_blocking(byte);
        }
        Ok(())
    }
}
