//! Polled USART0 driver for the debug console.
//!
//! Deliberately interrupt-free: console output is rare, and a blocking
//! byte at 9600 baud only ever delays one display scan frame.

use avr_device::atmega1280::USART0;
use core::convert::Infallible;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// UCSR0A bits
const RXC0: u8 = 1 << 7;
const UDRE0: u8 = 1 << 5;
// UCSR0B bits
const RXEN0: u8 = 1 << 4;
const TXEN0: u8 = 1 << 3;
// UCSR0C: asynchronous, 8 data bits, no parity, 1 stop bit
const FRAME_8N1: u8 = (1 << 2) | (1 << 1);

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD)) as u16 - 1;

pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            usart.ubrr0.write(|w| w.bits(UBRR));
            usart.ucsr0c.write(|w| w.bits(FRAME_8N1));
            usart.ucsr0b.write(|w| w.bits(RXEN0 | TXEN0));
        }
        Self { usart }
    }

    pub fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().bits() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    pub fn read(&mut self) -> nb::Result<u8, Infallible> {
        if self.usart.ucsr0a.read().bits() & RXC0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.usart.udr0.read().bits())
    }

    pub fn write_blocking(&mut self, byte: u8) {
        nb::block!(self.write(byte)).ok();
    }
}
