//! RP2040 implementations of the core hardware traits.

use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Blocking, Error as UartError, UartTx};

use pinscope_core::sampler;
use pinscope_core::traits::{InputPin, SerialTx};

/// Map a pin descriptor's pull configuration to the RP2040 GPIO pull
pub fn pull_config(pull: sampler::Pull) -> Pull {
    match pull {
        sampler::Pull::None => Pull::None,
        sampler::Pull::Up => Pull::Up,
        sampler::Pull::Down => Pull::Down,
    }
}

/// GPIO input pin
pub struct DigitalInput {
    pin: Input<'static>,
}

impl DigitalInput {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl InputPin for DigitalInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Blocking UART transmitter for the report link
pub struct SerialPort {
    uart: UartTx<'static, UART0, Blocking>,
}

impl SerialPort {
    pub fn new(uart: UartTx<'static, UART0, Blocking>) -> Self {
        Self { uart }
    }
}

impl SerialTx for SerialPort {
    type Error = UartError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.uart.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.uart.blocking_flush()
    }
}
