//! Pinscope - pull-up input reporter firmware
//!
//! Main firmware binary for RP2040-based boards. Configures GPIO 4-7 as
//! pull-up inputs and UART0 as the report link, then runs the periodic
//! report task until power-off.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Input};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_rp::Peri;
use {defmt_rtt as _, panic_probe as _};

use pinscope_core::sampler::{PinBank, PIN_COUNT, REPORTED_PINS};
use pinscope_core::traits::BAUD_RATE;

use crate::hw::{pull_config, DigitalInput, SerialPort};

mod hw;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pinscope firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());

    // Report link: UART0 TX on GPIO 0, fixed rate
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;
    let uart = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
    let serial = SerialPort::new(uart);

    // Monitored inputs, paired with the descriptor table in report order
    let gpios: [Peri<'static, AnyPin>; PIN_COUNT] = [
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
    ];
    let mut index = 0;
    let bank = PinBank::new(gpios.map(|pin| {
        let spec = &REPORTED_PINS[index];
        index += 1;
        let input = Input::new(pin, pull_config(spec.pull));
        (spec.index, DigitalInput::new(input))
    }));
    info!("Configured {} input pins", PIN_COUNT);

    spawner.spawn(tasks::report_task(serial, bank)).unwrap();
}
