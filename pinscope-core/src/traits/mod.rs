//! Hardware abstraction traits
//!
//! Implemented by chip-specific code (the RP2040 firmware) and by mocks in
//! host tests, so the sampling and reporting logic stays board-agnostic.

pub mod gpio;
pub mod serial;

pub use gpio::InputPin;
pub use serial::{SerialTx, BAUD_RATE};
