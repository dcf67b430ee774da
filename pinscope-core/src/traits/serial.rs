//! Serial output abstraction
//!
//! Provides a trait for the serial transmitter that carries report lines
//! to the host.

/// Fixed communication rate for the report link, in baud
pub const BAUD_RATE: u32 = 115_200;

/// Serial transmitter
///
/// Write behavior when the link is unavailable (block or drop) is up to
/// the implementation; the reporter neither retries nor buffers.
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the serial output
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}
