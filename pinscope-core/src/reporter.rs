//! Periodic reporter
//!
//! Owns the single piece of mutable state in the program: the timestamp
//! of the last emitted report. Each poll either does nothing (idle) or
//! samples the pin bank and writes one report line.

use pinscope_protocol::{encode_line, LineError};

use crate::sampler::PinBank;
use crate::traits::{InputPin, SerialTx};

/// Report period in milliseconds
pub const REPORT_PERIOD_MS: u64 = 250;

/// Errors that can occur while emitting a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError<E> {
    /// Report could not be encoded as a line
    Line(LineError),
    /// Serial write failed
    Serial(E),
}

/// Periodic report emitter
///
/// The timestamp starts at 0, so the first report is emitted once the
/// first full period has elapsed from program start.
pub struct Reporter {
    period_ms: u64,
    last_report_ms: u64,
}

impl Reporter {
    /// Create a reporter with the fixed 250 ms period
    pub const fn new() -> Self {
        Self::with_period(REPORT_PERIOD_MS)
    }

    /// Create a reporter with a custom period
    pub const fn with_period(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_report_ms: 0,
        }
    }

    /// Timestamp of the last emitted report, in milliseconds
    pub fn last_report_ms(&self) -> u64 {
        self.last_report_ms
    }

    /// True if a full period has elapsed since the last report
    pub fn is_due(&self, now_ms: u64) -> bool {
        // Wrap-safe elapsed check, same shape as the usual millis() idiom
        now_ms.wrapping_sub(self.last_report_ms) >= self.period_ms
    }

    /// Poll once: emit a report line if one is due
    ///
    /// Returns `Ok(false)` on the idle branch. When a report is due the
    /// current time is recorded first, then all pins are sampled in bank
    /// order and a single line is written.
    pub fn poll<P, S, const N: usize>(
        &mut self,
        now_ms: u64,
        bank: &PinBank<P, N>,
        serial: &mut S,
    ) -> Result<bool, ReportError<S::Error>>
    where
        P: InputPin,
        S: SerialTx,
    {
        if !self.is_due(now_ms) {
            return Ok(false);
        }

        self.last_report_ms = now_ms;

        let report = bank.sample();
        let line = encode_line(&report).map_err(ReportError::Line)?;
        serial
            .write_blocking(line.as_bytes())
            .map_err(ReportError::Serial)?;

        Ok(true)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
