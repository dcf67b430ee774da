//! Report line format for the Pinscope input reporter
//!
//! The device emits one ASCII line per report, a flat CSV of
//! `pin,value` pairs:
//!
//! ```text
//! 4,<v4>,5,<v5>,6,<v6>,7,<v7>\n
//! ```
//!
//! where each `<vN>` is the literal character `0` or `1`. Example:
//! `4,1,5,0,6,1,7,0`.
//!
//! This crate defines the reading types plus the line encoder (used by the
//! firmware) and the line parser (used by the host monitor).

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod reading;

pub use line::{encode_line, parse_line, LineError, MAX_LINE_LEN};
pub use reading::{PinReading, Report, MAX_READINGS};
