//! Report line encoding and parsing.
//!
//! Line format: flat CSV of `pin,value` pairs terminated by `\n`, e.g.
//! `4,0,5,0,6,1,7,0\n`. The parser is lenient about surrounding
//! whitespace, accepts `\r\n` terminators, and skips blank CSV fields;
//! the encoder always emits the canonical form.

use core::fmt::Write;

use heapless::String;

use crate::reading::{PinReading, Report};

/// Maximum encoded line length in bytes, including the terminator
///
/// Worst case: [`MAX_READINGS`](crate::MAX_READINGS) pairs of three-digit
/// pin and one-digit value (`255,1,` is 6 bytes per pair) plus `\n`.
pub const MAX_LINE_LEN: usize = 64;

/// Errors that can occur while encoding or parsing a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line contains no fields at all
    Empty,
    /// CSV fields do not pair up into `pin,value` tuples
    OddFieldCount,
    /// A field is not a decimal integer in range
    InvalidNumber,
    /// A value field is something other than 0 or 1
    InvalidValue,
    /// More pairs than a report can hold
    TooManyReadings,
    /// Encoded line would exceed [`MAX_LINE_LEN`]
    LineTooLong,
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty report line"),
            Self::OddFieldCount => write!(f, "odd number of CSV fields"),
            Self::InvalidNumber => write!(f, "non-numeric CSV field"),
            Self::InvalidValue => write!(f, "pin value is not 0 or 1"),
            Self::TooManyReadings => write!(f, "too many pin,value pairs"),
            Self::LineTooLong => write!(f, "encoded line too long"),
        }
    }
}

/// Encode a report as a single CSV line terminated by `\n`
pub fn encode_line(report: &Report) -> Result<String<MAX_LINE_LEN>, LineError> {
    if report.is_empty() {
        return Err(LineError::Empty);
    }

    let mut line = String::new();
    for (i, reading) in report.iter().enumerate() {
        let sep = if i == 0 { "" } else { "," };
        write!(&mut line, "{}{},{}", sep, reading.pin, reading.value)
            .map_err(|_| LineError::LineTooLong)?;
    }
    line.push('\n').map_err(|_| LineError::LineTooLong)?;

    Ok(line)
}

/// Parse a CSV report line into readings
///
/// Accepts lines with or without a trailing `\n` / `\r\n`. Blank fields
/// (e.g. from a trailing comma) are skipped rather than rejected.
pub fn parse_line(line: &str) -> Result<Report, LineError> {
    let mut fields = line
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty());

    let mut report = Report::new();
    loop {
        let pin = match fields.next() {
            Some(f) => parse_field(f)?,
            None => break,
        };
        let value = match fields.next() {
            Some(f) => parse_field(f)?,
            None => return Err(LineError::OddFieldCount),
        };

        if value > 1 {
            return Err(LineError::InvalidValue);
        }

        report
            .push(PinReading::new(pin, value))
            .map_err(|_| LineError::TooManyReadings)?;
    }

    if report.is_empty() {
        return Err(LineError::Empty);
    }

    Ok(report)
}

fn parse_field(field: &str) -> Result<u8, LineError> {
    field.parse().map_err(|_| LineError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pairs: &[(u8, u8)]) -> Report {
        pairs
            .iter()
            .map(|&(pin, value)| PinReading::new(pin, value))
            .collect()
    }

    #[test]
    fn test_encode_all_idle() {
        let line = encode_line(&report(&[(4, 0), (5, 0), (6, 0), (7, 0)])).unwrap();
        assert_eq!(line.as_str(), "4,0,5,0,6,0,7,0\n");
    }

    #[test]
    fn test_encode_pin_4_asserted() {
        let line = encode_line(&report(&[(4, 1), (5, 0), (6, 0), (7, 0)])).unwrap();
        assert_eq!(line.as_str(), "4,1,5,0,6,0,7,0\n");
    }

    #[test]
    fn test_encode_empty_report() {
        assert_eq!(encode_line(&Report::new()), Err(LineError::Empty));
    }

    #[test]
    fn test_parse_canonical_line() {
        let parsed = parse_line("4,1,5,0,6,1,7,0\n").unwrap();
        assert_eq!(parsed, report(&[(4, 1), (5, 0), (6, 1), (7, 0)]));
    }

    #[test]
    fn test_parse_crlf_terminator() {
        let parsed = parse_line("4,0,5,0,6,0,7,0\r\n").unwrap();
        assert_eq!(parsed.value_of(7), Some(0));
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_parse_skips_blank_fields() {
        // Trailing comma leaves a blank field; the original host tool
        // filtered these out rather than failing.
        let parsed = parse_line("4,1,").unwrap();
        assert_eq!(parsed, report(&[(4, 1)]));
    }

    #[test]
    fn test_parse_odd_field_count() {
        assert_eq!(parse_line("4,1,5"), Err(LineError::OddFieldCount));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(parse_line("4,x"), Err(LineError::InvalidNumber));
    }

    #[test]
    fn test_parse_value_out_of_range() {
        assert_eq!(parse_line("4,2"), Err(LineError::InvalidValue));
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_line(""), Err(LineError::Empty));
        assert_eq!(parse_line("\r\n"), Err(LineError::Empty));
    }

    #[test]
    fn test_parse_too_many_pairs() {
        let line = "0,1,1,1,2,1,3,1,4,1,5,1,6,1,7,1,8,1";
        assert_eq!(parse_line(line), Err(LineError::TooManyReadings));
    }

    #[test]
    fn test_roundtrip() {
        let original = report(&[(4, 0), (5, 1), (6, 0), (7, 1)]);
        let line = encode_line(&original).unwrap();
        assert_eq!(parse_line(&line).unwrap(), original);
    }
}
