//! Pin reading types shared between the firmware and the host monitor.

use heapless::Vec;

/// Maximum number of `pin,value` pairs in a single report line
pub const MAX_READINGS: usize = 8;

/// A single sampled pin: hardware index plus reported value
///
/// The value is already inverted from the electrical level by the sampler:
/// an asserted (pulled-low) line reports as 1, an idle (pulled-high) line
/// reports as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinReading {
    /// Hardware pin index
    pub pin: u8,
    /// Reported value, always 0 or 1
    pub value: u8,
}

impl PinReading {
    /// Create a new reading
    pub const fn new(pin: u8, value: u8) -> Self {
        Self { pin, value }
    }
}

/// One complete report: an ordered sequence of pin readings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    readings: Vec<PinReading, MAX_READINGS>,
}

impl Report {
    /// Create an empty report
    pub const fn new() -> Self {
        Self {
            readings: Vec::new(),
        }
    }

    /// Append a reading, preserving insertion order
    ///
    /// Returns the reading back on overflow.
    pub fn push(&mut self, reading: PinReading) -> Result<(), PinReading> {
        self.readings.push(reading)
    }

    /// Number of readings in this report
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True if the report holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Look up the value reported for a pin index
    pub fn value_of(&self, pin: u8) -> Option<u8> {
        self.readings.iter().find(|r| r.pin == pin).map(|r| r.value)
    }

    /// Iterate readings in report order
    pub fn iter(&self) -> impl Iterator<Item = &PinReading> {
        self.readings.iter()
    }
}

impl FromIterator<PinReading> for Report {
    /// Collect up to [`MAX_READINGS`] readings; extras are dropped
    fn from_iter<T: IntoIterator<Item = PinReading>>(iter: T) -> Self {
        let mut report = Self::new();
        for reading in iter.into_iter().take(MAX_READINGS) {
            let _ = report.push(reading);
        }
        report
    }
}
