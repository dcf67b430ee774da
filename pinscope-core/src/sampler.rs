//! Pin sampling
//!
//! The monitored inputs are a fixed, ordered table of pin descriptors.
//! Each sample reads the instantaneous level of every pin and maps it to
//! the reported value with the high→0 / low→1 inversion.

use pinscope_protocol::{PinReading, Report};

use crate::traits::InputPin;

/// Pull resistor configuration for an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No internal pull resistor
    None,
    /// Internal pull-up (idle level = high)
    Up,
    /// Internal pull-down (idle level = low)
    Down,
}

/// Descriptor for one monitored input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSpec {
    /// Hardware pin index, as it appears in the report line
    pub index: u8,
    /// Pull resistor configuration applied at initialization
    pub pull: Pull,
}

impl PinSpec {
    /// Pull-up input descriptor
    pub const fn pull_up(index: u8) -> Self {
        Self {
            index,
            pull: Pull::Up,
        }
    }
}

/// Number of monitored pins
pub const PIN_COUNT: usize = 4;

/// The monitored inputs, in report order
///
/// GPIO 4-7, each with an internal pull-up: the idle level is high and an
/// external switch or signal pulls the line low.
pub const REPORTED_PINS: [PinSpec; PIN_COUNT] = [
    PinSpec::pull_up(4),
    PinSpec::pull_up(5),
    PinSpec::pull_up(6),
    PinSpec::pull_up(7),
];

/// Map an electrical level to the reported value: HIGH -> 0, LOW -> 1
///
/// The inversion is deliberate. With pull-up wiring an asserted line (a
/// closed switch or active signal) reads electrically low, so low maps to
/// the conventional "active" value 1 and the pulled-high idle level maps
/// to 0.
pub fn reported_value(is_high: bool) -> u8 {
    if is_high {
        0
    } else {
        1
    }
}

/// A fixed, ordered bank of input pins paired with their report indices
pub struct PinBank<P, const N: usize> {
    pins: [(u8, P); N],
}

impl<P: InputPin, const N: usize> PinBank<P, N> {
    /// Create a bank from `(index, pin)` pairs, kept in the given order
    pub fn new(pins: [(u8, P); N]) -> Self {
        Self { pins }
    }

    /// Sample every pin once, in bank order
    pub fn sample(&self) -> Report {
        self.pins
            .iter()
            .map(|(index, pin)| PinReading::new(*index, reported_value(pin.is_high())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock input pin for testing
    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    fn bank(levels: [bool; PIN_COUNT]) -> PinBank<MockPin, PIN_COUNT> {
        let mut index = 0;
        PinBank::new(levels.map(|high| {
            let spec = &REPORTED_PINS[index];
            index += 1;
            (spec.index, MockPin { high })
        }))
    }

    #[test]
    fn test_inversion() {
        assert_eq!(reported_value(true), 0);
        assert_eq!(reported_value(false), 1);
    }

    #[test]
    fn test_reported_pins_table() {
        let indices: heapless::Vec<u8, PIN_COUNT> =
            REPORTED_PINS.iter().map(|spec| spec.index).collect();
        assert_eq!(indices.as_slice(), &[4, 5, 6, 7]);
        assert!(REPORTED_PINS.iter().all(|spec| spec.pull == Pull::Up));
    }

    #[test]
    fn test_sample_all_idle() {
        // All pins pulled high by the pull-ups -> every value reports 0
        let report = bank([true; PIN_COUNT]).sample();
        for spec in &REPORTED_PINS {
            assert_eq!(report.value_of(spec.index), Some(0));
        }
    }

    #[test]
    fn test_sample_pin_4_asserted() {
        let report = bank([false, true, true, true]).sample();
        assert_eq!(report.value_of(4), Some(1));
        assert_eq!(report.value_of(5), Some(0));
        assert_eq!(report.value_of(6), Some(0));
        assert_eq!(report.value_of(7), Some(0));
    }

    #[test]
    fn test_sample_is_idempotent() {
        let bank = bank([false, true, false, true]);
        assert_eq!(bank.sample(), bank.sample());
    }
}
