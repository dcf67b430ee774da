//! GPIO input abstraction
//!
//! Provides a trait for digital input pins that can be implemented by
//! chip-specific HALs.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reading is assumed to always succeed and to
/// have no side effects, so two immediate reads of an unchanged pin
/// return the same level.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
