//! Unified error type for stick2led.
//!
//! We avoid `alloc` - all error variants carry no data.
//! Implements `defmt::Format` for on-target logging when the `defmt`
//! feature is enabled.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// The ADC did not deliver a conversion.
    Adc,
}
