//! Raw joystick sample as delivered by the ADC.

use crate::config::ADC_MAX;

/// Which joystick axis an ADC conversion belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// One pair of 12-bit conversions, X then Y. Produced fresh every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: u16,
    pub y: u16,
}

impl RawSample {
    /// Build a sample, keeping only the low 12 bits of each conversion.
    pub const fn new(x: u16, y: u16) -> Self {
        Self {
            x: x & ADC_MAX,
            y: y & ADC_MAX,
        }
    }

    /// Reading for a single axis.
    pub fn axis(&self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}
