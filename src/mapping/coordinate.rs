//! Raw ADC sample → on-screen square position.
//!
//! ```text
//! x = raw_x * 127 / 4095                 clamp to [0, 120]
//! y = (4095 - raw_y) * 63 / 4095         clamp to [0, 56]
//! ```
//!
//! Y is inverted so pushing the stick up moves the square up.

use crate::config::{ADC_MAX, SQUARE_X_MAX, SQUARE_Y_MAX, X_EXTENT, Y_EXTENT};
use crate::sample::RawSample;

/// Top-left corner of the square in display pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCoordinate {
    pub x: i32,
    pub y: i32,
}

impl DisplayCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scale a raw X conversion onto `[0, X_EXTENT]` without clamping.
pub fn scale_x(raw_x: u16) -> i32 {
    i32::from(raw_x) * X_EXTENT / i32::from(ADC_MAX)
}

/// Scale a raw Y conversion onto `[0, Y_EXTENT]`, inverted, without clamping.
pub fn scale_y(raw_y: u16) -> i32 {
    (i32::from(ADC_MAX) - i32::from(raw_y)) * Y_EXTENT / i32::from(ADC_MAX)
}

/// Map a raw sample to the clamped square position.
pub fn map_to_display(raw: RawSample) -> DisplayCoordinate {
    DisplayCoordinate {
        x: scale_x(raw.x).clamp(0, SQUARE_X_MAX),
        y: scale_y(raw.y).clamp(0, SQUARE_Y_MAX),
    }
}
