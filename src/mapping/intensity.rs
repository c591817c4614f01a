//! Square position → LED level.
//!
//! Each axis has an inclusive dead zone around the display centre. Inside
//! it the LED is dark; outside it the level rises linearly towards the
//! nearer screen edge:
//!
//! ```text
//! coord < min : (min - coord) * 255 / min
//! coord > max : (coord - max) * 255 / (extent - max)
//! ```
//!
//! X drives the red LED, Y drives the blue LED.

use super::DisplayCoordinate;
use crate::config::{
    DEAD_ZONE_X_MAX, DEAD_ZONE_X_MIN, DEAD_ZONE_Y_MAX, DEAD_ZONE_Y_MIN, X_EXTENT, Y_EXTENT,
};

/// Full-scale LED level.
const LEVEL_MAX: i32 = 255;

/// Inclusive no-deflection interval on one axis, plus the axis extent the
/// upper ramp is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeadZone {
    pub min: i32,
    pub max: i32,
    pub extent: i32,
}

impl DeadZone {
    pub const fn new(min: i32, max: i32, extent: i32) -> Self {
        Self { min, max, extent }
    }

    pub fn contains(&self, coord: i32) -> bool {
        (self.min..=self.max).contains(&coord)
    }
}

/// Dead zone for the X axis (red LED).
pub const DEAD_ZONE_X: DeadZone = DeadZone::new(DEAD_ZONE_X_MIN, DEAD_ZONE_X_MAX, X_EXTENT);

/// Dead zone for the Y axis (blue LED).
pub const DEAD_ZONE_Y: DeadZone = DeadZone::new(DEAD_ZONE_Y_MIN, DEAD_ZONE_Y_MAX, Y_EXTENT);

/// LED level for a clamped coordinate relative to `zone`.
pub fn intensity(coord: i32, zone: DeadZone) -> u8 {
    let level = if coord < zone.min {
        zone.min
            .saturating_sub(coord)
            .saturating_mul(LEVEL_MAX)
            .checked_div(zone.min)
            .unwrap_or(LEVEL_MAX)
    } else if coord > zone.max {
        coord
            .saturating_sub(zone.max)
            .saturating_mul(LEVEL_MAX)
            .checked_div(zone.extent.saturating_sub(zone.max))
            .unwrap_or(LEVEL_MAX)
    } else {
        0
    };

    // Only reachable with unclamped input.
    level.clamp(0, LEVEL_MAX) as u8
}

/// Red LED level from the square's X position.
pub fn red_level(at: DisplayCoordinate) -> u8 {
    intensity(at.x, DEAD_ZONE_X)
}

/// Blue LED level from the square's Y position.
pub fn blue_level(at: DisplayCoordinate) -> u8 {
    intensity(at.y, DEAD_ZONE_Y)
}
