//! Per-tick computation for the main loop.
//!
//! `sample → Frame → (display, LEDs)`. Everything here is pure except
//! [`apply_levels`], which writes the red/blue channels when the enable
//! flag allows it.

use crate::actuator::{LedChannel, LedDriver, LedLevels};
use crate::control::Controls;
use crate::mapping::{blue_level, map_to_display, red_level, DisplayCoordinate};
use crate::sample::RawSample;

/// What one tick should show: square position and LED levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub square: DisplayCoordinate,
    pub levels: LedLevels,
}

impl Frame {
    pub fn from_sample(raw: RawSample) -> Self {
        let square = map_to_display(raw);
        Self {
            square,
            levels: LedLevels {
                red: red_level(square),
                blue: blue_level(square),
            },
        }
    }
}

/// Write `levels` to the red and blue channels if LEDs are enabled.
///
/// Returns whether anything was written. Must run under the same LED lock
/// as the dispatch path.
pub fn apply_levels<L>(levels: LedLevels, controls: &Controls, leds: &mut L) -> bool
where
    L: LedDriver + ?Sized,
{
    if !controls.leds_enabled() {
        return false;
    }
    leds.set_level(LedChannel::Red, levels.red);
    leds.set_level(LedChannel::Blue, levels.blue);
    true
}
