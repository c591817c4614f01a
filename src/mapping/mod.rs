//! Sensor → actuator mapping.
//!
//! Two pure stages run once per tick:
//!
//! 1. **Coordinate mapper** - raw 12-bit joystick conversions become the
//!    top-left corner of the square, clamped so the square stays on screen.
//! 2. **Intensity mapper** - each clamped axis is compared with a dead zone
//!    around the centre and turned into a 0-255 LED level.
//!
//! All arithmetic is integer with floor division; the exact pixel and
//! level values are part of the observable behaviour.

pub mod coordinate;
pub mod intensity;

pub use coordinate::{map_to_display, DisplayCoordinate};
pub use intensity::{blue_level, intensity, red_level, DeadZone, DEAD_ZONE_X, DEAD_ZONE_Y};
