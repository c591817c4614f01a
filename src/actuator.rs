//! LED actuator interface.
//!
//! The RGB LED is three PWM channels with a wrap of 255, so a level is
//! written straight through as the compare value. The firmware provides
//! the PWM-backed implementation; tests use a recording mock.

/// One colour channel of the RGB LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    /// Driven by joystick X deflection.
    Red,
    /// Indicator, toggled by the joystick push-button.
    Green,
    /// Driven by joystick Y deflection.
    Blue,
}

/// Sink for LED duty-cycle levels.
pub trait LedDriver {
    /// Set `channel` to `level` / 256 duty.
    fn set_level(&mut self, channel: LedChannel, level: u8);
}

impl<T: LedDriver + ?Sized> LedDriver for &mut T {
    fn set_level(&mut self, channel: LedChannel, level: u8) {
        (**self).set_level(channel, level)
    }
}

/// Driver that drops every write; stands in before the PWM outputs exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLeds;

impl LedDriver for NoLeds {
    fn set_level(&mut self, _channel: LedChannel, _level: u8) {}
}

/// Red/blue levels computed for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedLevels {
    pub red: u8,
    pub blue: u8,
}

impl LedLevels {
    pub const OFF: Self = Self { red: 0, blue: 0 };

    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}
