//! Debounced button event dispatch.
//!
//! Called once per falling edge. Rejected edges have no side effects;
//! accepted edges act immediately:
//!
//! | Button      | Action                                                    |
//! |-------------|-----------------------------------------------------------|
//! | `Reboot`    | reboot into the USB bootloader (does not return)          |
//! | `LedToggle` | flip LED enable; on disable force red and blue to 0 now   |
//! | `Indicator` | flip the indicator; green to full or 0 accordingly        |
//!
//! Callers that share the LED driver with the main loop must hold it for
//! the whole call so the toggle and the zeroing land together.

use super::debounce::Debouncer;
use super::{Button, ButtonEvent, Controls};
use crate::actuator::{LedChannel, LedDriver};
use crate::config::LED_FULL;

/// Platform hook that restarts the board in firmware-update mode.
pub trait Bootloader {
    /// Reboot into the USB mass-storage bootloader.
    ///
    /// Does not return on hardware; mocks return so the outcome can be
    /// checked.
    fn reboot_to_usb_boot(&mut self);
}

/// What a single edge did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Inside the debounce window; nothing changed.
    Ignored,
    /// The bootloader call returned.
    Rebooting,
    /// LED enable flag flipped to the contained value.
    LedsEnabled(bool),
    /// Indicator flipped to the contained value.
    Indicator(bool),
}

impl Dispatch {
    pub fn accepted(&self) -> bool {
        !matches!(self, Dispatch::Ignored)
    }
}

/// Debounce `event` and act on it.
pub fn handle_press<L, B>(
    event: ButtonEvent,
    debouncer: &Debouncer,
    controls: &Controls,
    leds: &mut L,
    bootloader: &mut B,
) -> Dispatch
where
    L: LedDriver + ?Sized,
    B: Bootloader + ?Sized,
{
    if !debouncer.accept(event.button, event.timestamp_ms) {
        return Dispatch::Ignored;
    }

    match event.button {
        Button::Reboot => {
            bootloader.reboot_to_usb_boot();
            Dispatch::Rebooting
        }
        Button::LedToggle => {
            let enabled = controls.toggle_leds_enabled();
            if !enabled {
                leds.set_level(LedChannel::Red, 0);
                leds.set_level(LedChannel::Blue, 0);
            }
            Dispatch::LedsEnabled(enabled)
        }
        Button::Indicator => {
            let on = controls.toggle_indicator();
            leds.set_level(LedChannel::Green, if on { LED_FULL } else { 0 });
            Dispatch::Indicator(on)
        }
    }
}
