//! Button input pipeline - debounce filter + event dispatch.
//!
//! Every falling edge on one of the three monitored buttons (active-low,
//! internal pull-up) becomes a [`ButtonEvent`] that is fed through
//! [`dispatch::handle_press`]:
//!
//! 1. The [`debounce::Debouncer`] accepts or rejects it.
//! 2. Accepted events act on [`Controls`] and the LED outputs, or
//!    reboot the board into its USB bootloader.
//!
//! ## Shared state
//!
//! [`Controls`] holds the two flags written from the dispatch path and
//! read by the main loop. Each flag is a single atomic word; every
//! mutation is one load followed by one store from the only writer.

pub mod debounce;
pub mod dispatch;


use core::sync::atomic::{AtomicBool, Ordering};

/// The three monitored push-buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button B - reboot into the USB bootloader.
    Reboot,
    /// Button A - enable / disable joystick-driven LEDs.
    LedToggle,
    /// Joystick push - toggle the green indicator LED.
    Indicator,
}

impl Button {
    pub const COUNT: usize = 3;

    /// Stable index, used for per-button bookkeeping.
    pub const fn index(self) -> usize {
        match self {
            Button::Reboot => 0,
            Button::LedToggle => 1,
            Button::Indicator => 2,
        }
    }
}

/// A falling edge seen on `button` at `timestamp_ms` (ms since boot).
///
/// Lives only for the duration of one dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    pub timestamp_ms: u32,
}

impl ButtonEvent {
    pub const fn new(button: Button, timestamp_ms: u32) -> Self {
        Self {
            button,
            timestamp_ms,
        }
    }
}

/// Process-wide flags shared between the dispatch path and the main loop.
pub struct Controls {
    leds_enabled: AtomicBool,
    indicator_on: AtomicBool,
}

impl Controls {
    pub const fn new(leds_enabled: bool, indicator_on: bool) -> Self {
        Self {
            leds_enabled: AtomicBool::new(leds_enabled),
            indicator_on: AtomicBool::new(indicator_on),
        }
    }

    /// Whether the main loop may drive the red/blue LEDs.
    pub fn leds_enabled(&self) -> bool {
        self.leds_enabled.load(Ordering::Acquire)
    }

    /// Current state of the green indicator LED.
    pub fn indicator_on(&self) -> bool {
        self.indicator_on.load(Ordering::Acquire)
    }

    // Toggles are only called from the dispatch path, which is the single
    // writer; load + store is enough (thumbv6m has no atomic RMW).

    pub(crate) fn toggle_leds_enabled(&self) -> bool {
        let enabled = !self.leds_enabled.load(Ordering::Relaxed);
        self.leds_enabled.store(enabled, Ordering::Release);
        enabled
    }

    pub(crate) fn toggle_indicator(&self) -> bool {
        let on = !self.indicator_on.load(Ordering::Relaxed);
        self.indicator_on.store(on, Ordering::Release);
        on
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(
            crate::config::LEDS_ENABLED_AT_BOOT,
            crate::config::INDICATOR_ON_AT_BOOT,
        )
    }
}
