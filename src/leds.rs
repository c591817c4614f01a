//! PWM-driven RGB LED shared between the main loop and the button task.
//!
//! Red (GPIO13) and blue (GPIO12) sit on PWM slice 6, green (GPIO11) on
//! slice 5. Every slice wraps at 255 so a level maps 1:1 to the compare
//! register.
//!
//! The driver lives in a critical-section mutex: the gated red/blue write
//! of a tick and the toggle-then-zero of a button press never interleave.

use core::cell::RefCell;

use defmt::info;
use embassy_rp::peripherals::{PIN_11, PIN_12, PIN_13, PWM_SLICE5, PWM_SLICE6};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use stick2led::actuator::{LedChannel, LedDriver};
use stick2led::config::PWM_TOP;

static LEDS: Mutex<CriticalSectionRawMutex, RefCell<Option<RgbLed>>> =
    Mutex::new(RefCell::new(None));

/// The three LED channels and the PWM configs holding their compare values.
pub struct RgbLed {
    red_blue: Pwm<'static>,
    red_blue_config: PwmConfig,
    green: Pwm<'static>,
    green_config: PwmConfig,
}

impl RgbLed {
    /// Configure both slices with wrap 255 and every channel off.
    pub fn new(
        slice6: Peri<'static, PWM_SLICE6>,
        blue: Peri<'static, PIN_12>,
        red: Peri<'static, PIN_13>,
        slice5: Peri<'static, PWM_SLICE5>,
        green: Peri<'static, PIN_11>,
    ) -> Self {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.compare_b = 0;

        let red_blue = Pwm::new_output_ab(slice6, blue, red, config.clone());
        let green_pwm = Pwm::new_output_b(slice5, green, config.clone());

        Self {
            red_blue,
            red_blue_config: config.clone(),
            green: green_pwm,
            green_config: config,
        }
    }
}

impl LedDriver for RgbLed {
    fn set_level(&mut self, channel: LedChannel, level: u8) {
        let level = u16::from(level);
        match channel {
            LedChannel::Red => {
                self.red_blue_config.compare_b = level;
                self.red_blue.set_config(&self.red_blue_config);
            }
            LedChannel::Blue => {
                self.red_blue_config.compare_a = level;
                self.red_blue.set_config(&self.red_blue_config);
            }
            LedChannel::Green => {
                self.green_config.compare_b = level;
                self.green.set_config(&self.green_config);
            }
        }
    }
}

/// Hand the LED driver over to the shared slot. Call once at startup.
pub fn install(led: RgbLed) {
    LEDS.lock(|cell| {
        cell.replace(Some(led));
    });
    info!("LEDs: PWM wrap {}", PWM_TOP);
}

/// Run `f` with exclusive access to the LEDs.
///
/// Returns `None` if [`install`] has not run yet.
pub fn with_leds<R>(f: impl FnOnce(&mut RgbLed) -> R) -> Option<R> {
    LEDS.lock(|cell| cell.borrow_mut().as_mut().map(f))
}
