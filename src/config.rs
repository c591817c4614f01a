//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and the numeric
//! constants of the joystick → display → LED mapping live here so they
//! can be tuned in one place.

use crate::control::debounce::DebounceScope;

// Timing

/// Main loop period (ms): sample, redraw, actuate, then sleep this long.
pub const TICK_PERIOD_MS: u64 = 100;

/// Minimum time between two accepted button edges (ms).
pub const DEBOUNCE_WINDOW_MS: u32 = 200;

/// Whether the three buttons share one debounce timestamp or keep their own.
pub const DEBOUNCE_SCOPE: DebounceScope = DebounceScope::Shared;

// ADC

/// Full-scale reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

// Display (SSD1306 128×64 over I²C)

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Edge length of the moving square (pixels).
pub const SQUARE_SIZE: u32 = 8;

/// Largest mapped X before clamping (last pixel column).
pub const X_EXTENT: i32 = DISPLAY_WIDTH as i32 - 1;
/// Largest mapped Y before clamping (last pixel row).
pub const Y_EXTENT: i32 = DISPLAY_HEIGHT as i32 - 1;

/// Clamp limits keeping the whole square on screen.
pub const SQUARE_X_MAX: i32 = (DISPLAY_WIDTH - SQUARE_SIZE) as i32;
pub const SQUARE_Y_MAX: i32 = (DISPLAY_HEIGHT - SQUARE_SIZE) as i32;

/// 7-bit I²C address of the display controller.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus clock for the display.
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

// Dead zone around the display centre (inclusive bounds)

pub const DEAD_ZONE_X_MIN: i32 = 60;
pub const DEAD_ZONE_X_MAX: i32 = 68;
pub const DEAD_ZONE_Y_MIN: i32 = 28;
pub const DEAD_ZONE_Y_MAX: i32 = 36;

// PWM

/// PWM wrap value for every LED slice; a level of N gives N/256 duty.
pub const PWM_TOP: u16 = 255;

/// Level written to the indicator LED when it is on.
pub const LED_FULL: u8 = 255;

// Boot state

pub const LEDS_ENABLED_AT_BOOT: bool = true;
pub const INDICATOR_ON_AT_BOOT: bool = false;

// GPIO pin assignments (BitDogLab / Pico defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your own carrier board.
//
//   I²C1 SDA              → GPIO14
//   I²C1 SCL              → GPIO15
//   Joystick X            → GPIO27 (ADC1)
//   Joystick Y            → GPIO26 (ADC0)
//   Joystick push         → GPIO22  (indicator toggle)
//   Button A              → GPIO5   (LED enable toggle)
//   Button B              → GPIO6   (reboot to BOOTSEL)
//   LED red               → GPIO13  (PWM slice 6, channel B)
//   LED blue              → GPIO12  (PWM slice 6, channel A)
//   LED green             → GPIO11  (PWM slice 5, channel B)
