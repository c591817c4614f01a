//! User interface subsystem - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, redrawn every tick
//! - **Buttons**: 3 tactile switches (A, B, joystick push), active-low
//!   with internal pull-ups, debounced in software

pub mod buttons;
pub mod display;
