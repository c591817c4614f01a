//! GPIO button input feeding the debounce/dispatch pipeline.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - B        - reboot into the USB bootloader
//!   - A        - enable / disable joystick-driven LEDs
//!   - JOYSTICK - toggle the green indicator LED
//!
//! One task waits on all three falling edges at once, stamps the edge
//! with the uptime in milliseconds, and runs it through
//! `dispatch::handle_press` while holding the LED lock. If the PWM
//! outputs are not installed yet the press is dispatched against
//! [`NoLeds`], so debouncing and the reboot never depend on the LEDs.

use defmt::{debug, info, warn};
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use stick2led::actuator::NoLeds;
use stick2led::control::dispatch::{self, Bootloader, Dispatch};
use stick2led::control::{Button, ButtonEvent};

use crate::leds;
use crate::{CONTROLS, DEBOUNCER};

/// Reboot through the RP2040 boot ROM.
pub struct RomBootloader;

impl Bootloader for RomBootloader {
    fn reboot_to_usb_boot(&mut self) {
        info!("Button: entering BOOTSEL");
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
    }
}

/// Wait for button edges forever and dispatch each one.
#[embassy_executor::task]
pub async fn button_task(
    mut reboot: Input<'static>,
    mut led_toggle: Input<'static>,
    mut indicator: Input<'static>,
) -> ! {
    loop {
        let button = match select3(
            reboot.wait_for_falling_edge(),
            led_toggle.wait_for_falling_edge(),
            indicator.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => Button::Reboot,
            Either3::Second(()) => Button::LedToggle,
            Either3::Third(()) => Button::Indicator,
        };

        // u32 ms wraps after ~49 days; the debouncer compares with wrapping_sub.
        let event = ButtonEvent::new(button, Instant::now().as_millis() as u32);

        let outcome = leds::with_leds(|led| {
            dispatch::handle_press(event, &DEBOUNCER, &CONTROLS, led, &mut RomBootloader)
        })
        .unwrap_or_else(|| {
            warn!("Button: {} before LEDs were ready", button);
            dispatch::handle_press(event, &DEBOUNCER, &CONTROLS, &mut NoLeds, &mut RomBootloader)
        });

        match outcome {
            Dispatch::Ignored => debug!("Button: {} bounced at {} ms", button, event.timestamp_ms),
            Dispatch::Rebooting => warn!("Button: bootloader call returned"),
            result => info!("Button: {} -> {}", button, result),
        }
    }
}
