//! stick2led firmware for the RP2040.
//!
//! A two-axis joystick moves an 8×8 square around a 128×64 SSD1306 OLED
//! and sets the red/blue LED brightness from how far the square is from
//! the centre of the screen.
//!
//! # Button Controls
//!
//! - **A**: Enable / disable the joystick-driven red and blue LEDs
//! - **B**: Reboot into the USB bootloader (BOOTSEL)
//! - **Joystick push**: Toggle the green indicator LED
//!
//! # Architecture
//!
//! - Main task: every 100 ms sample → map → redraw → gated LED write
//! - Button task: waits on the three falling edges, debounces, dispatches

#![no_std]
#![no_main]

mod joystick;
mod leds;
mod ui;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use stick2led::config;
use stick2led::control::debounce::Debouncer;
use stick2led::control::Controls;
use stick2led::frame::{apply_levels, Frame};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

/// LED enable + indicator flags. Written by the button task only.
pub static CONTROLS: Controls =
    Controls::new(config::LEDS_ENABLED_AT_BOOT, config::INDICATOR_ON_AT_BOOT);

/// Debounce state for all three buttons.
pub static DEBOUNCER: Debouncer =
    Debouncer::new(config::DEBOUNCE_WINDOW_MS, config::DEBOUNCE_SCOPE);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("stick2led: starting");

    // Display on I2C1 (SDA GPIO14, SCL GPIO15).
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::DISPLAY_I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = ui::display::init(i2c);
    info!("Display: ready");

    // Joystick: X on ADC1 (GPIO27), Y on ADC0 (GPIO26).
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let x = adc::Channel::new_pin(p.PIN_27, Pull::None);
    let y = adc::Channel::new_pin(p.PIN_26, Pull::None);
    let mut joystick = joystick::Joystick::new(adc, x, y);
    info!("Joystick: ready");

    leds::install(leds::RgbLed::new(
        p.PWM_SLICE6,
        p.PIN_12,
        p.PIN_13,
        p.PWM_SLICE5,
        p.PIN_11,
    ));

    let reboot = Input::new(p.PIN_6, Pull::Up);
    let led_toggle = Input::new(p.PIN_5, Pull::Up);
    let indicator = Input::new(p.PIN_22, Pull::Up);
    spawner.must_spawn(ui::buttons::button_task(reboot, led_toggle, indicator));
    info!(
        "Buttons: ready (debounce {} ms, {})",
        DEBOUNCER.window_ms(),
        DEBOUNCER.scope()
    );

    loop {
        match joystick.sample().await {
            Ok(raw) => {
                let next = Frame::from_sample(raw);

                if let Err(e) = ui::display::draw_square(&mut display, next.square) {
                    warn!("Display: {}", e);
                }

                leds::with_leds(|led| apply_levels(next.levels, &CONTROLS, led));
            }
            Err(e) => warn!("Joystick: {}", e),
        }

        Timer::after(Duration::from_millis(config::TICK_PERIOD_MS)).await;
    }
}
