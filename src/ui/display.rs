//! SSD1306 OLED display wrapper.

use defmt::warn;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use stick2led::config::DISPLAY_I2C_ADDRESS;
use stick2led::mapping::DisplayCoordinate;
use stick2led::{render, Error};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
///
/// A display that fails to initialise is still returned; every frame
/// retries the transfer.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("Display: init failed at {:#x}", DISPLAY_I2C_ADDRESS);
    }
    display.clear_buffer();
    if display.flush().is_err() {
        warn!("Display: initial clear failed");
    }
    display
}

/// Clear the buffer, draw the square at `square`, and push it to the panel.
pub fn draw_square<I2C>(display: &mut Display<I2C>, square: DisplayCoordinate) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    render::draw_frame(display, square).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}
