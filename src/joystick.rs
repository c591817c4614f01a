//! Two-axis analog joystick on the RP2040 ADC.
//!
//! Each tick converts X then Y; the ADC mux is switched to the matching
//! channel before each conversion.

use embassy_rp::adc::{Adc, Async, Channel};
use stick2led::sample::{Axis, RawSample};
use stick2led::Error;

pub struct Joystick<'d> {
    adc: Adc<'d, Async>,
    x: Channel<'d>,
    y: Channel<'d>,
}

impl<'d> Joystick<'d> {
    pub fn new(adc: Adc<'d, Async>, x: Channel<'d>, y: Channel<'d>) -> Self {
        Self { adc, x, y }
    }

    /// One 12-bit conversion on `axis`.
    pub async fn read(&mut self, axis: Axis) -> Result<u16, Error> {
        let channel = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        self.adc.read(channel).await.map_err(|_| Error::Adc)
    }

    /// Read both axes.
    pub async fn sample(&mut self) -> Result<RawSample, Error> {
        let x = self.read(Axis::X).await?;
        let y = self.read(Axis::Y).await?;
        Ok(RawSample::new(x, y))
    }
}
