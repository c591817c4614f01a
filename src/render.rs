//! Square rendering onto any monochrome `DrawTarget`.
//!
//! The firmware draws into the SSD1306 frame buffer; tests draw into
//! `embedded_graphics::mock_display::MockDisplay`.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::SQUARE_SIZE;
use crate::mapping::DisplayCoordinate;

/// Bounding box of the square with its top-left corner at `at`.
pub fn square_bounds(at: DisplayCoordinate) -> Rectangle {
    Rectangle::new(
        Point::new(at.x, at.y),
        Size::new(SQUARE_SIZE, SQUARE_SIZE),
    )
}

/// Draw the filled square. Does not clear or flush.
pub fn draw_square<D>(target: &mut D, at: DisplayCoordinate) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    square_bounds(at)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
}

/// Clear `target` and draw the square: one full frame, minus the flush.
pub fn draw_frame<D>(target: &mut D, at: DisplayCoordinate) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    draw_square(target, at)
}
