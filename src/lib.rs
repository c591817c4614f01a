//! Host-testable core of the stick2led firmware.
//!
//! Everything that does not touch a peripheral lives here: the
//! joystick → square → LED mapping, the button debounce/dispatch
//! pipeline, and square rendering onto any `embedded-graphics` target.
//!
//! Usage: `cargo test` (host, default features)
//!
//! Note: The embedded binary (`src/main.rs`, `--features embedded`) is
//! `#![no_std]` / `#![no_main]` and wires these pieces to the RP2040's
//! ADC, PWM, GPIO and the SSD1306 display.

#![cfg_attr(not(test), no_std)]

pub mod actuator;
pub mod config;
pub mod control;
pub mod error;
pub mod frame;
pub mod mapping;
pub mod render;
pub mod sample;

#[cfg(test)]
mod test_support;

pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::actuator::{LedChannel, LedLevels};
    use crate::config::{ADC_MAX, SQUARE_X_MAX, SQUARE_Y_MAX, X_EXTENT, Y_EXTENT};
    use crate::control::Controls;
    use crate::frame::{apply_levels, Frame};
    use crate::mapping::coordinate::{scale_x, scale_y};
    use crate::mapping::*;
    use crate::render::{draw_frame, square_bounds};
    use crate::sample::{Axis, RawSample};
    use crate::test_support::RecordingLeds;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;

    // ════════════════════════════════════════════════════════════════════════
    // Raw Sample Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn raw_sample_keeps_12_bits() {
        let s = RawSample::new(4095, 0);
        assert_eq!(s.x, 4095);
        assert_eq!(s.y, 0);

        let s = RawSample::new(0xF123, 0x1FFF);
        assert_eq!(s.x, 0x123);
        assert_eq!(s.y, 0xFFF);
    }

    #[test]
    fn raw_sample_axis_accessor() {
        let s = RawSample::new(10, 20);
        assert_eq!(s.axis(Axis::X), 10);
        assert_eq!(s.axis(Axis::Y), 20);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Coordinate Mapper Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn scale_x_covers_full_width_before_clamp() {
        for raw in 0..=ADC_MAX {
            let x = scale_x(raw);
            assert!((0..=X_EXTENT).contains(&x), "raw {} -> {}", raw, x);
        }
        assert_eq!(scale_x(0), 0);
        assert_eq!(scale_x(ADC_MAX), 127);
    }

    #[test]
    fn scale_y_covers_full_height_inverted_before_clamp() {
        for raw in 0..=ADC_MAX {
            let y = scale_y(raw);
            assert!((0..=Y_EXTENT).contains(&y), "raw {} -> {}", raw, y);
        }
        assert_eq!(scale_y(0), 63);
        assert_eq!(scale_y(ADC_MAX), 0);
    }

    #[test]
    fn mapped_square_always_on_screen() {
        for raw in (0..=ADC_MAX).step_by(7).chain([ADC_MAX]) {
            let at = map_to_display(RawSample::new(raw, raw));
            assert!((0..=SQUARE_X_MAX).contains(&at.x));
            assert!((0..=SQUARE_Y_MAX).contains(&at.y));
        }
    }

    #[test]
    fn mapping_uses_floor_division() {
        // 2048 * 127 / 4095 = 63.51..
        assert_eq!(scale_x(2048), 63);
        // (4095 - 2048) * 63 / 4095 = 31.49..
        assert_eq!(scale_y(2048), 31);
        // 33 * 127 / 4095 = 1.02..
        assert_eq!(scale_x(33), 1);
        assert_eq!(scale_x(32), 0);
    }

    #[test]
    fn mapping_clamps_corners() {
        assert_eq!(
            map_to_display(RawSample::new(0, 0)),
            DisplayCoordinate::new(0, 56)
        );
        assert_eq!(
            map_to_display(RawSample::new(ADC_MAX, ADC_MAX)),
            DisplayCoordinate::new(120, 0)
        );
    }

    #[test]
    fn mapping_pushing_stick_up_moves_square_up() {
        let low = map_to_display(RawSample::new(2048, 1000));
        let high = map_to_display(RawSample::new(2048, 3000));
        assert!(high.y < low.y);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Intensity Mapper Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn dead_zone_is_dark() {
        for x in 60..=68 {
            assert_eq!(intensity(x, DEAD_ZONE_X), 0, "x = {}", x);
        }
        for y in 28..=36 {
            assert_eq!(intensity(y, DEAD_ZONE_Y), 0, "y = {}", y);
        }
    }

    #[test]
    fn dead_zone_contains_is_inclusive() {
        assert!(DEAD_ZONE_X.contains(60));
        assert!(DEAD_ZONE_X.contains(68));
        assert!(!DEAD_ZONE_X.contains(59));
        assert!(!DEAD_ZONE_X.contains(69));
    }

    #[test]
    fn red_level_at_screen_edges() {
        assert_eq!(intensity(0, DEAD_ZONE_X), 255);
        // (120 - 68) * 255 / (127 - 68) = 13260 / 59 = 224.7..
        assert_eq!(intensity(120, DEAD_ZONE_X), 224);
        // Unclamped extent reaches full scale.
        assert_eq!(intensity(127, DEAD_ZONE_X), 255);
    }

    #[test]
    fn blue_level_at_screen_edges() {
        assert_eq!(intensity(0, DEAD_ZONE_Y), 255);
        // (56 - 36) * 255 / (63 - 36) = 5100 / 27 = 188.8..
        assert_eq!(intensity(56, DEAD_ZONE_Y), 188);
        assert_eq!(intensity(63, DEAD_ZONE_Y), 255);
    }

    #[test]
    fn level_just_outside_dead_zone() {
        assert_eq!(intensity(59, DEAD_ZONE_X), 4);
        assert_eq!(intensity(69, DEAD_ZONE_X), 4);
        assert_eq!(intensity(27, DEAD_ZONE_Y), 9);
        assert_eq!(intensity(37, DEAD_ZONE_Y), 9);
    }

    #[test]
    fn level_ramps_away_from_centre() {
        let mut prev = 255;
        for x in 0..=DEAD_ZONE_X.max {
            let level = intensity(x, DEAD_ZONE_X);
            assert!(level <= prev);
            prev = level;
        }
        let mut prev = 0;
        for x in DEAD_ZONE_X.min..=SQUARE_X_MAX {
            let level = intensity(x, DEAD_ZONE_X);
            assert!(level >= prev);
            prev = level;
        }
    }

    #[test]
    fn level_saturates_on_out_of_domain_input() {
        assert_eq!(intensity(-10, DEAD_ZONE_X), 255);
        assert_eq!(intensity(500, DEAD_ZONE_X), 255);
        // Degenerate zone at the origin must not divide by zero.
        assert_eq!(intensity(-1, DeadZone::new(0, 4, 10)), 255);
        assert_eq!(intensity(12, DeadZone::new(0, 10, 10)), 255);
        assert_eq!(intensity(i32::MIN, DEAD_ZONE_X), 255);
        assert_eq!(intensity(i32::MAX, DEAD_ZONE_X), 255);
        assert_eq!(intensity(i32::MIN, DEAD_ZONE_Y), 255);
        assert_eq!(intensity(i32::MAX, DEAD_ZONE_Y), 255);
    }

    #[test]
    fn red_and_blue_follow_their_axis() {
        let at = DisplayCoordinate::new(0, 32);
        assert_eq!(red_level(at), 255);
        assert_eq!(blue_level(at), 0);

        let at = DisplayCoordinate::new(64, 0);
        assert_eq!(red_level(at), 0);
        assert_eq!(blue_level(at), 255);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Frame Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn frame_full_deflection_bottom_left() {
        let frame = Frame::from_sample(RawSample::new(0, 0));
        assert_eq!(frame.square, DisplayCoordinate::new(0, 56));
        assert_eq!(frame.levels, LedLevels { red: 255, blue: 188 });
    }

    #[test]
    fn frame_centred_stick_is_dark() {
        let frame = Frame::from_sample(RawSample::new(2048, 2048));
        assert_eq!(frame.square, DisplayCoordinate::new(63, 31));
        assert!(frame.levels.is_off());
    }

    #[test]
    fn apply_levels_writes_when_enabled() {
        let controls = Controls::new(true, false);
        let mut leds = RecordingLeds::default();
        let applied = apply_levels(LedLevels { red: 10, blue: 20 }, &controls, &mut leds);
        assert!(applied);
        assert_eq!(leds.red, Some(10));
        assert_eq!(leds.blue, Some(20));
        assert_eq!(leds.green, None);
    }

    #[test]
    fn apply_levels_skips_when_disabled() {
        let controls = Controls::new(false, false);
        let mut leds = RecordingLeds::default();
        let applied = apply_levels(LedLevels { red: 10, blue: 20 }, &controls, &mut leds);
        assert!(!applied);
        assert!(leds.writes.is_empty());
    }

    #[test]
    fn apply_levels_never_touches_indicator() {
        let controls = Controls::new(true, true);
        let mut leds = RecordingLeds::default();
        apply_levels(LedLevels { red: 1, blue: 2 }, &controls, &mut leds);
        assert!(leds.writes.iter().all(|(ch, _)| *ch != LedChannel::Green));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Render Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn square_bounds_are_8x8_from_top_left() {
        let rect = square_bounds(DisplayCoordinate::new(4, 10));
        assert_eq!(rect.top_left, Point::new(4, 10));
        assert_eq!(rect.size, Size::new(8, 8));
        assert_eq!(rect.bottom_right(), Some(Point::new(11, 17)));
    }

    #[test]
    fn draw_frame_fills_square_and_clears_rest() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);

        draw_frame(&mut display, DisplayCoordinate::new(4, 10)).unwrap();

        assert_eq!(display.get_pixel(Point::new(4, 10)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(11, 17)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(7, 13)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(3, 10)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(12, 10)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(4, 18)), Some(BinaryColor::Off));
    }

    #[test]
    fn draw_frame_erases_previous_square() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);

        draw_frame(&mut display, DisplayCoordinate::new(0, 0)).unwrap();
        draw_frame(&mut display, DisplayCoordinate::new(40, 40)).unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(40, 40)), Some(BinaryColor::On));
    }
}
