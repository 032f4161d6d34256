//! Pure unit math between page measurement units.
//!
//! Every conversion routes through points. Fractional results are forced to
//! 2 decimal places so that repeated conversions stay stable instead of
//! accumulating float drift; the defined point sizes are always integral.

use crate::types::{IntSize, Size, Unit};

/// Convert a width/height pair between units.
///
/// A degenerate size (both dimensions zero, or any dimension non-finite)
/// and identical units come back unchanged. Results are rounded to
/// 2 decimal places.
pub fn convert(size: Size, from: Unit, to: Unit) -> Size {
    if is_degenerate(size) || from == to {
        return size;
    }

    // First into points, then out to the requested unit
    let mut points = size;
    if from != Unit::Point {
        let multiplier = from.points_per_unit();
        points = Size::new(size.width * multiplier, size.height * multiplier);
    }
    let multiplier = to.points_per_unit();
    Size::new(
        (points.width * 100.0 / multiplier).round() / 100.0,
        (points.height * 100.0 / multiplier).round() / 100.0,
    )
}

/// Convert a unit size to integer points, rounding to the nearest point
pub fn to_points(size: Size, units: Unit) -> IntSize {
    if is_degenerate(size) {
        return IntSize::ZERO;
    }
    let multiplier = units.points_per_unit();
    IntSize::new(
        (size.width * multiplier).round() as i32,
        (size.height * multiplier).round() as i32,
    )
}

/// Convert an integer point size to another unit, at 2 decimal places
pub fn points_to_units(size: IntSize, units: Unit) -> Size {
    if !size.is_valid() {
        return Size::default();
    }
    let multiplier = units.points_per_unit();
    Size::new(
        (size.width as f64 * 100.0 / multiplier).round() / 100.0,
        (size.height as f64 * 100.0 / multiplier).round() / 100.0,
    )
}

/// Scale a point size to device pixels at the given resolution.
///
/// Points are defined at 72 dpi, so 72 is the identity. A non-positive
/// resolution gives `IntSize::ZERO` rather than dividing by zero.
pub fn to_pixels(size: IntSize, resolution: i32) -> IntSize {
    if !size.is_valid() || resolution <= 0 {
        return IntSize::ZERO;
    }
    let scale = resolution as f64 / 72.0;
    IntSize::new(
        (size.width as f64 * scale).round() as i32,
        (size.height as f64 * scale).round() as i32,
    )
}

/// PPD key for a custom size, `Custom.<width>x<height><unit>`.
///
/// Assumes the dimensions were already rounded to at most 2 decimals.
pub fn key_for_custom(size: Size, units: Unit) -> String {
    format!(
        "Custom.{}x{}{}",
        size.width,
        size.height,
        units.key_abbreviation()
    )
}

fn is_degenerate(size: Size) -> bool {
    (size.width == 0.0 && size.height == 0.0)
        || !size.width.is_finite()
        || !size.height.is_finite()
}
