use paper_size::*;

#[test]
fn test_convert_identity() {
    let size = Size::new(123.45, 67.89);
    for unit in [
        Unit::Millimeter,
        Unit::Point,
        Unit::Inch,
        Unit::Pica,
        Unit::Didot,
        Unit::Cicero,
    ] {
        assert_eq!(convert(size, unit, unit), size);
    }
}

#[test]
fn test_convert_degenerate_unchanged() {
    let zero = Size::new(0.0, 0.0);
    assert_eq!(convert(zero, Unit::Millimeter, Unit::Point), zero);
}

#[test]
fn test_convert_mm_to_points() {
    let a4 = convert(Size::new(210.0, 297.0), Unit::Millimeter, Unit::Point);
    assert_eq!(a4, Size::new(595.28, 841.89));
}

#[test]
fn test_convert_round_trips_at_two_decimals() {
    // mm -> pt -> mm
    let a4_mm = Size::new(210.0, 297.0);
    let a4_pt = convert(a4_mm, Unit::Millimeter, Unit::Point);
    assert_eq!(convert(a4_pt, Unit::Point, Unit::Millimeter), a4_mm);

    // pt -> in -> pt, exact because the factor is integral
    let pt = Size::new(72.0, 144.0);
    let inches = convert(pt, Unit::Point, Unit::Inch);
    assert_eq!(inches, Size::new(1.0, 2.0));
    assert_eq!(convert(inches, Unit::Inch, Unit::Point), pt);
}

#[test]
fn test_convert_inch_to_pica() {
    let picas = convert(Size::new(1.0, 2.0), Unit::Inch, Unit::Pica);
    assert_eq!(picas, Size::new(6.0, 12.0));
}

#[test]
fn test_convert_points_to_didot() {
    let didot = convert(Size::new(100.0, 100.0), Unit::Point, Unit::Didot);
    assert_eq!(didot, Size::new(93.82, 93.82));
}

#[test]
fn test_to_points() {
    assert_eq!(
        to_points(Size::new(210.0, 297.0), Unit::Millimeter),
        IntSize::new(595, 842)
    );
    assert_eq!(
        to_points(Size::new(8.5, 11.0), Unit::Inch),
        IntSize::new(612, 792)
    );
    assert_eq!(to_points(Size::new(0.0, 0.0), Unit::Millimeter), IntSize::ZERO);
}

#[test]
fn test_points_to_units() {
    assert_eq!(
        points_to_units(IntSize::new(595, 842), Unit::Pica),
        Size::new(49.58, 70.17)
    );
    assert_eq!(
        points_to_units(IntSize::new(595, 842), Unit::Cicero),
        Size::new(46.52, 65.83)
    );
}

#[test]
fn test_to_pixels_reference_resolution() {
    // 72 dpi is the points reference resolution
    let letter = IntSize::new(612, 792);
    assert_eq!(to_pixels(letter, 72), letter);
}

#[test]
fn test_to_pixels_scaling() {
    assert_eq!(to_pixels(IntSize::new(612, 792), 144), IntSize::new(1224, 1584));
    assert_eq!(to_pixels(IntSize::new(595, 842), 96), IntSize::new(793, 1123));
}

#[test]
fn test_to_pixels_bad_resolution() {
    let result = to_pixels(IntSize::new(612, 792), 0);
    assert!(!result.is_valid());
    assert_eq!(result, IntSize::ZERO);
    assert_eq!(to_pixels(IntSize::new(612, 792), -300), IntSize::ZERO);
}

#[test]
fn test_key_for_custom() {
    assert_eq!(
        key_for_custom(Size::new(8.5, 11.0), Unit::Inch),
        "Custom.8.5x11in"
    );
    assert_eq!(
        key_for_custom(Size::new(210.0, 297.0), Unit::Millimeter),
        "Custom.210x297mm"
    );
    // Points have no unit suffix
    assert_eq!(
        key_for_custom(Size::new(100.0, 200.0), Unit::Point),
        "Custom.100x200"
    );
    assert_eq!(
        key_for_custom(Size::new(49.58, 70.17), Unit::Pica),
        "Custom.49.58x70.17pc"
    );
}

#[test]
fn test_size_validated() {
    assert!(Size::new(8.5, 11.0).validated().is_ok());
    assert_eq!(
        Size::new(0.0, 11.0).validated(),
        Err(PaperSizeError::Degenerate {
            width: 0.0,
            height: 11.0
        })
    );
    assert!(Size::new(-1.0, -1.0).validated().is_err());
}
