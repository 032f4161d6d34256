use paper_size::*;

#[test]
fn test_standard_page() {
    let a4 = PageSize::new(PageSizeId::A4);
    assert!(a4.is_valid());
    assert_eq!(a4.key(), "A4");
    assert_eq!(a4.id(), PageSizeId::A4);
    assert_eq!(a4.windows_id(), Some(9));
    assert_eq!(a4.definition_units(), Unit::Millimeter);
    assert_eq!(a4.size_points(), IntSize::new(595, 842));
    assert_eq!(a4.size(Unit::Millimeter), Size::new(210.0, 297.0));
    assert_eq!(a4.size(Unit::Point), Size::new(595.0, 842.0));
    assert_eq!(a4.size(Unit::Inch), Size::new(8.27, 11.69));
}

#[test]
fn test_custom_id_is_not_valid() {
    let page = PageSize::new(PageSizeId::Custom);
    assert!(!page.is_valid());
    assert_eq!(page.size_points(), IntSize::ZERO);
}

#[test]
fn test_from_points_matches_standard() {
    let page = PageSize::from_points(IntSize::new(612, 792), SizeMatchPolicy::Fuzzy);
    assert_eq!(page.id(), PageSizeId::Letter);
    assert_eq!(page.key(), "Letter");
    assert_eq!(page, PageSize::new(PageSizeId::Letter));
}

#[test]
fn test_from_points_custom() {
    let page = PageSize::from_points(IntSize::new(500, 500), SizeMatchPolicy::Fuzzy);
    assert!(page.is_valid());
    assert_eq!(page.id(), PageSizeId::Custom);
    assert_eq!(page.key(), "Custom.500x500");
    assert_eq!(page.size_points(), IntSize::new(500, 500));
    assert_eq!(page.windows_id(), None);
}

#[test]
fn test_with_size_snaps_to_standard() {
    // The A4 definition size in millimeters converts to the exact A4
    // point size, so even exact matching binds the standard id
    let page = PageSize::with_size(Size::new(210.0, 297.0), Unit::Millimeter, SizeMatchPolicy::Exact);
    assert_eq!(page.id(), PageSizeId::A4);
    assert_eq!(page, PageSize::new(PageSizeId::A4));

    let letter = PageSize::with_size(Size::new(215.9, 279.4), Unit::Millimeter, SizeMatchPolicy::Fuzzy);
    assert_eq!(letter.id(), PageSizeId::Letter);
}

#[test]
fn test_with_size_custom_keeps_units() {
    let page = PageSize::with_size(Size::new(100.0, 200.0), Unit::Millimeter, SizeMatchPolicy::Fuzzy);
    assert_eq!(page.id(), PageSizeId::Custom);
    assert_eq!(page.key(), "Custom.100x200mm");
    assert_eq!(page.definition_units(), Unit::Millimeter);
    assert_eq!(page.size_points(), IntSize::new(283, 567));
    assert_eq!(page.size(Unit::Millimeter), Size::new(100.0, 200.0));
}

#[test]
fn test_size_pixels() {
    let letter = PageSize::new(PageSizeId::Letter);
    assert_eq!(letter.size_pixels(72), IntSize::new(612, 792));
    assert_eq!(letter.size_pixels(144), IntSize::new(1224, 1584));
    assert!(!letter.size_pixels(0).is_valid());
}

#[test]
fn test_equality_is_exact() {
    assert_eq!(PageSize::new(PageSizeId::A4), PageSize::new(PageSizeId::A4));
    // A4 and A4Small share dimensions but not keys
    assert_ne!(PageSize::new(PageSizeId::A4), PageSize::new(PageSizeId::A4Small));
}

#[test]
fn test_equivalence_ignores_key_and_units() {
    // Same physical size reached through different paths
    let a4 = PageSize::new(PageSizeId::A4);
    let a4_small = PageSize::new(PageSizeId::A4Small);
    assert!(a4.is_equivalent_to(&a4_small));

    let custom_mm = PageSize::with_size(Size::new(100.0, 200.0), Unit::Millimeter, SizeMatchPolicy::Fuzzy);
    let custom_pt = PageSize::from_points(IntSize::new(283, 567), SizeMatchPolicy::Fuzzy);
    assert_ne!(custom_mm, custom_pt);
    assert!(custom_mm.is_equivalent_to(&custom_pt));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_standard_page_is_a_key() {
    let json = serde_json::to_string(&PageSize::new(PageSizeId::A4)).unwrap();
    assert_eq!(json, "\"A4\"");

    let page: PageSize = serde_json::from_str("\"Letter\"").unwrap();
    assert_eq!(page, PageSize::new(PageSizeId::Letter));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_custom_page_round_trip() {
    let custom = PageSize::with_size(Size::new(100.0, 200.0), Unit::Millimeter, SizeMatchPolicy::Fuzzy);
    let json = serde_json::to_string(&custom).unwrap();
    assert_eq!(json, r#"{"width":100.0,"height":200.0,"units":"Millimeter"}"#);

    let back: PageSize = serde_json::from_str(&json).unwrap();
    assert_eq!(back, custom);
    assert_eq!(back.key(), "Custom.100x200mm");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_unknown_key_is_rejected() {
    assert!(serde_json::from_str::<PageSize>("\"NotASize\"").is_err());
}
