use crate::catalog::{self, PageSizeId};
use crate::types::{IntSize, Size, SizeMatchPolicy, Unit};
use crate::units;

/// The size and PPD name of a page.
///
/// A `PageSize` is either bound to one of the standard sizes in the catalog
/// or holds a custom size in whatever unit the caller specified; that unit
/// is preserved and used as the base for all other unit calculations.
/// Instances are immutable once constructed.
#[derive(Debug, Clone)]
pub struct PageSize {
    key: String,
    id: PageSizeId,
    point_size: IntSize,
    windows_id: Option<u16>,
    size: Size,
    units: Unit,
}

impl PageSize {
    /// A page of the given standard size.
    ///
    /// `PageSizeId::Custom` has no inherent size, so the result is not
    /// valid; use [`PageSize::from_points`] or [`PageSize::with_size`]
    /// for custom pages.
    pub fn new(id: PageSizeId) -> Self {
        match catalog::lookup(id) {
            Ok(row) => Self {
                key: row.key.to_string(),
                id,
                point_size: row.point_size(),
                windows_id: row.windows_id,
                size: row.definition_size(),
                units: row.definition_units,
            },
            Err(_) => Self {
                key: String::new(),
                id: PageSizeId::Custom,
                point_size: IntSize::ZERO,
                windows_id: None,
                size: Size::default(),
                units: Unit::Point,
            },
        }
    }

    /// A page from an integer point size, matched against the catalog
    /// under `policy`; an unmatched size becomes a custom page.
    pub fn from_points(size: IntSize, policy: SizeMatchPolicy) -> Self {
        if let Some(id) = catalog::id_for_points(size, policy) {
            return Self::new(id);
        }
        let unit_size = Size::from(size);
        Self {
            key: units::key_for_custom(unit_size, Unit::Point),
            id: PageSizeId::Custom,
            point_size: size,
            windows_id: None,
            size: unit_size,
            units: Unit::Point,
        }
    }

    /// A page from a size in any unit, matched against the catalog under
    /// `policy`; an unmatched size becomes a custom page and keeps the
    /// unit it was specified in.
    pub fn with_size(size: Size, units: Unit, policy: SizeMatchPolicy) -> Self {
        if let Some(id) = catalog::id_for_size(size, units, policy) {
            return Self::new(id);
        }
        Self {
            key: units::key_for_custom(size, units),
            id: PageSizeId::Custom,
            point_size: units::to_points(size, units),
            windows_id: None,
            size,
            units,
        }
    }

    /// A page needs a non-empty key and a positive point size to be usable
    pub fn is_valid(&self) -> bool {
        self.point_size.is_valid() && !self.key.is_empty()
    }

    /// Stable PPD key, e.g. `"A4"`, `"Env10"` or `"Custom.8.5x11in"`
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn id(&self) -> PageSizeId {
        self.id
    }

    /// Legacy Windows DMPAPER code; `None` for custom pages and for
    /// standard sizes that have no code
    pub fn windows_id(&self) -> Option<u16> {
        self.windows_id
    }

    /// The unit this page's size was defined in
    pub fn definition_units(&self) -> Unit {
        self.units
    }

    /// The size in the requested unit
    pub fn size(&self, units: Unit) -> Size {
        // The stored unit and points need no conversion
        if units == self.units {
            return self.size;
        }
        if units == Unit::Point {
            return Size::from(self.point_size);
        }
        if self.id == PageSizeId::Custom {
            return units::convert(self.size, self.units, units);
        }
        catalog::size_in_units(self.id, units).unwrap_or_default()
    }

    /// The size in integer points
    pub fn size_points(&self) -> IntSize {
        self.point_size
    }

    /// The size in device pixels at `resolution` dpi
    pub fn size_pixels(&self, resolution: i32) -> IntSize {
        units::to_pixels(self.point_size, resolution)
    }

    /// True when both pages resolve to the same rounded point size, even
    /// if their keys or units differ
    pub fn is_equivalent_to(&self, other: &PageSize) -> bool {
        self.point_size == other.point_size
    }
}

impl PartialEq for PageSize {
    /// Exact equality: stored size, unit and key all match. Use
    /// [`PageSize::is_equivalent_to`] to compare by page dimensions only.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.units == other.units && self.key == other.key
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::de::{self, IgnoredAny, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // A standard page serializes as its key string, a custom page as its
    // size and unit.
    impl Serialize for PageSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if self.id == PageSizeId::Custom {
                let mut s = serializer.serialize_struct("Custom", 3)?;
                s.serialize_field("width", &self.size.width)?;
                s.serialize_field("height", &self.size.height)?;
                s.serialize_field("units", &self.units)?;
                s.end()
            } else {
                serializer.serialize_str(&self.key)
            }
        }
    }

    impl<'de> Deserialize<'de> for PageSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct PageSizeVisitor;

            impl<'de> Visitor<'de> for PageSizeVisitor {
                type Value = PageSize;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a standard page-size key or a custom size")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PageSize, E>
                where
                    E: de::Error,
                {
                    catalog::entries()
                        .iter()
                        .find(|row| row.key == value)
                        .map(|row| PageSize::new(row.id))
                        .ok_or_else(|| de::Error::custom(format!("unknown page size key: {value}")))
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<PageSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width = None;
                    let mut height = None;
                    let mut units = None;

                    while let Some(field) = map.next_key::<String>()? {
                        match field.as_str() {
                            "width" => width = Some(map.next_value()?),
                            "height" => height = Some(map.next_value()?),
                            "units" => units = Some(map.next_value()?),
                            _ => {
                                let _: IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width, height) {
                        // Exact matching keeps a serialized custom page
                        // custom on the way back in
                        (Some(w), Some(h)) => Ok(PageSize::with_size(
                            Size::new(w, h),
                            units.unwrap_or(Unit::Point),
                            SizeMatchPolicy::Exact,
                        )),
                        _ => Err(de::Error::missing_field("width or height")),
                    }
                }
            }

            deserializer.deserialize_any(PageSizeVisitor)
        }
    }
}
