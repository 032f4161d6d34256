use thiserror::Error;

use crate::catalog::PageSizeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, PartialEq)]
pub enum PaperSizeError {
    #[error("{0:?} does not name a defined standard size")]
    OutOfRange(PageSizeId),
    #[error("degenerate size {width}x{height}")]
    Degenerate { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, PaperSizeError>;

/// Measurement units for page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Millimeters (ISO sizes are defined in these)
    Millimeter,
    /// 1/72th of an inch, the base unit all conversions route through
    Point,
    /// Inches (ANSI/US sizes are defined in these)
    Inch,
    /// 1/6th of an inch, 12 points
    Pica,
    /// 1/72th of a French inch
    Didot,
    /// 12 didot
    Cicero,
}

impl Unit {
    /// Points per one of this unit
    pub const fn points_per_unit(self) -> f64 {
        match self {
            Unit::Millimeter => 2.83464566929,
            Unit::Point => 1.0,
            Unit::Inch => 72.0,
            Unit::Pica => 12.0,
            Unit::Didot => 1.065826771,
            Unit::Cicero => 12.789921252,
        }
    }

    /// Suffix used in PPD custom-size keys; points carry no suffix
    pub const fn key_abbreviation(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Point => "",
            Unit::Inch => "in",
            Unit::Pica => "pc",
            Unit::Didot => "DD",
            Unit::Cicero => "CC",
        }
    }
}

/// How strictly an arbitrary size is matched against the standard table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMatchPolicy {
    /// Accept a standard size within the tolerance margin. Conversions
    /// between units easily lose a couple of points, so this is the
    /// default.
    #[default]
    Fuzzy,
    /// As `Fuzzy`, but also accept the size with width and height swapped
    FuzzyOrientation,
    /// Only accept exact point-size matches
    Exact,
}

/// Fractional width/height pair; the unit comes from context
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions positive and finite
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width and height swapped
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// The size unchanged, or `Degenerate` if it is unusable
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(PaperSizeError::Degenerate {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Integer width/height pair, used for point and pixel sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    /// The degenerate size returned where a result would be meaningless
    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both dimensions positive
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width and height swapped
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl From<IntSize> for Size {
    fn from(size: IntSize) -> Self {
        Size::new(size.width as f64, size.height as f64)
    }
}
