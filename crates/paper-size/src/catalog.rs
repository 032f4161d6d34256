//! The standard page-size table and lookups over it.
//!
//! The data is the page-size set of the Adobe Postscript PPD Standard v4.3
//! (transverse and rotated variants excluded), with each size carried in
//! points, millimeters and inches plus its PPD `mediaOption` key and, where
//! one exists, its legacy Windows `DMPAPER` driver code. The defined size is
//! width x height with no implied orientation; Ledger, for example, is wider
//! than tall.

use tracing::{debug, trace};

use crate::types::{IntSize, PaperSizeError, Result, Size, SizeMatchPolicy, Unit};
use crate::units;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The available page sizes.
///
/// `Custom` stands for any size not in the standard set; it has no table
/// row and no inherent dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageSizeId {
    A4,
    B5,
    Letter,
    Legal,
    Executive,
    A0,
    A1,
    A2,
    A3,
    A5,
    A6,
    A7,
    A8,
    A9,
    B0,
    B1,
    B10,
    B2,
    B3,
    B4,
    B6,
    B7,
    B8,
    B9,
    C5E,
    Comm10E,
    DLE,
    Folio,
    Ledger,
    Tabloid,
    Custom,

    // Further ISO sizes
    A10,
    A3Extra,
    A4Extra,
    A4Plus,
    A4Small,
    A5Extra,
    B5Extra,

    // JIS sizes
    JisB0,
    JisB1,
    JisB2,
    JisB3,
    JisB4,
    JisB5,
    JisB6,
    JisB7,
    JisB8,
    JisB9,
    JisB10,

    // ANSI / US sizes
    AnsiC,
    AnsiD,
    AnsiE,
    LegalExtra,
    LetterExtra,
    LetterPlus,
    LetterSmall,
    TabloidExtra,

    // Architectural sizes
    ArchA,
    ArchB,
    ArchC,
    ArchD,
    ArchE,

    // Inch-based sizes
    Imperial7x9,
    Imperial8x10,
    Imperial9x11,
    Imperial9x12,
    Imperial10x11,
    Imperial10x13,
    Imperial10x14,
    Imperial12x11,
    Imperial15x11,

    // Other sizes
    ExecutiveStandard,
    Note,
    Quarto,
    Statement,
    SuperA,
    SuperB,
    Postcard,
    DoublePostcard,
    Prc16K,
    Prc32K,
    Prc32KBig,

    // Fan fold sizes
    FanFoldUS,
    FanFoldGerman,
    FanFoldGermanLegal,

    // ISO envelopes
    EnvelopeB4,
    EnvelopeB5,
    EnvelopeB6,
    EnvelopeC0,
    EnvelopeC1,
    EnvelopeC2,
    EnvelopeC3,
    EnvelopeC4,
    EnvelopeC6,
    EnvelopeC65,
    EnvelopeC7,

    // US envelopes
    Envelope9,
    Envelope11,
    Envelope12,
    Envelope14,
    EnvelopeMonarch,
    EnvelopePersonal,

    // Other envelopes
    EnvelopeChou3,
    EnvelopeChou4,
    EnvelopeInvite,
    EnvelopeItalian,
    EnvelopeKaku2,
    EnvelopeKaku3,
    EnvelopePrc1,
    EnvelopePrc2,
    EnvelopePrc3,
    EnvelopePrc4,
    EnvelopePrc5,
    EnvelopePrc6,
    EnvelopePrc7,
    EnvelopePrc8,
    EnvelopePrc9,
    EnvelopePrc10,
    EnvelopeYou4,
}

impl PageSizeId {
    /// Highest defined id
    pub const LAST: PageSizeId = PageSizeId::EnvelopeYou4;

    // Historic synonyms kept by the PPD standard
    pub const ANSI_A: PageSizeId = PageSizeId::Letter;
    pub const ANSI_B: PageSizeId = PageSizeId::Ledger;
    pub const ENVELOPE_C5: PageSizeId = PageSizeId::C5E;
    pub const ENVELOPE_DL: PageSizeId = PageSizeId::DLE;
    pub const ENVELOPE_10: PageSizeId = PageSizeId::Comm10E;

    /// Index of this id in the standard-size table. `Custom` has no row,
    /// and ids past it shift down by one.
    fn table_index(self) -> Option<usize> {
        const CUSTOM: usize = PageSizeId::Custom as usize;
        match self as usize {
            CUSTOM => None,
            i if i < CUSTOM => Some(i),
            i => Some(i - 1),
        }
    }
}

/// One row of the standard-size table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardPageSize {
    pub id: PageSizeId,
    /// Legacy Windows DMPAPER driver code, where the size has one
    pub windows_id: Option<u16>,
    /// The unit the governing standard defines the size in; ISO sizes use
    /// millimeters, ANSI/US sizes inches
    pub definition_units: Unit,
    pub width_points: i32,
    pub height_points: i32,
    pub width_mm: f64,
    pub height_mm: f64,
    pub width_inches: f64,
    pub height_inches: f64,
    /// Stable PPD `mediaOption` key
    pub key: &'static str,
}

impl StandardPageSize {
    /// Integer point size, the canonical form for comparisons
    pub const fn point_size(&self) -> IntSize {
        IntSize::new(self.width_points, self.height_points)
    }

    /// The size in the unit the governing standard uses
    pub fn definition_size(&self) -> Size {
        match self.definition_units {
            Unit::Millimeter => Size::new(self.width_mm, self.height_mm),
            _ => Size::new(self.width_inches, self.height_inches),
        }
    }

    /// The size in the requested unit. Millimeters, points and inches are
    /// stored; pica, didot and cicero are always derived from the point
    /// size, never stored.
    pub fn size_in(&self, units: Unit) -> Size {
        match units {
            Unit::Millimeter => Size::new(self.width_mm, self.height_mm),
            Unit::Point => Size::new(self.width_points as f64, self.height_points as f64),
            Unit::Inch => Size::new(self.width_inches, self.height_inches),
            Unit::Pica | Unit::Didot | Unit::Cicero => {
                units::points_to_units(self.point_size(), units)
            }
        }
    }
}

const fn entry(
    id: PageSizeId,
    windows_id: u16,
    definition_units: Unit,
    width_points: i32,
    height_points: i32,
    width_mm: f64,
    height_mm: f64,
    width_inches: f64,
    height_inches: f64,
    key: &'static str,
) -> StandardPageSize {
    StandardPageSize {
        id,
        windows_id: if windows_id == 0 { None } else { Some(windows_id) },
        definition_units,
        width_points,
        height_points,
        width_mm,
        height_mm,
        width_inches,
        height_inches,
        key,
    }
}

use self::PageSizeId as Id;
use crate::types::Unit::Inch as In;
use crate::types::Unit::Millimeter as Mm;

/// One row per standard id, in id order; `Custom` deliberately has no row
static STANDARD_SIZES: [StandardPageSize; 118] = [
    entry(Id::A4, 9, Mm, 595, 842, 210.0, 297.0, 8.27, 11.69, "A4"),
    entry(Id::B5, 0, Mm, 499, 709, 176.0, 250.0, 6.9, 9.8, "ISOB5"),
    entry(Id::Letter, 1, In, 612, 792, 215.9, 279.4, 8.5, 11.0, "Letter"),
    entry(Id::Legal, 5, In, 612, 1008, 215.9, 355.6, 8.5, 14.0, "Legal"),
    // Differs from the Postscript / Windows Executive size; see ExecutiveStandard
    entry(Id::Executive, 0, In, 540, 720, 190.5, 254.0, 7.5, 10.0, "Executive.7.5x10in"),
    entry(Id::A0, 0, Mm, 2384, 3370, 841.0, 1189.0, 33.11, 46.81, "A0"),
    entry(Id::A1, 0, Mm, 1684, 2384, 594.0, 841.0, 23.39, 33.11, "A1"),
    entry(Id::A2, 66, Mm, 1191, 1684, 420.0, 594.0, 16.54, 23.39, "A2"),
    entry(Id::A3, 8, Mm, 842, 1191, 297.0, 420.0, 11.69, 16.54, "A3"),
    entry(Id::A5, 11, Mm, 420, 595, 148.0, 210.0, 5.83, 8.27, "A5"),
    entry(Id::A6, 70, Mm, 297, 420, 105.0, 148.0, 4.13, 5.83, "A6"),
    entry(Id::A7, 0, Mm, 210, 297, 74.0, 105.0, 2.91, 4.13, "A7"),
    entry(Id::A8, 0, Mm, 148, 210, 52.0, 74.0, 2.05, 2.91, "A8"),
    entry(Id::A9, 0, Mm, 105, 148, 37.0, 52.0, 1.46, 2.05, "A9"),
    entry(Id::B0, 0, Mm, 2835, 4008, 1000.0, 1414.0, 39.37, 55.67, "ISOB0"),
    entry(Id::B1, 0, Mm, 2004, 2835, 707.0, 1000.0, 27.83, 39.37, "ISOB1"),
    entry(Id::B10, 0, Mm, 88, 125, 31.0, 44.0, 1.22, 1.73, "ISOB10"),
    entry(Id::B2, 0, Mm, 1417, 2004, 500.0, 707.0, 19.68, 27.83, "ISOB2"),
    entry(Id::B3, 0, Mm, 1001, 1417, 353.0, 500.0, 13.9, 19.68, "ISOB3"),
    entry(Id::B4, 42, Mm, 709, 1001, 250.0, 353.0, 9.84, 13.9, "ISOB4"),
    entry(Id::B6, 0, Mm, 354, 499, 125.0, 176.0, 4.92, 6.93, "ISOB6"),
    entry(Id::B7, 0, Mm, 249, 354, 88.0, 125.0, 3.46, 4.92, "ISOB7"),
    entry(Id::B8, 0, Mm, 176, 249, 62.0, 88.0, 2.44, 3.46, "ISOB8"),
    entry(Id::B9, 0, Mm, 125, 176, 44.0, 62.0, 1.73, 2.44, "ISOB9"),
    entry(Id::C5E, 28, Mm, 459, 649, 162.0, 229.0, 6.38, 9.02, "EnvC5"),
    entry(Id::Comm10E, 20, In, 297, 684, 104.8, 241.3, 4.12, 9.5, "Env10"),
    entry(Id::DLE, 27, Mm, 312, 624, 110.0, 220.0, 4.33, 8.66, "EnvDL"),
    entry(Id::Folio, 0, Mm, 595, 935, 210.0, 330.0, 8.27, 13.0, "Folio"),
    entry(Id::Ledger, 4, In, 1224, 792, 431.8, 279.4, 17.0, 11.0, "Ledger"),
    entry(Id::Tabloid, 3, In, 792, 1224, 279.4, 431.8, 11.0, 17.0, "Tabloid"),

    // Further ISO sizes
    entry(Id::A10, 0, Mm, 73, 105, 26.0, 37.0, 1.02, 1.46, "A10"),
    entry(Id::A3Extra, 63, Mm, 913, 1262, 322.0, 445.0, 12.67, 17.52, "A3Extra"),
    entry(Id::A4Extra, 53, Mm, 667, 914, 235.5, 322.3, 9.27, 12.69, "A4Extra"),
    entry(Id::A4Plus, 60, Mm, 595, 936, 210.0, 330.0, 8.27, 13.0, "A4Plus"),
    entry(Id::A4Small, 10, Mm, 595, 842, 210.0, 297.0, 8.27, 11.69, "A4Small"),
    entry(Id::A5Extra, 64, Mm, 492, 668, 174.0, 235.0, 6.85, 9.25, "A5Extra"),
    entry(Id::B5Extra, 65, Mm, 570, 782, 201.0, 276.0, 7.9, 10.8, "ISOB5Extra"),

    // JIS sizes
    entry(Id::JisB0, 0, Mm, 2920, 4127, 1030.0, 1456.0, 40.55, 57.32, "B0"),
    entry(Id::JisB1, 0, Mm, 2064, 2920, 728.0, 1030.0, 28.66, 40.55, "B1"),
    entry(Id::JisB2, 0, Mm, 1460, 2064, 515.0, 728.0, 20.28, 28.66, "B2"),
    entry(Id::JisB3, 0, Mm, 1032, 1460, 364.0, 515.0, 14.33, 20.28, "B3"),
    entry(Id::JisB4, 12, Mm, 729, 1032, 257.0, 364.0, 10.12, 14.33, "B4"),
    entry(Id::JisB5, 13, Mm, 516, 729, 182.0, 257.0, 7.17, 10.12, "B5"),
    entry(Id::JisB6, 88, Mm, 363, 516, 128.0, 182.0, 5.04, 7.17, "B6"),
    entry(Id::JisB7, 0, Mm, 258, 363, 91.0, 128.0, 3.58, 5.04, "B7"),
    entry(Id::JisB8, 0, Mm, 181, 258, 64.0, 91.0, 2.52, 3.58, "B8"),
    entry(Id::JisB9, 0, Mm, 127, 181, 45.0, 64.0, 1.77, 2.52, "B9"),
    entry(Id::JisB10, 0, Mm, 91, 127, 32.0, 45.0, 1.26, 1.77, "B10"),

    // ANSI / US sizes
    entry(Id::AnsiC, 0, In, 1224, 1584, 431.8, 558.8, 17.0, 22.0, "AnsiC"),
    entry(Id::AnsiD, 0, In, 1584, 2448, 558.8, 863.6, 22.0, 34.0, "AnsiD"),
    entry(Id::AnsiE, 0, In, 2448, 3168, 863.6, 1118.0, 34.0, 44.0, "AnsiE"),
    entry(Id::LegalExtra, 51, In, 684, 1080, 241.3, 381.0, 9.5, 15.0, "LegalExtra"),
    entry(Id::LetterExtra, 50, In, 684, 864, 241.3, 304.8, 9.5, 12.0, "LetterExtra"),
    entry(Id::LetterPlus, 59, In, 612, 914, 215.9, 322.3, 8.5, 12.69, "LetterPlus"),
    entry(Id::LetterSmall, 2, In, 612, 792, 215.9, 279.4, 8.5, 11.0, "LetterSmall"),
    entry(Id::TabloidExtra, 52, In, 864, 1296, 304.8, 457.2, 12.0, 18.0, "TabloidExtra"),

    // Architectural sizes
    entry(Id::ArchA, 0, In, 648, 864, 228.6, 304.8, 9.0, 12.0, "ARCHA"),
    entry(Id::ArchB, 0, In, 864, 1296, 304.8, 457.2, 12.0, 18.0, "ARCHB"),
    entry(Id::ArchC, 24, In, 1296, 1728, 457.2, 609.6, 18.0, 24.0, "ARCHC"),
    entry(Id::ArchD, 25, In, 1728, 2592, 609.6, 914.4, 24.0, 36.0, "ARCHD"),
    entry(Id::ArchE, 26, In, 2592, 3456, 914.4, 1219.0, 36.0, 48.0, "ARCHE"),

    // Inch-based sizes
    entry(Id::Imperial7x9, 0, In, 504, 648, 177.8, 228.6, 7.0, 9.0, "7x9"),
    entry(Id::Imperial8x10, 0, In, 576, 720, 203.2, 254.0, 8.0, 10.0, "8x10"),
    entry(Id::Imperial9x11, 44, In, 648, 792, 228.6, 279.4, 9.0, 11.0, "9x11"),
    entry(Id::Imperial9x12, 0, In, 648, 864, 228.6, 304.8, 9.0, 12.0, "9x12"),
    entry(Id::Imperial10x11, 45, In, 720, 792, 254.0, 279.4, 10.0, 11.0, "10x11"),
    entry(Id::Imperial10x13, 0, In, 720, 936, 254.0, 330.2, 10.0, 13.0, "10x13"),
    entry(Id::Imperial10x14, 16, In, 720, 1008, 254.0, 355.6, 10.0, 14.0, "10x14"),
    entry(Id::Imperial12x11, 90, In, 864, 792, 304.8, 279.4, 12.0, 11.0, "12x11"),
    entry(Id::Imperial15x11, 46, In, 1080, 792, 381.0, 279.4, 15.0, 11.0, "15x11"),

    // Other sizes
    entry(Id::ExecutiveStandard, 7, In, 522, 756, 184.2, 266.7, 7.25, 10.5, "Executive"),
    entry(Id::Note, 18, In, 612, 792, 215.9, 279.4, 8.5, 11.0, "Note"),
    entry(Id::Quarto, 15, In, 610, 780, 215.9, 275.1, 8.5, 10.83, "Quarto"),
    entry(Id::Statement, 6, In, 396, 612, 139.7, 215.9, 5.5, 8.5, "Statement"),
    entry(Id::SuperA, 57, Mm, 643, 1009, 227.0, 356.0, 8.94, 14.0, "SuperA"),
    entry(Id::SuperB, 58, Mm, 864, 1380, 305.0, 487.0, 12.0, 19.17, "SuperB"),
    entry(Id::Postcard, 43, Mm, 284, 419, 100.0, 148.0, 3.94, 5.83, "Postcard"),
    entry(Id::DoublePostcard, 69, Mm, 567, 419, 200.0, 148.0, 7.87, 5.83, "DoublePostcard"),
    entry(Id::Prc16K, 93, Mm, 414, 610, 146.0, 215.0, 5.75, 8.5, "PRC16K"),
    entry(Id::Prc32K, 94, Mm, 275, 428, 97.0, 151.0, 3.82, 5.95, "PRC32K"),
    entry(Id::Prc32KBig, 95, Mm, 275, 428, 97.0, 151.0, 3.82, 5.95, "PRC32KBig"),

    // Fan fold sizes
    entry(Id::FanFoldUS, 39, In, 1071, 792, 377.8, 279.4, 14.875, 11.0, "FanFoldUS"),
    entry(Id::FanFoldGerman, 40, In, 612, 864, 215.9, 304.8, 8.5, 12.0, "FanFoldGerman"),
    entry(Id::FanFoldGermanLegal, 41, In, 612, 936, 215.9, 330.0, 8.5, 13.0, "FanFoldGermanLegal"),

    // ISO envelopes
    entry(Id::EnvelopeB4, 33, Mm, 708, 1001, 250.0, 353.0, 9.84, 13.9, "EnvISOB4"),
    entry(Id::EnvelopeB5, 34, Mm, 499, 709, 176.0, 250.0, 6.9, 9.8, "EnvISOB5"),
    entry(Id::EnvelopeB6, 35, Mm, 499, 354, 176.0, 125.0, 6.9, 4.9, "EnvISOB6"),
    entry(Id::EnvelopeC0, 0, Mm, 2599, 3676, 917.0, 1297.0, 36.1, 51.06, "EnvC0"),
    entry(Id::EnvelopeC1, 0, Mm, 1837, 2599, 648.0, 917.0, 25.51, 36.1, "EnvC1"),
    entry(Id::EnvelopeC2, 0, Mm, 1298, 1837, 458.0, 648.0, 18.03, 25.51, "EnvC2"),
    entry(Id::EnvelopeC3, 29, Mm, 918, 1296, 324.0, 458.0, 12.75, 18.03, "EnvC3"),
    entry(Id::EnvelopeC4, 30, Mm, 649, 918, 229.0, 324.0, 9.02, 12.75, "EnvC4"),
    entry(Id::EnvelopeC6, 31, Mm, 323, 459, 114.0, 162.0, 4.49, 6.38, "EnvC6"),
    entry(Id::EnvelopeC65, 32, Mm, 324, 648, 114.0, 229.0, 4.5, 9.0, "EnvC65"),
    entry(Id::EnvelopeC7, 0, Mm, 230, 323, 81.0, 114.0, 3.19, 4.49, "EnvC7"),

    // US envelopes
    entry(Id::Envelope9, 19, In, 279, 639, 98.4, 225.4, 3.875, 8.875, "Env9"),
    entry(Id::Envelope11, 21, In, 324, 747, 114.3, 263.5, 4.5, 10.375, "Env11"),
    entry(Id::Envelope12, 22, In, 342, 792, 120.7, 279.4, 4.75, 11.0, "Env12"),
    entry(Id::Envelope14, 23, In, 360, 828, 127.0, 292.1, 5.0, 11.5, "Env14"),
    entry(Id::EnvelopeMonarch, 37, In, 279, 540, 98.43, 190.5, 3.875, 7.5, "EnvMonarch"),
    entry(Id::EnvelopePersonal, 38, In, 261, 468, 92.08, 165.1, 3.625, 6.5, "EnvPersonal"),

    // Other envelopes
    entry(Id::EnvelopeChou3, 73, Mm, 340, 666, 120.0, 235.0, 4.72, 9.25, "EnvChou3"),
    entry(Id::EnvelopeChou4, 74, Mm, 255, 581, 90.0, 205.0, 3.54, 8.0, "EnvChou4"),
    entry(Id::EnvelopeInvite, 47, Mm, 624, 624, 220.0, 220.0, 8.66, 8.66, "EnvInvite"),
    entry(Id::EnvelopeItalian, 36, Mm, 312, 652, 110.0, 230.0, 4.33, 9.0, "EnvItalian"),
    entry(Id::EnvelopeKaku2, 71, Mm, 680, 941, 240.0, 332.0, 9.45, 13.0, "EnvKaku2"),
    entry(Id::EnvelopeKaku3, 72, Mm, 612, 785, 216.0, 277.0, 8.5, 10.9, "EnvKaku3"),
    entry(Id::EnvelopePrc1, 96, Mm, 289, 468, 102.0, 165.0, 4.0, 6.5, "EnvPRC1"),
    entry(Id::EnvelopePrc2, 97, Mm, 289, 499, 102.0, 176.0, 4.0, 6.9, "EnvPRC2"),
    entry(Id::EnvelopePrc3, 98, Mm, 354, 499, 125.0, 176.0, 4.9, 6.9, "EnvPRC3"),
    entry(Id::EnvelopePrc4, 99, Mm, 312, 590, 110.0, 208.0, 4.33, 8.2, "EnvPRC4"),
    entry(Id::EnvelopePrc5, 100, Mm, 312, 624, 110.0, 220.0, 4.33, 8.66, "EnvPRC5"),
    entry(Id::EnvelopePrc6, 101, Mm, 340, 652, 120.0, 230.0, 4.7, 9.0, "EnvPRC6"),
    entry(Id::EnvelopePrc7, 102, Mm, 454, 652, 160.0, 230.0, 6.3, 9.0, "EnvPRC7"),
    entry(Id::EnvelopePrc8, 103, Mm, 340, 876, 120.0, 309.0, 4.7, 12.2, "EnvPRC8"),
    entry(Id::EnvelopePrc9, 104, Mm, 649, 918, 229.0, 324.0, 9.0, 12.75, "EnvPRC9"),
    entry(Id::EnvelopePrc10, 105, Mm, 918, 1298, 324.0, 458.0, 12.75, 18.0, "EnvPRC10"),
    entry(Id::EnvelopeYou4, 91, Mm, 298, 666, 105.0, 235.0, 4.13, 9.25, "EnvYou4"),
];

/// Deprecated DMPAPER codes funneled to the standard size they are a
/// rotated or transverse variant of. Old print devices still report them.
static WINDOWS_CONVERSION: [(u16, u16); 36] = [
    (17, 3),    // 11x17 -> Tabloid
    (68, 63),   // A3 extra transverse -> A3 extra
    (76, 8),    // A3 rotated -> A3
    (67, 8),    // A3 transverse -> A3
    (77, 9),    // A4 rotated -> A4
    (55, 9),    // A4 transverse -> A4
    (78, 11),   // A5 rotated -> A5
    (61, 11),   // A5 transverse -> A5
    (83, 70),   // A6 rotated -> A6
    (79, 12),   // JIS B4 rotated -> JIS B4
    (80, 13),   // JIS B5 rotated -> JIS B5
    (62, 13),   // JIS B5 transverse -> JIS B5
    (89, 88),   // JIS B6 rotated -> JIS B6
    (82, 69),   // double postcard rotated -> double postcard
    (81, 43),   // postcard rotated -> postcard
    (86, 73),   // envelope chou 3 rotated -> chou 3
    (87, 74),   // envelope chou 4 rotated -> chou 4
    (84, 71),   // envelope kaku 2 rotated -> kaku 2
    (85, 72),   // envelope kaku 3 rotated -> kaku 3
    (92, 91),   // envelope you 4 rotated -> you 4
    (56, 50),   // letter extra transverse -> letter extra
    (75, 1),    // letter rotated -> letter
    (54, 1),    // letter transverse -> letter
    (106, 93),  // PRC 16K rotated -> PRC 16K
    (107, 94),  // PRC 32K rotated -> PRC 32K
    (108, 95),  // PRC 32K big rotated -> PRC 32K big
    (109, 96),  // PRC envelope 1 rotated -> PRC envelope 1
    (110, 97),  // PRC envelope 2 rotated -> PRC envelope 2
    (111, 98),  // PRC envelope 3 rotated -> PRC envelope 3
    (112, 99),  // PRC envelope 4 rotated -> PRC envelope 4
    (113, 100), // PRC envelope 5 rotated -> PRC envelope 5
    (114, 101), // PRC envelope 6 rotated -> PRC envelope 6
    (115, 102), // PRC envelope 7 rotated -> PRC envelope 7
    (116, 103), // PRC envelope 8 rotated -> PRC envelope 8
    (117, 104), // PRC envelope 9 rotated -> PRC envelope 9
    (118, 105), // PRC envelope 10 rotated -> PRC envelope 10
];

/// Tolerance for fuzzy size matching, in points (about 1 mm)
const MATCH_TOLERANCE_POINTS: i32 = 3;

/// Fetch the table row for a standard id; `Custom` has none
pub fn lookup(id: PageSizeId) -> Result<&'static StandardPageSize> {
    match id.table_index() {
        Some(index) => Ok(&STANDARD_SIZES[index]),
        None => Err(PaperSizeError::OutOfRange(id)),
    }
}

/// Size of a standard page in the requested unit
pub fn size_in_units(id: PageSizeId, units: Unit) -> Result<Size> {
    Ok(lookup(id)?.size_in(units))
}

/// Stable PPD key for an id
pub fn key_for(id: PageSizeId) -> &'static str {
    match lookup(id) {
        Ok(row) => row.key,
        Err(_) => "Custom",
    }
}

/// Every standard row, in id order. Useful for enumerating the supported
/// sizes, e.g. in a print dialog.
pub fn entries() -> &'static [StandardPageSize] {
    &STANDARD_SIZES
}

/// Legacy Windows DMPAPER code for a standard id
pub fn windows_id(id: PageSizeId) -> Option<u16> {
    lookup(id).ok().and_then(|row| row.windows_id)
}

/// Standard id carrying the given DMPAPER code.
///
/// Deprecated rotated and transverse codes resolve to the standard size
/// they are a variant of; unknown codes give `None`.
pub fn id_for_windows_id(code: u16) -> Option<PageSizeId> {
    if code == 0 {
        return None;
    }
    let code = WINDOWS_CONVERSION
        .iter()
        .find(|(from, _)| *from == code)
        .map_or(code, |(_, to)| *to);
    STANDARD_SIZES
        .iter()
        .find(|row| row.windows_id == Some(code))
        .map(|row| row.id)
}

/// Match an arbitrary point size to a standard size.
///
/// An exact pass over the table runs first; several rows share a point
/// size (Letter, LetterSmall and Note do), and the lowest id wins. The
/// fuzzy policies then accept the nearest row within the tolerance per
/// dimension, and `FuzzyOrientation` also tries the transposed size.
/// `None` means the size is not (close to) any standard size.
pub fn id_for_points(size: IntSize, policy: SizeMatchPolicy) -> Option<PageSizeId> {
    if let Some(id) = match_points(size, policy) {
        return Some(id);
    }
    if policy == SizeMatchPolicy::FuzzyOrientation {
        if let Some(id) = match_points(size.transposed(), policy) {
            debug!(?id, width = size.width, height = size.height, "matched transposed size");
            return Some(id);
        }
    }
    None
}

/// Match a size in any unit by converting it to points first
pub fn id_for_size(size: Size, units: Unit, policy: SizeMatchPolicy) -> Option<PageSizeId> {
    let points = units::to_points(size, units);
    if !points.is_valid() {
        return None;
    }
    id_for_points(points, policy)
}

fn match_points(size: IntSize, policy: SizeMatchPolicy) -> Option<PageSizeId> {
    for row in &STANDARD_SIZES {
        if row.width_points == size.width && row.height_points == size.height {
            trace!(key = row.key, "exact point-size match");
            return Some(row.id);
        }
    }
    if policy == SizeMatchPolicy::Exact {
        return None;
    }

    let mut best: Option<(i32, PageSizeId)> = None;
    for row in &STANDARD_SIZES {
        let dw = (row.width_points - size.width).abs();
        let dh = (row.height_points - size.height).abs();
        if dw <= MATCH_TOLERANCE_POINTS && dh <= MATCH_TOLERANCE_POINTS {
            let delta = dw + dh;
            if best.is_none_or(|(best_delta, _)| delta < best_delta) {
                best = Some((delta, row.id));
            }
        }
    }
    if let Some((delta, id)) = best {
        trace!(?id, delta, "fuzzy point-size match");
        return Some(id);
    }
    None
}
