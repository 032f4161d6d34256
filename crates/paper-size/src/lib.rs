//! Standard page sizes and unit math for document viewers.
//!
//! Implements the page-size set of the Adobe Postscript PPD Standard v4.3:
//! every size in points, millimeters and inches, conversion between the
//! supported measurement units, matching of arbitrary sizes to the nearest
//! standard size, and the [`PageSize`] value object tying it together.
//!
//! For example, A4 is defined by its standard as 210mm x 297mm, which is
//! 8.27in x 11.69in or 595pt x 842pt. Defined point sizes are always
//! integers; all other units can be fractional.
//!
//! Everything here is a pure function over static read-only tables, so the
//! whole crate is safe to use from multiple threads without locking.

pub mod catalog;
mod page_size;
mod types;
mod units;

pub use catalog::{PageSizeId, StandardPageSize};
pub use page_size::PageSize;
pub use types::*;
pub use units::{convert, key_for_custom, points_to_units, to_pixels, to_points};
