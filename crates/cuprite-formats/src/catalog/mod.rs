//! Catalog input format support
//!
//! The catalog is a line-oriented text format describing tradable items,
//! grouped into categories by `[Header]` section lines:
//!
//! ```text
//! [CUP Optics]
//! // sight attachments
//! class CUP_optic_Holo { quality = 2; price = 100; };
//! class CUP_optic_Elcan { quality = 3; price = 250; };
//! ```
//!
//! Parsing classifies every line as a header, an ignorable comment/blank
//! line, or an item declaration; anything else is a fatal
//! [`CatalogError::MalformedLine`]. Item prices are normalized while
//! parsing: a randomized per-category markup is added, the result is
//! rounded to a sale-friendly step, and clamped to a minimum (see
//! [`pricing`]). Re-parsing the same source therefore yields the same
//! structure but different prices unless a seeded RNG is supplied via
//! [`parse_with`] or [`CatalogReader::read_catalog_with`].

mod document;
mod line;
mod reader;
mod types;

pub mod pricing;

pub use document::{Catalog, ClassIndex, DEFAULT_HEADER};
pub use line::Line;
pub use reader::{CatalogReader, parse, parse_with};
pub use types::{CatalogError, Category, Item};
