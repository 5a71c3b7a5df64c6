//! Price list export
//!
//! Renders every category in catalog order: a three-line banner framing
//! the header name, then one declaration line per item with the class name
//! padded to a fixed column so the quality/price blocks line up.

use crate::catalog::Catalog;
use std::fmt::Write as _;
use std::io::Write;

/// Default indentation depth in tabs
pub const DEFAULT_TAB_DEPTH: usize = 1;

/// Column width the class name is left-padded to
const NAME_COLUMN_WIDTH: usize = 45;

/// Width of the banner rule lines in slashes
const BANNER_WIDTH: usize = 79;

/// Render the price list for a catalog
///
/// # Examples
///
/// ```
/// use cuprite_formats::catalog::{Catalog, Item};
/// use cuprite_formats::exports::price_list;
///
/// let mut catalog = Catalog::new();
/// catalog.push_item("CUP Optics", Item::new("CUP_optic_Holo", 2, 130));
///
/// let output = price_list::format(&catalog, 1);
/// assert!(output.contains("\t//CUP Optics\n"));
/// assert!(output.contains("{ quality = 2; price = 130; };"));
/// ```
#[must_use]
pub fn format(catalog: &Catalog, tabs: usize) -> String {
    let indent = "\t".repeat(tabs);
    let rule = "/".repeat(BANNER_WIDTH);
    let mut output = String::new();

    for category in catalog.iter() {
        // Banner framing the category name
        let _ = write!(output, "\n{indent}{rule}\n");
        let _ = write!(output, "{indent}//{}\n", category.header());
        let _ = write!(output, "{indent}{rule}\n\n");

        for item in category.items() {
            let _ = write!(
                output,
                "{indent}class {name:<width$} {{ quality = {}; price = {}; }};\n",
                item.quality,
                item.price,
                name = item.classname,
                width = NAME_COLUMN_WIDTH
            );
        }
    }

    output
}

/// Write the price list to any `Write` sink
pub fn write_to<W: Write>(writer: &mut W, catalog: &Catalog, tabs: usize) -> std::io::Result<()> {
    writer.write_all(format(catalog, tabs).as_bytes())?;
    writer.flush()
}

/// Write the price list to a file
pub fn write_to_file<P: AsRef<std::path::Path>>(
    path: P,
    catalog: &Catalog,
    tabs: usize,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_to(&mut file, catalog, tabs)
}
