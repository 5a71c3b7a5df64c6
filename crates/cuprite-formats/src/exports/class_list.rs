//! Class-name list export
//!
//! Flattens the catalog into its deduplicated class index and renders one
//! quoted class name per line, comma-terminated except for the final
//! entry, indented by a configurable tab depth. Meant to be pasted into a
//! surrounding config declaration, so the final entry carries no trailing
//! newline either.

use crate::catalog::Catalog;
use std::io::Write;

/// Default indentation depth in tabs
pub const DEFAULT_TAB_DEPTH: usize = 3;

/// Render the class list for a catalog
///
/// # Examples
///
/// ```
/// use cuprite_formats::catalog::{Catalog, Item};
/// use cuprite_formats::exports::class_list;
///
/// let mut catalog = Catalog::new();
/// catalog.push_item("CUP Optics", Item::new("CUP_optic_Holo", 2, 130));
/// catalog.push_item("CUP SMGs", Item::new("CUP_smg_bizon", 3, 1300));
///
/// let output = class_list::format(&catalog, 1);
/// assert_eq!(output, "\t\"CUP_optic_Holo\",\n\t\"CUP_smg_bizon\"");
/// ```
#[must_use]
pub fn format(catalog: &Catalog, tabs: usize) -> String {
    let index = catalog.class_index();
    let indent = "\t".repeat(tabs);
    let mut output = String::new();

    let last = index.len();
    for (position, entry) in index.entries().iter().enumerate() {
        output.push_str(&indent);
        output.push('"');
        output.push_str(&entry.classname);
        output.push('"');
        // Every entry but the last is comma-terminated
        if position + 1 < last {
            output.push_str(",\n");
        }
    }

    output
}

/// Write the class list to any `Write` sink
pub fn write_to<W: Write>(writer: &mut W, catalog: &Catalog, tabs: usize) -> std::io::Result<()> {
    writer.write_all(format(catalog, tabs).as_bytes())?;
    writer.flush()
}

/// Write the class list to a file
pub fn write_to_file<P: AsRef<std::path::Path>>(
    path: P,
    catalog: &Catalog,
    tabs: usize,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_to(&mut file, catalog, tabs)
}
