//! Loot-group table export
//!
//! The only algorithmic exporter. For every category it computes a loot
//! weight ("chance") per item from the item price, a rarity modifier
//! derived from the class name, and a random multiplier, all normalized by
//! the category's average price so expensive categories are not starved:
//!
//! ```text
//! chance = max(1, round(40 / (price * modifier * random_mult / avg_price)))
//! ```
//!
//! The rarity modifier comes from an ordered rule list evaluated against
//! the lower-cased class name where the **last** matching rule wins; the
//! combined hgun+gold rule must therefore sit after the individual hgun
//! and gold rules, and the explosive rule overrides everything before it.

use crate::catalog::{Catalog, Category};
use rand::RngExt;
use std::fmt::Write as _;
use std::io::Write;

/// Keywords marking a class name as an explosive weapon or charge
const EXPLOSIVE_KEYWORDS: &[&str] = &[
    "g7", "maaws", "rpg18", "strela", "stinger", "bomb", "m136", "at13", "smaw", "javelin", "mine",
    "grenade", "igla", "nlaw", "dragon", "he_gp", "hedp",
];

/// Modifier when no rule matches
const DEFAULT_MODIFIER: u32 = 1;

/// Compute the rarity modifier for a class name
///
/// Rules are evaluated in a fixed order against the lower-cased name and
/// the last matching rule wins. Higher modifiers mean rarer loot.
///
/// # Examples
///
/// ```
/// use cuprite_formats::exports::loot_groups::rarity_modifier;
///
/// assert_eq!(rarity_modifier("CUP_arifle_M16"), 1);
/// assert_eq!(rarity_modifier("CUP_hgun_Glock"), 6);
/// assert_eq!(rarity_modifier("CUP_hgun_Deagle_gold"), 18);
/// // The explosive rule is last, so it overrides the hgun rule
/// assert_eq!(rarity_modifier("CUP_hgun_grenade_launcher"), 5);
/// ```
#[must_use]
pub fn rarity_modifier(classname: &str) -> u32 {
    let lower = classname.to_lowercase();

    // Ordered (condition, modifier) pairs; keep the last true one. The
    // overlap between rules is deliberate, do not normalize this into a
    // first-match table.
    let rules = [
        (lower.contains("hgun"), 6),
        (lower.contains("smg"), 4),
        (lower.contains("gold"), 3),
        (lower.contains("aa12"), 2),
        (lower.contains("hgun") && lower.contains("gold"), 18),
        (is_explosive(&lower), 5),
    ];

    rules
        .iter()
        .rev()
        .find_map(|&(matches, modifier)| matches.then_some(modifier))
        .unwrap_or(DEFAULT_MODIFIER)
}

/// Check whether a lower-cased class name looks like an explosive
fn is_explosive(lower: &str) -> bool {
    EXPLOSIVE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Render the loot-group tables for a catalog using the process RNG
#[must_use]
pub fn format(catalog: &Catalog) -> String {
    format_with(catalog, &mut rand::rng())
}

/// Render the loot-group tables with a caller-supplied RNG
///
/// Each category renders a `> HeaderNoSpaces` marker line followed by one
/// `<chance>, <classname>` line per item in catalog order. A category
/// without items renders nothing at all.
pub fn format_with<G: RngExt>(catalog: &Catalog, rng: &mut G) -> String {
    let mut output = String::new();

    for category in catalog.iter() {
        if category.is_empty() {
            continue;
        }

        let marker = category.header().replace(' ', "");
        let _ = write!(output, "\n> {marker}\n");

        let avg_price = average_price(category);
        for item in category.items() {
            let chance = chance(item.price, rarity_modifier(&item.classname), avg_price, rng);
            let _ = write!(output, "{chance}, {}\n", item.classname);
        }
    }

    output
}

/// Arithmetic mean of the item prices in a category
///
/// Callers must not pass an empty category.
fn average_price(category: &Category) -> f64 {
    let sum: u32 = category.items().iter().map(|item| item.price).sum();
    f64::from(sum) / category.len() as f64
}

/// Compute the loot weight for one item
///
/// Cheap items relative to their category average get high weights,
/// expensive or rare-modified ones get low weights, floored at 1 so every
/// item stays obtainable.
fn chance<G: RngExt>(price: u32, modifier: u32, avg_price: f64, rng: &mut G) -> u32 {
    let random_mult: f64 = rng.random_range(3.0..6.0);
    let score = 40.0 / (f64::from(price) * f64::from(modifier) * random_mult / avg_price);
    (score.round() as u32).max(1)
}

/// Write the loot-group tables to any `Write` sink using the process RNG
pub fn write_to<W: Write>(writer: &mut W, catalog: &Catalog) -> std::io::Result<()> {
    writer.write_all(format(catalog).as_bytes())?;
    writer.flush()
}

/// Write the loot-group tables to a file using the process RNG
pub fn write_to_file<P: AsRef<std::path::Path>>(path: P, catalog: &Catalog) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_to(&mut file, catalog)
}
