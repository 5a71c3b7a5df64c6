//! Trader catalog parser and export builders for game-content builds
//!
//! This crate turns a flat, semi-structured text catalog of item definitions
//! into the three derived text artifacts a game-content build consumes:
//!
//! - **Class list**: deduplicated, quoted class names for a config include
//! - **Price list**: category-grouped item/price declarations with banners
//! - **Loot groups**: per-category weighted pick tables
//!
//! # Supported Formats
//!
//! - **Catalog**: the line-oriented input format (`[Header]` sections,
//!   `class Name { quality = N; price = N; };` items, comment lines)
//! - **Exports**: the three output formats, one builder module each
//!
//! # Design Principles
//!
//! - **Order Preservation**: categories and items render in file-appearance
//!   order; the class list deduplicates while keeping first-seen positions
//! - **Injectable Randomness**: price markup and loot weights are randomized
//!   by design; every randomized entry point has a `*_with` variant taking a
//!   caller-supplied RNG so tests can seed it
//! - **Fail-Fast Parsing**: a line that is neither header, comment, nor item
//!   aborts the parse with its line number — there is no silent skip
//!
//! # Quick Start
//!
//! ```
//! use cuprite_formats::catalog;
//! use cuprite_formats::exports::{class_list, loot_groups, price_list};
//!
//! let source = "[CUP Optics]\nclass CUP_optic_Holo { quality = 2; price = 100; };\n";
//! let catalog = catalog::parse(source)?;
//!
//! let classes = class_list::format(&catalog, 3);
//! let prices = price_list::format(&catalog, 1);
//! let loot = loot_groups::format(&catalog);
//! assert!(classes.contains("\"CUP_optic_Holo\""));
//! assert!(prices.contains("quality = 2"));
//! assert!(loot.starts_with("\n> CUPOptics"));
//! # Ok::<(), cuprite_formats::catalog::CatalogError>(())
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod exports;
