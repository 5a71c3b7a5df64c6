//! Output format builders
//!
//! Three independent text artifacts are derived from a parsed
//! [`Catalog`](crate::catalog::Catalog), one module each:
//!
//! - [`class_list`] — deduplicated quoted class names for a config include
//! - [`price_list`] — category-grouped declarations with banner separators
//! - [`loot_groups`] — weighted pick tables, one per category
//!
//! Every module exposes a pure `format*` function producing the artifact as
//! a `String`, plus `write_to` / `write_to_file` helpers for sinks. The
//! exporters never touch each other and never mutate the catalog.

pub mod class_list;
pub mod loot_groups;
pub mod price_list;
