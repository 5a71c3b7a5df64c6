//! Command-line front end for the cuprite trader catalog pipeline
//!
//! Reads one catalog source file, parses it to completion, then writes the
//! three derived artifacts. Parsing happens before any output file is
//! created, so a parse failure never leaves a truncated artifact behind.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use cuprite_formats::catalog::CatalogReader;
use cuprite_formats::exports::{class_list, loot_groups, price_list};

#[derive(Parser)]
#[command(
    name = "cuprite",
    about = "Generate trader config artifacts from an item catalog",
    version,
    long_about = "Parses a flat text catalog of item definitions and emits the three \
                  artifacts a game-content build consumes: a deduplicated class-name \
                  list, a formatted price list, and weighted loot-group tables. \
                  Prices and loot weights are randomized on every run by design."
)]
struct Cli {
    /// Catalog source file
    #[arg(short, long, default_value = "source.txt")]
    input: PathBuf,

    /// Output path for the class-name list
    #[arg(long, default_value = "configcpp.txt")]
    class_list: PathBuf,

    /// Output path for the price list
    #[arg(long, default_value = "cupprices.txt")]
    price_list: PathBuf,

    /// Output path for the loot-group tables
    #[arg(long, default_value = "lootgroups.h.txt")]
    loot_groups: PathBuf,

    /// Tab depth for class-list indentation
    #[arg(long, default_value_t = class_list::DEFAULT_TAB_DEPTH)]
    class_tabs: usize,

    /// Tab depth for price-list indentation
    #[arg(long, default_value_t = price_list::DEFAULT_TAB_DEPTH)]
    price_tabs: usize,

    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    let mut reader = CatalogReader::from_path(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let catalog = reader
        .read_catalog()
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    tracing::info!(
        categories = catalog.category_count(),
        items = catalog.item_count(),
        "parsed {}",
        cli.input.display()
    );

    class_list::write_to_file(&cli.class_list, &catalog, cli.class_tabs)
        .with_context(|| format!("failed to write {}", cli.class_list.display()))?;
    tracing::info!("wrote {}", cli.class_list.display());

    price_list::write_to_file(&cli.price_list, &catalog, cli.price_tabs)
        .with_context(|| format!("failed to write {}", cli.price_list.display()))?;
    tracing::info!("wrote {}", cli.price_list.display());

    loot_groups::write_to_file(&cli.loot_groups, &catalog)
        .with_context(|| format!("failed to write {}", cli.loot_groups.display()))?;
    tracing::info!("wrote {}", cli.loot_groups.display());

    Ok(())
}
