//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::state::ProductField;
use crate::store::Latency;

/// Stockroom - a small terminal product catalog manager
#[derive(Parser, Debug, Default)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "A small terminal product catalog manager", long_about = None)]
pub struct Args {
    /// Load products from this JSON file instead of the bundled dataset
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Initial search text (matched against name and SKU)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field filter as FIELD=VALUE (repeatable, e.g. --filter status=active)
    #[arg(short, long, value_parser = parse_filter)]
    pub filter: Vec<(ProductField, String)>,

    /// Sort by FIELD; repeating the same field toggles the direction
    #[arg(long, value_parser = parse_field)]
    pub sort: Vec<ProductField>,

    /// Page to show (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Print the selected page to stdout and exit instead of starting the TUI
    #[arg(short, long)]
    pub list: bool,

    /// Skip the simulated data source latency
    #[arg(long)]
    pub no_latency: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Parse a `FIELD=VALUE` filter argument.
///
/// Inputs:
/// - `s`: Raw argument
///
/// Output:
/// - `(field, value)` or a message naming the problem.
///
/// # Errors
/// - When `=` is missing or the field is unknown.
pub fn parse_filter(s: &str) -> Result<(ProductField, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{s}`"))?;
    let field = parse_field(k)?;
    Ok((field, v.trim().to_string()))
}

/// Parse a field name for `--sort`/`--filter`.
///
/// # Errors
/// - When the name is not a known product field.
pub fn parse_field(s: &str) -> Result<ProductField, String> {
    ProductField::from_config_key(s).ok_or_else(|| format!("unknown product field `{s}`"))
}

impl Args {
    /// Effective log level after `--verbose`.
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }

    /// What: Overlay command-line choices on loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Values from settings.conf
    ///
    /// Output:
    /// - Settings with `--dataset`, `--per-page` and `--no-latency` applied.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(p) = &self.dataset {
            settings.dataset_path = Some(p.clone());
        }
        if let Some(n) = self.per_page.filter(|n| *n > 0) {
            settings.items_per_page = n;
        }
        if self.no_latency {
            settings.latency = Latency::NONE;
        }
        settings
    }
}
