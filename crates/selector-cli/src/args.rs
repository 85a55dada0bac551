use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ApplyArgs;

/// Multi-step product selector
///
/// Walks the product form (type, quantity, support, add) from the terminal.
/// Each `name=value` event is handled the way the form handles an input
/// change: later steps are reset, sections are shown or hidden, and the cart
/// line item is recomputed once a support tier is chosen.
#[derive(Parser)]
#[command(version, about, name = "selector")]
pub struct Args {
    /// Path to a catalog JSON file. Defaults to
    /// $XDG_CONFIG_HOME/selector/catalog.json, then the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print the form as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the selector CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Apply input events in order and print the resulting form
    #[command(alias = "a")]
    Apply(ApplyArgs),
    /// Read input events from stdin, printing the form after each one
    #[command(alias = "r")]
    Run,
    /// List product types and support tiers
    #[command(alias = "c")]
    Catalog,
    /// Print the JSON schema of the --json output
    Schema,
}
