//! Selector CLI Application
//!
//! Command-line front end for the multi-step product selector.

mod args;
mod cli;
mod renderer;

use std::io;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use selector_core::SelectorBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let builder = SelectorBuilder::new().with_catalog_path(catalog_file);
    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(builder, renderer, json);

    info!("Selector started");

    match command {
        Some(Commands::Apply(args)) => cli.apply(&args),
        Some(Commands::Run) => cli.run(io::stdin().lock()),
        Some(Commands::Catalog) => cli.show_catalog(),
        Some(Commands::Schema) => cli.print_schema(),
        None => cli.show_initial(),
    }
}
