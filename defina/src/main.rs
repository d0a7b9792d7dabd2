// defina/src/main.rs
//! defina entry point.
//!
//! Parses the command line, sets up logging and runs a single lookup.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::{info, LevelFilter};
use std::io;

use defina::cli::Cli;
use defina::commands::define::{run_define, DefineOptions};
use defina::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("defina started. Version: {}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let opts = DefineOptions::from_cli(&cli, color);

    let mut writer = stdout.lock();
    run_define(opts, &mut writer)
}
