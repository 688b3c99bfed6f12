// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metra - interactive cloud subscription cost calculator.
//!
//! This is the binary entry point. Startup loads and validates
//! configuration, initializes tracing, and loads the service catalog; a
//! missing or empty catalog is fatal. Everything after that is the
//! interactive menu (or the one-shot `catalog` subcommand).

mod catalog_cmd;
mod display;
mod menu;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use metra_config::MetraConfig;

/// Metra - interactive cloud subscription cost calculator.
#[derive(Parser, Debug)]
#[command(name = "metra", version, about, long_about = None)]
struct Cli {
    /// Load this config file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu (the default).
    Menu,
    /// Print every service's cost structure and exit.
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            metra_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let catalog = match metra_catalog::load_catalog(Path::new(&config.catalog.path)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            eprintln!("Please ensure the catalog file exists and contains valid service records.");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Catalog) => catalog_cmd::run_catalog(&config, &catalog),
        Some(Commands::Menu) | None => {
            if let Err(e) = menu::run_menu(&config, &catalog) {
                eprintln!("{}: {e}", "error".red());
                std::process::exit(1);
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MetraConfig, Vec<metra_config::ConfigError>> {
    match path {
        Some(path) => metra_config::load_and_validate_path(path),
        None => metra_config::load_and_validate(),
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metra={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
