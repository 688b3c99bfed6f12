// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `metra catalog` command implementation.
//!
//! One-shot, non-interactive dump of every loaded service's cost
//! structure, in the same format the menu shows on selection.

use colored::Colorize;
use metra_config::MetraConfig;
use metra_core::Catalog;

use crate::display::render_cost_structure;

/// Print the cost structure of every service in sorted-name order.
pub fn run_catalog(config: &MetraConfig, catalog: &Catalog) {
    let symbol = config.display.currency_symbol.as_str();

    println!("{} ({} services)", "catalog".bold(), catalog.len());
    for def in catalog.iter() {
        println!("\n{} (per {})", def.name().bold(), def.unit());
        print!("{}", render_cost_structure(def, symbol));
    }
}
