// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The interactive menu loop.
//!
//! Line-oriented menu over rustyline: select a service by number to set or
//! update its usage amount, list active subscriptions, display the full
//! cost breakdown, or quit. Invalid selections and invalid amounts are
//! reported and the menu redisplays; end-of-input or an interrupt at any
//! prompt is treated as "no value entered", never as an error.

use colored::Colorize;
use metra_config::MetraConfig;
use metra_core::{Catalog, MetraError};
use metra_pricing::SubscriptionLedger;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::display::{render_breakdown, render_cost_structure, render_subscriptions};

/// One parsed main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    /// A 1-based service index from the numbered list.
    Service(usize),
    /// `s` — list subscriptions.
    Subscriptions,
    /// `$` — display the cost breakdown.
    Breakdown,
    /// `q` — quit.
    Quit,
    /// Anything else.
    Unknown,
}

/// Parse a raw menu input line. Matching is case-insensitive and
/// whitespace-tolerant.
fn parse_choice(input: &str) -> Choice {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "q" => Choice::Quit,
        "s" => Choice::Subscriptions,
        "$" => Choice::Breakdown,
        _ => match trimmed.parse::<usize>() {
            Ok(n) => Choice::Service(n),
            Err(_) => Choice::Unknown,
        },
    }
}

/// Result of parsing an amount entered at the update prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AmountInput {
    /// A valid non-negative amount.
    Value(f64),
    /// Blank input cancels the update.
    Cancelled,
    /// Non-numeric input.
    NotANumber,
    /// A numeric but negative amount.
    Negative,
}

fn parse_amount(input: &str) -> AmountInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return AmountInput::Cancelled;
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount < 0.0 => AmountInput::Negative,
        Ok(amount) => AmountInput::Value(amount),
        Err(_) => AmountInput::NotANumber,
    }
}

/// Run the interactive menu until the user quits.
///
/// The catalog is read-only; the subscription ledger lives here and is
/// handed to each operation by reference.
pub fn run_menu(config: &MetraConfig, catalog: &Catalog) -> Result<(), MetraError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| MetraError::Internal(format!("failed to initialize readline: {e}")))?;
    let mut ledger = SubscriptionLedger::new();
    let symbol = config.display.currency_symbol.as_str();

    loop {
        print_main_menu(catalog);
        println!();

        let line = match rl.readline("> ") {
            Ok(line) => line,
            // Ctrl+C / Ctrl+D at the menu prompt quit cleanly.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        match parse_choice(&line) {
            Choice::Quit => break,
            Choice::Subscriptions => {
                println!("\n{}", render_subscriptions(&ledger, catalog));
            }
            Choice::Breakdown => {
                println!("\n{}", render_breakdown(&ledger, catalog, symbol));
            }
            Choice::Service(n) => {
                let names = catalog.names();
                match n.checked_sub(1).and_then(|i| names.get(i).copied()) {
                    Some(name) => update_subscription(&mut rl, catalog, &mut ledger, symbol, name),
                    None => print_error("Invalid service number."),
                }
            }
            Choice::Unknown => print_error("Invalid choice. Please try again."),
        }
    }

    println!("\nThank you for using Metra!");
    Ok(())
}

/// Show one service's cost structure and prompt for a new amount.
///
/// Blank input cancels; non-numeric or negative input is reported and
/// cancels the update (the menu redisplays for another attempt).
fn update_subscription(
    rl: &mut DefaultEditor,
    catalog: &Catalog,
    ledger: &mut SubscriptionLedger,
    symbol: &str,
    name: &str,
) {
    // The name came from the catalog's own listing.
    let Some(def) = catalog.get(name) else {
        return;
    };

    println!(
        "\nYou chose {}, which has the following cost structure:",
        name.bold()
    );
    print!("{}", render_cost_structure(def, symbol));
    println!("\nCurrent {} amount: {}", def.unit(), ledger.amount_of(name));
    println!("Enter new {} amount:", def.unit());

    let line = match rl.readline("> ") {
        Ok(line) => line,
        // Treated as "no value entered".
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            return;
        }
    };

    match parse_amount(&line) {
        AmountInput::Value(amount) => {
            ledger.set(name, amount);
            debug!(service = name, amount, "subscription set from menu");
            println!(
                "\nSubscription updated: {} = {} {}(s)",
                name,
                amount,
                def.unit()
            );
        }
        AmountInput::Cancelled => {}
        AmountInput::NotANumber => print_error("Please enter a valid number."),
        AmountInput::Negative => print_error("Amount cannot be negative."),
    }
}

fn print_main_menu(catalog: &Catalog) {
    println!("\n{}", "=".repeat(50));
    println!("{}", "Welcome to Metra - cloud subscription costs".bold());
    println!("{}", "=".repeat(50));
    println!("\nAdd subscription for:");
    for (i, name) in catalog.names().iter().enumerate() {
        println!("{}) {}", i + 1, name);
    }
    println!("s) List subscriptions");
    println!("$) Display cost breakdown");
    println!("q) Quit");
}

fn print_error(message: &str) {
    println!("\n{}: {message}", "Error".red());
}
