// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of cost structures, subscription listings, and the cost
//! breakdown.
//!
//! Everything here returns plain strings so the menu loop and the
//! `catalog` subcommand share one set of render functions, and so the
//! formats are testable without a terminal.

use metra_core::{Catalog, ServiceDefinition};
use metra_pricing::currency::format_amount;
use metra_pricing::pricing::{price, rate_for};
use metra_pricing::SubscriptionLedger;

/// Render the banded cost structure of one service, one line per tier.
///
/// Interior bands print as `lo-hi`, the open-ended last band as `lo+`.
pub fn render_cost_structure(def: &ServiceDefinition, symbol: &str) -> String {
    let tiers = def.tiers();
    let rates = def.rates();
    let mut out = String::new();
    for i in 0..tiers.len() {
        let rate = format_amount(symbol, rates[i]);
        if i + 1 < tiers.len() {
            out.push_str(&format!(
                "{}-{}: {} per {}\n",
                tiers[i],
                tiers[i + 1],
                rate,
                def.unit()
            ));
        } else {
            out.push_str(&format!("{}+: {} per {}\n", tiers[i], rate, def.unit()));
        }
    }
    out
}

/// Render the active subscription list, or a "no subscriptions" notice.
///
/// An amount of exactly 1 drops any trailing `s` from the unit label, so
/// a unit of "hours" lists as `1 hour(s)` rather than `1 hours(s)`.
pub fn render_subscriptions(ledger: &SubscriptionLedger, catalog: &Catalog) -> String {
    if !ledger.has_active() {
        return "You have no subscriptions yet.\n".to_string();
    }

    let mut out = String::from("You have subscriptions for:\n");
    for (name, amount) in ledger.active() {
        if let Some(def) = catalog.get(name) {
            let unit = if amount == 1.0 {
                def.unit().trim_end_matches('s')
            } else {
                def.unit()
            };
            out.push_str(&format!("{name}: {amount} {unit}(s)\n"));
        }
    }
    out
}

/// Render the full cost breakdown with a grand total.
///
/// One line per active subscription: `name: amount @ rate = cost`, where
/// the rate is the single applicable per-unit price (whole-amount pricing).
pub fn render_breakdown(
    ledger: &SubscriptionLedger,
    catalog: &Catalog,
    symbol: &str,
) -> String {
    if !ledger.has_active() {
        return "You have no subscriptions yet.\n".to_string();
    }

    let mut out = String::from("Your current cost breakdown is:\n");
    let mut total = 0.0;
    for (name, amount) in ledger.active() {
        if let Some(def) = catalog.get(name) {
            let cost = price(amount, def.tiers(), def.rates());
            let rate = rate_for(amount, def.tiers(), def.rates());
            out.push_str(&format!(
                "{}: {} @ {} = {}\n",
                name,
                amount,
                format_amount(symbol, rate),
                format_amount(symbol, cost)
            ));
            total += cost;
        }
    }
    out.push_str(&format!("TOTAL: {}\n", format_amount(symbol, total)));
    out
}
