// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Currency display formatting.

/// Format a monetary amount with a leading dollar sign and exactly two
/// fraction digits.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Same formatting with a caller-supplied currency symbol.
///
/// The symbol comes from `[display] currency_symbol`; everything else about
/// the rendering is fixed (no locale-aware grouping or placement).
pub fn format_amount(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}
