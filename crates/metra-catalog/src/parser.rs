// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triplet parsing for catalog records.
//!
//! One service record is three consecutive non-blank lines:
//!
//! ```text
//! Compute,hour
//! 0,50,1000
//! 0.62,0.58,0.55
//! ```
//!
//! Fields are comma-separated with no escaping, so a field value containing
//! a comma cannot be represented.

use metra_core::ServiceDefinition;

/// Parse one service record from three consecutive lines starting at
/// `start`.
///
/// Returns `None` (reject, not an error) when:
/// - fewer than three lines remain from `start`
/// - the name line does not split into exactly two comma-separated fields
/// - any tier or rate token fails numeric parsing
/// - tier and rate counts differ
/// - tiers are not strictly ascending (equal adjacent values rejected)
/// - the construction invariant fails (empty name, negative tier,
///   non-positive rate)
pub fn parse_entry(lines: &[String], start: usize) -> Option<ServiceDefinition> {
    let name_line = lines.get(start)?;
    let tier_line = lines.get(start + 1)?;
    let rate_line = lines.get(start + 2)?;

    let mut fields = name_line.split(',');
    let name = fields.next()?;
    let unit = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let tiers = parse_numeric_list(tier_line)?;
    let rates = parse_numeric_list(rate_line)?;

    ServiceDefinition::new(name, unit, tiers, rates)
}

/// Parse a comma-separated list of numbers, trimming each token.
fn parse_numeric_list(line: &str) -> Option<Vec<f64>> {
    line.split(',')
        .map(|token| token.trim().parse::<f64>().ok())
        .collect()
}
