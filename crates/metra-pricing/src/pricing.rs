// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tier selection and cost calculation.
//!
//! Pricing is whole-amount-at-one-rate: the entire quantity is billed at
//! the single matched tier's rate. With tiers `[0, 50, 1000]` and rates
//! `[0.62, 0.58, 0.55]`, 100 units cost `100 * 0.58`, never
//! `50 * 0.62 + 50 * 0.58`. This is not a progressive/marginal scheme.
//!
//! All functions here are pure and assume the tier/rate arrays satisfy the
//! `ServiceDefinition` construction invariant (same length, non-empty,
//! strictly ascending tiers). They do not re-validate it; passing anything
//! else is a caller contract violation.

/// Find the tier a usage amount falls into.
///
/// Scans boundaries from the highest index downward and returns the first
/// index `i` with `amount >= tiers[i]`, so a boundary value is billed at
/// its own tier's rate (start of band, inclusive). When the amount is below
/// `tiers[0]` no band matches and index 0 is returned as a fallback: such
/// amounts are billed at tier 0's rate by policy, not treated as an error.
pub fn select_tier(amount: f64, tiers: &[f64]) -> usize {
    for i in (0..tiers.len()).rev() {
        if amount >= tiers[i] {
            return i;
        }
    }
    0
}

/// Total cost for an amount under whole-amount tiered pricing.
///
/// Negative usage never bills (saturating floor at zero), and zero usage
/// short-circuits before the tier lookup.
pub fn price(amount: f64, tiers: &[f64], rates: &[f64]) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }
    amount * rates[select_tier(amount, tiers)]
}

/// Per-unit rate that applies to an amount, without multiplying.
///
/// Used to display the applicable unit price. Returns `0.0` for negative
/// amounts.
pub fn rate_for(amount: f64, tiers: &[f64], rates: &[f64]) -> f64 {
    if amount < 0.0 {
        return 0.0;
    }
    rates[select_tier(amount, tiers)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [f64; 4] = [0.0, 50.0, 1000.0, 8000.0];
    const RATES: [f64; 4] = [0.62, 0.58, 0.55, 0.50];

    #[test]
    fn boundary_is_inclusive() {
        assert_eq!(select_tier(50.0, &TIERS), 1);
        assert_eq!(select_tier(49.99, &TIERS), 0);
        assert_eq!(select_tier(50.01, &TIERS), 1);
    }

    #[test]
    fn selects_every_band() {
        assert_eq!(select_tier(0.0, &TIERS), 0);
        assert_eq!(select_tier(25.0, &TIERS), 0);
        assert_eq!(select_tier(999.99, &TIERS), 1);
        assert_eq!(select_tier(1000.0, &TIERS), 2);
        assert_eq!(select_tier(8000.0, &TIERS), 3);
        assert_eq!(select_tier(1_000_000.0, &TIERS), 3);
    }

    #[test]
    fn below_first_boundary_falls_back_to_tier_zero() {
        let tiers = [10.0, 50.0];
        assert_eq!(select_tier(5.0, &tiers), 0);
    }

    #[test]
    fn single_tier_always_selected() {
        assert_eq!(select_tier(0.0, &[0.0]), 0);
        assert_eq!(select_tier(1e9, &[0.0]), 0);
    }

    #[test]
    fn whole_amount_single_rate_law() {
        // 100 units all bill at tier 1's rate; never 50*0.62 + 50*0.58.
        let cost = price(100.0, &[0.0, 50.0], &[0.62, 0.58]);
        assert!(
            (cost - 58.0).abs() < 1e-10,
            "expected 58.0, got {cost}"
        );
    }

    #[test]
    fn negative_amount_never_bills() {
        assert!((price(-1.0, &TIERS, &RATES) - 0.0).abs() < f64::EPSILON);
        assert!((price(-1e9, &TIERS, &RATES) - 0.0).abs() < f64::EPSILON);
        assert!((rate_for(-0.01, &TIERS, &RATES) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_amount_is_free() {
        assert!((price(0.0, &TIERS, &RATES) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rate_for_returns_unmultiplied_rate() {
        assert!((rate_for(100.0, &TIERS, &RATES) - 0.58).abs() < f64::EPSILON);
        assert!((rate_for(0.0, &TIERS, &RATES) - 0.62).abs() < f64::EPSILON);
        assert!((rate_for(8000.0, &TIERS, &RATES) - 0.50).abs() < f64::EPSILON);
    }

    #[test]
    fn price_at_exact_boundary_uses_new_tier_rate() {
        let cost = price(50.0, &[0.0, 50.0], &[0.62, 0.58]);
        assert!(
            (cost - 29.0).abs() < 1e-10,
            "expected 29.0, got {cost}"
        );
    }

    #[test]
    fn fractional_amounts_price_exactly() {
        let cost = price(49.99, &[0.0, 50.0], &[0.62, 0.58]);
        assert!(
            (cost - 49.99 * 0.62).abs() < 1e-10,
            "expected {}, got {cost}",
            49.99 * 0.62
        );
    }
}
