// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory subscription ledger.
//!
//! Maps service names to a current usage amount for the lifetime of a run.
//! Non-negativity is the only enforced invariant; an amount of `0` is a
//! valid stored value meaning "no active subscription". The menu owns the
//! one mutable handle — there is no process-wide state.

use std::collections::BTreeMap;

use tracing::debug;

/// Name → amount mapping for the current session's subscriptions.
#[derive(Debug, Default)]
pub struct SubscriptionLedger {
    amounts: BTreeMap<String, f64>,
}

impl SubscriptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or update the amount for a service.
    ///
    /// Rejects negative amounts and returns `false`; storing `0` is
    /// allowed and clears the active subscription.
    pub fn set(&mut self, service: &str, amount: f64) -> bool {
        if amount < 0.0 {
            return false;
        }
        self.amounts.insert(service.to_string(), amount);
        debug!(service, amount, "subscription updated");
        true
    }

    /// Current amount for a service; `0.0` when never subscribed.
    pub fn amount_of(&self, service: &str) -> f64 {
        self.amounts.get(service).copied().unwrap_or(0.0)
    }

    /// Clear a subscription by setting its amount to `0`.
    ///
    /// Returns `false` when the service was never in the ledger.
    pub fn remove(&mut self, service: &str) -> bool {
        match self.amounts.get_mut(service) {
            Some(amount) => {
                *amount = 0.0;
                true
            }
            None => false,
        }
    }

    /// Active subscriptions (amount > 0), sorted by service name.
    pub fn active(&self) -> Vec<(&str, f64)> {
        self.amounts
            .iter()
            .filter(|(_, amount)| **amount > 0.0)
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect()
    }

    /// Whether any subscription is active.
    pub fn has_active(&self) -> bool {
        self.amounts.values().any(|amount| *amount > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_back() {
        let mut ledger = SubscriptionLedger::new();
        assert!(ledger.set("Compute", 12.5));
        assert!((ledger.amount_of("Compute") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_service_reads_zero() {
        let ledger = SubscriptionLedger::new();
        assert!((ledger.amount_of("nope") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_amount_rejected() {
        let mut ledger = SubscriptionLedger::new();
        assert!(!ledger.set("Compute", -1.0));
        assert!((ledger.amount_of("Compute") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_is_a_valid_stored_amount() {
        let mut ledger = SubscriptionLedger::new();
        assert!(ledger.set("Compute", 10.0));
        assert!(ledger.set("Compute", 0.0));
        assert!(!ledger.has_active());
        assert!(ledger.active().is_empty());
    }

    #[test]
    fn active_filters_and_sorts() {
        let mut ledger = SubscriptionLedger::new();
        ledger.set("Storage", 5.0);
        ledger.set("Compute", 10.0);
        ledger.set("Bandwidth", 0.0);
        let active = ledger.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].0, "Compute");
        assert_eq!(active[1].0, "Storage");
    }

    #[test]
    fn remove_zeroes_existing_entry() {
        let mut ledger = SubscriptionLedger::new();
        ledger.set("Compute", 10.0);
        assert!(ledger.remove("Compute"));
        assert!((ledger.amount_of("Compute") - 0.0).abs() < f64::EPSILON);
        assert!(!ledger.remove("never-seen"));
    }

    #[test]
    fn update_overwrites_previous_amount() {
        let mut ledger = SubscriptionLedger::new();
        ledger.set("Compute", 10.0);
        ledger.set("Compute", 25.0);
        assert!((ledger.amount_of("Compute") - 25.0).abs() < f64::EPSILON);
    }
}
