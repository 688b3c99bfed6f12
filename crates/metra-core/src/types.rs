// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The service/catalog data model.
//!
//! A `ServiceDefinition` pairs an ordered list of tier-start boundaries with
//! a same-length list of per-unit rates. The pricing engine assumes the
//! arrays it is handed satisfy the construction invariant, so the only way
//! to build a definition is through [`ServiceDefinition::new`].

use std::collections::BTreeMap;

use serde::Serialize;

/// One billable service: tier boundaries plus positionally paired rates.
///
/// Invariant (enforced at construction, never re-checked downstream):
/// - `name` is non-empty
/// - `tiers.len() == rates.len() >= 1`
/// - `tiers` strictly ascending, all values `>= 0`
/// - all `rates` strictly `> 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDefinition {
    name: String,
    unit: String,
    tiers: Vec<f64>,
    rates: Vec<f64>,
}

impl ServiceDefinition {
    /// Build a validated service definition.
    ///
    /// Returns `None` when any part of the invariant fails. Name and unit
    /// are stored trimmed.
    pub fn new(name: &str, unit: &str, tiers: Vec<f64>, rates: Vec<f64>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if tiers.is_empty() || tiers.len() != rates.len() {
            return None;
        }
        if tiers.windows(2).any(|w| w[0] >= w[1]) {
            return None;
        }
        if tiers[0] < 0.0 || tiers.iter().any(|t| !t.is_finite()) {
            return None;
        }
        if rates.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            unit: unit.trim().to_string(),
            tiers,
            rates,
        })
    }

    /// Service name, unique within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label for the billed quantity (e.g. "hour", "Gb").
    /// Not semantically validated.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Tier-start boundaries, strictly ascending.
    pub fn tiers(&self) -> &[f64] {
        &self.tiers
    }

    /// Per-unit rates; `rates()[i]` applies to the band starting at
    /// `tiers()[i]`.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }
}

/// The immutable set of services available for subscription.
///
/// Built once by the catalog loader and read-only for the lifetime of a
/// run. Keys are service names; iteration order is sorted by name, which is
/// also the order the menu numbers services in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    services: BTreeMap<String, ServiceDefinition>,
}

impl Catalog {
    /// Insert a service definition. A later entry with the same name
    /// silently overwrites the earlier one (last-write-wins).
    pub fn insert(&mut self, service: ServiceDefinition) {
        self.services.insert(service.name().to_string(), service);
    }

    /// Look up a service by name.
    pub fn get(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services.get(name)
    }

    /// All service names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.services.keys().map(String::as_str).collect()
    }

    /// Iterate services in sorted-name order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.values()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
