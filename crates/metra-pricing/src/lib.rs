// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pricing for the Metra subscription cost calculator.
//!
//! This crate provides:
//! - **Pricing engine**: pure tier-selection and cost functions over
//!   validated tier/rate arrays
//! - **Subscription ledger**: the in-memory name → amount mapping the menu
//!   mutates
//! - **Currency**: two-decimal dollar formatting for display

pub mod currency;
pub mod ledger;
pub mod pricing;

pub use currency::format_usd;
pub use ledger::SubscriptionLedger;
