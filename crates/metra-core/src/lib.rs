// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Metra subscription cost calculator.
//!
//! This crate provides the error type and the validated data model
//! (service definitions and the catalog) shared by the rest of the
//! workspace. All construction of `ServiceDefinition` goes through this
//! crate so the pricing invariant can never be bypassed.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MetraError;
pub use types::{Catalog, ServiceDefinition};
