// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog loading for the Metra subscription cost calculator.
//!
//! This crate turns a flat text record source into a validated
//! [`Catalog`](metra_core::Catalog):
//! - **Parser**: one record is three consecutive non-blank lines
//!   (`name,unit` / tier boundaries / rates)
//! - **Loader**: reads the file, walks records in fixed windows of three
//!   lines, skips malformed records, and fails only when the result would
//!   be empty

pub mod loader;
pub mod parser;

pub use loader::load_catalog;
pub use parser::parse_entry;
