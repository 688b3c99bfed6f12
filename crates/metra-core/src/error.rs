// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Metra workspace.

use thiserror::Error;

/// The primary error type used across all Metra crates.
///
/// Only `CatalogNotFound` and `EmptyCatalog` are fatal: they abort startup
/// with a user-facing message. Everything else that can go wrong at runtime
/// (a malformed catalog record, an invalid amount entered at the prompt, an
/// unknown menu selection) is recovered at the boundary where it occurs and
/// never becomes a `MetraError`.
#[derive(Debug, Error)]
pub enum MetraError {
    /// The catalog record source could not be opened.
    #[error("catalog file `{path}` not found: {source}")]
    CatalogNotFound {
        path: String,
        source: std::io::Error,
    },

    /// The catalog source was readable but produced zero valid services.
    #[error("no valid services found in `{path}`")]
    EmptyCatalog { path: String },

    /// Configuration errors (invalid TOML, unknown keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
