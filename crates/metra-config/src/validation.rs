// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes.

use crate::diagnostic::ConfigError;
use crate::model::MetraConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with every collected validation error (does not fail fast).
pub fn validate_config(config: &MetraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.catalog.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "catalog.path must not be empty".to_string(),
        });
    }

    if config.display.currency_symbol.is_empty() {
        errors.push(ConfigError::Validation {
            message: "display.currency_symbol must not be empty".to_string(),
        });
    }

    let level = config.app.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.app.log_level
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
