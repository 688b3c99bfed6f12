// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Metra subscription cost calculator.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostic rendering with typo suggestions.

use tracing::{debug, warn};

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::MetraConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// The high-level entry point used by the binary:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
pub fn load_and_validate() -> Result<MetraConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a specific TOML file and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<MetraConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<MetraConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(loaded: Result<MetraConfig, figment::Error>) -> Result<MetraConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            if let Err(errors) = validation::validate_config(&config) {
                warn!(errors = errors.len(), "configuration failed validation");
                return Err(errors);
            }
            debug!(
                catalog_path = %config.catalog.path,
                log_level = %config.app.log_level,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_and_validate() {
        let config = load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.catalog.path, "services.csv");
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn unknown_key_is_reported() {
        let errors = load_and_validate_str("[catalog]\npth = \"x.csv\"\n").unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "pth")));
    }

    #[test]
    fn semantic_validation_runs_after_parse() {
        let errors = load_and_validate_str("[catalog]\npath = \"\"\n").unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("catalog.path"))));
    }
}
