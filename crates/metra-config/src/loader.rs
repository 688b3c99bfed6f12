// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./metra.toml` > `~/.config/metra/metra.toml`
//! > `/etc/metra/metra.toml` with environment variable overrides via the
//! `METRA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MetraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/metra/metra.toml` (system-wide)
/// 3. `~/.config/metra/metra.toml` (user XDG config)
/// 4. `./metra.toml` (local directory)
/// 5. `METRA_*` environment variables
pub fn load_config() -> Result<MetraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MetraConfig::default()))
        .merge(Toml::file("/etc/metra/metra.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("metra/metra.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("metra.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file or env lookup).
pub fn load_config_from_str(toml_content: &str) -> Result<MetraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MetraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MetraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MetraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()`, not `Env::split("_")`, so underscore-containing key
/// names stay unambiguous: `METRA_DISPLAY_CURRENCY_SYMBOL` must map to
/// `display.currency_symbol`, not `display.currency.symbol`.
fn env_provider() -> Env {
    Env::prefixed("METRA_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("catalog_", "catalog.", 1)
            .replacen("display_", "display.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_config_overrides_defaults() {
        let config =
            load_config_from_str("[catalog]\npath = \"/opt/metra/services.csv\"\n").unwrap();
        assert_eq!(config.catalog.path, "/opt/metra/services.csv");
        // Untouched sections keep their defaults.
        assert_eq!(config.app.log_level, "info");
    }

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn env_vars_override_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("metra.toml", "[app]\nlog_level = \"warn\"\n")?;
            jail.set_env("METRA_APP_LOG_LEVEL", "trace");
            let config = load_config().expect("config should load");
            assert_eq!(config.app.log_level, "trace");
            Ok(())
        });
    }

    #[test]
    fn env_var_maps_underscore_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("METRA_DISPLAY_CURRENCY_SYMBOL", "€");
            let config = load_config().expect("config should load");
            assert_eq!(config.display.currency_symbol, "€");
            Ok(())
        });
    }
}
