// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hooksmith.toml` > `~/.config/hooksmith/hooksmith.toml`
//! > `/etc/hooksmith/hooksmith.toml` with environment variable overrides via
//! the `HOOKSMITH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HooksmithConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hooksmith/hooksmith.toml` (system-wide)
/// 3. `~/.config/hooksmith/hooksmith.toml` (user XDG config)
/// 4. `./hooksmith.toml` (local directory)
/// 5. `HOOKSMITH_*` environment variables
pub fn load_config() -> Result<HooksmithConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HooksmithConfig::default()))
        .merge(Toml::file("/etc/hooksmith/hooksmith.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("hooksmith/hooksmith.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("hooksmith.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<HooksmithConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HooksmithConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HooksmithConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HooksmithConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` instead of `Env::split("_")` so that key names
/// containing underscores stay intact: `HOOKSMITH_DISPATCH_INTERVAL_MS`
/// must map to `dispatch.interval_ms`, not `dispatch.interval.ms`.
fn env_provider() -> Env {
    Env::prefixed("HOOKSMITH_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: HOOKSMITH_DISPATCH_INTERVAL_MS -> "dispatch_interval_ms"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("webhook_", "webhook.", 1)
            .replacen("dispatch_", "dispatch.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
