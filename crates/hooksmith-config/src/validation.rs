// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. Collects every failure instead of stopping at the first.

use crate::diagnostic::ConfigError;
use crate::model::HooksmithConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &HooksmithConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // A configured URL must not be blank; absence is fine (the command line
    // can supply one).
    if let Some(url) = &config.webhook.url
        && url.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "webhook.url must not be blank; remove the key to unset it".to_string(),
        });
    }

    // Note: dispatch.interval_ms has no lower bound -- zero is a documented
    // operating mode (unbounded rate).

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.log.level
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
