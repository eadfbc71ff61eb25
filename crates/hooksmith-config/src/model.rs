// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, turning typos into actionable errors.

use serde::{Deserialize, Serialize};

/// Top-level Hooksmith configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HooksmithConfig {
    /// Target webhook settings.
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Dispatch loop settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Target webhook configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookConfig {
    /// Webhook URL used when no URL is given on the command line.
    #[serde(default)]
    pub url: Option<String>,
}

/// Dispatch loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    /// Default spacing between sends in milliseconds. `0` means unbounded.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Default display-name override applied when the command line sets none.
    #[serde(default)]
    pub username: Option<String>,

    /// Default avatar URL override applied when the command line sets none.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            username: None,
            avatar_url: None,
        }
    }
}

fn default_interval_ms() -> u64 {
    100
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
