// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the Hooksmith workspace.

use thiserror::Error;

/// The primary error type used across Hooksmith crates.
#[derive(Debug, Error)]
pub enum HooksmithError {
    /// Configuration errors (invalid TOML, bad values, missing sections).
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller handed the scheduler a job it refuses to run.
    #[error("invalid dispatch job: {0}")]
    InvalidJob(String),

    /// Network or client-level failure: the request never produced an HTTP
    /// status (DNS failure, connection refused, timeout, malformed URL).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The endpoint answered 404 -- the webhook no longer exists.
    #[error("webhook endpoint is gone (HTTP 404)")]
    Gone,

    /// A one-shot operation received a status it has no handling for.
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
