// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response classification: one HTTP result in, one dispatch outcome out.

use std::time::Duration;

use hooksmith_core::error::HooksmithError;
use hooksmith_core::types::WebhookReply;

/// Backoff applied to a 429 whose `Retry-After` header is absent or unusable.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);

/// The classified result of one tick's request.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// 2xx -- the endpoint accepted the message.
    Accepted,
    /// No HTTP response was produced (DNS, connect, timeout). Non-fatal;
    /// the next tick proceeds normally.
    TransientError(String),
    /// 404 -- the webhook no longer exists. Fatal and non-retriable.
    EndpointGone,
    /// 429 -- the endpoint asked us to pause for `retry_after`.
    RateLimited { retry_after: Duration },
    /// Any other status. Reported but non-fatal.
    UnexpectedStatus(u16),
}

impl std::fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchOutcome::Accepted => write!(f, "accepted"),
            DispatchOutcome::TransientError(msg) => write!(f, "transient error: {msg}"),
            DispatchOutcome::EndpointGone => write!(f, "endpoint gone (404)"),
            DispatchOutcome::RateLimited { retry_after } => {
                write!(f, "rate limited, waiting {:.1}s", retry_after.as_secs_f64())
            }
            DispatchOutcome::UnexpectedStatus(status) => {
                write!(f, "unexpected status {status}")
            }
        }
    }
}

/// Maps the transport result of one send onto a [`DispatchOutcome`].
///
/// A `Retry-After` value that is negative or non-finite is treated like an
/// absent header and falls back to [`DEFAULT_BACKOFF`].
pub fn classify(result: Result<WebhookReply, HooksmithError>) -> DispatchOutcome {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => return DispatchOutcome::TransientError(err.to_string()),
    };

    if reply.is_success() {
        return DispatchOutcome::Accepted;
    }

    match reply.status {
        404 => DispatchOutcome::EndpointGone,
        429 => {
            let retry_after = reply
                .retry_after_secs
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map(Duration::from_secs_f64)
                .unwrap_or(DEFAULT_BACKOFF);
            DispatchOutcome::RateLimited { retry_after }
        }
        status => DispatchOutcome::UnexpectedStatus(status),
    }
}
