// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-run dispatch configuration.

use std::time::Duration;

use hooksmith_core::error::HooksmithError;
use hooksmith_core::types::WebhookPayload;

/// Immutable configuration for one dispatch run, captured at start time.
///
/// The scheduler never mutates a job; a fresh run always starts from a fresh
/// job and fresh state.
#[derive(Debug, Clone)]
pub struct DispatchJob {
    /// Target webhook URL. Validated only for non-emptiness.
    pub endpoint: String,

    /// Message body sent on every tick.
    pub payload: WebhookPayload,

    /// Spacing between ticks. `Duration::ZERO` is a valid value meaning
    /// "send as fast as possible" -- an unbounded-rate loop, not an error.
    pub interval: Duration,
}

impl DispatchJob {
    /// Checks the job against the start-time contract.
    ///
    /// Rejects an empty endpoint, and a payload with empty content when no
    /// other payload field is set either.
    pub fn validate(&self) -> Result<(), HooksmithError> {
        if self.endpoint.trim().is_empty() {
            return Err(HooksmithError::InvalidJob(
                "endpoint must not be empty".to_string(),
            ));
        }
        if self.payload.is_empty() {
            return Err(HooksmithError::InvalidJob(
                "payload is empty: set content or at least one other field".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(endpoint: &str, payload: WebhookPayload) -> DispatchJob {
        DispatchJob {
            endpoint: endpoint.to_string(),
            payload,
            interval: Duration::from_millis(100),
        }
    }

    #[test]
    fn empty_endpoint_rejected() {
        let payload = WebhookPayload {
            content: "hello".to_string(),
            ..Default::default()
        };
        let err = job("", payload.clone()).validate().unwrap_err();
        assert!(matches!(err, HooksmithError::InvalidJob(_)));

        // Whitespace-only counts as empty.
        let err = job("   ", payload).validate().unwrap_err();
        assert!(matches!(err, HooksmithError::InvalidJob(_)));
    }

    #[test]
    fn empty_payload_rejected() {
        let err = job("https://example.com/hook", WebhookPayload::default())
            .validate()
            .unwrap_err();
        assert!(matches!(err, HooksmithError::InvalidJob(_)));
    }

    #[test]
    fn payload_with_any_field_set_accepted() {
        let with_content = WebhookPayload {
            content: "hello".to_string(),
            ..Default::default()
        };
        assert!(job("https://example.com/hook", with_content).validate().is_ok());

        // Empty content is fine as long as some other field is set.
        let tts_only = WebhookPayload {
            tts: true,
            ..Default::default()
        };
        assert!(job("https://example.com/hook", tts_only).validate().is_ok());
    }

    #[test]
    fn zero_interval_is_valid() {
        let mut j = job(
            "https://example.com/hook",
            WebhookPayload {
                content: "hello".to_string(),
                ..Default::default()
            },
        );
        j.interval = Duration::ZERO;
        assert!(j.validate().is_ok());
    }
}
