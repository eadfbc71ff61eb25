// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport trait for delivering webhook messages over HTTP.

use async_trait::async_trait;

use crate::error::HooksmithError;
use crate::types::{WebhookPayload, WebhookReply};

/// Delivers one webhook message and reports what the endpoint answered.
///
/// Implemented by the real HTTP client and by test mocks. The dispatcher
/// consumes it as `Arc<dyn WebhookTransport>` so timing behavior can be
/// tested without a network.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POSTs `payload` to `endpoint` as JSON.
    ///
    /// Returns `Ok` with the status and any `Retry-After` value whenever an
    /// HTTP response was received, regardless of the status code. Returns
    /// `Err` only when no response was produced at all.
    async fn post_message(
        &self,
        endpoint: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookReply, HooksmithError>;
}
