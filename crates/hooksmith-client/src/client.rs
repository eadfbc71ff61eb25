// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for a single webhook endpoint.
//!
//! Provides [`WebhookClient`] for the one-shot metadata operations (fetch,
//! edit, delete) and implements [`WebhookTransport`] for the dispatcher's
//! repeated message POSTs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use tracing::debug;

use hooksmith_core::error::HooksmithError;
use hooksmith_core::traits::transport::WebhookTransport;
use hooksmith_core::types::{WebhookEdit, WebhookInfo, WebhookPayload, WebhookReply};

/// Upper bound on any single request; webhook endpoints answer in well
/// under a second when healthy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for webhook operations.
///
/// Holds one pooled `reqwest::Client`; cheap to clone. The same instance
/// serves any endpoint URL -- per-run state lives in the dispatcher, not
/// here.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
}

impl WebhookClient {
    /// Creates a client with connection pooling and a request timeout.
    pub fn new() -> Result<Self, HooksmithError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HooksmithError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client })
    }

    /// Fetches webhook metadata via `GET {url}`.
    pub async fn fetch_info(&self, url: &str) -> Result<WebhookInfo, HooksmithError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        debug!(status = %status, "webhook info response received");

        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body = response.text().await.map_err(|e| HooksmithError::Transport {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| HooksmithError::Transport {
            message: format!("failed to parse webhook info: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Applies a metadata edit via `PATCH {url}` and returns the updated
    /// webhook object.
    pub async fn edit(&self, url: &str, edit: &WebhookEdit) -> Result<WebhookInfo, HooksmithError> {
        let response = self
            .client
            .patch(url)
            .json(edit)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        debug!(status = %status, "webhook edit response received");

        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body = response.text().await.map_err(|e| HooksmithError::Transport {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| HooksmithError::Transport {
            message: format!("failed to parse webhook info: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Deletes the webhook via `DELETE {url}`.
    pub async fn delete(&self, url: &str) -> Result<(), HooksmithError> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        debug!(status = %status, "webhook delete response received");

        if !status.is_success() {
            return Err(status_error(status, response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl WebhookTransport for WebhookClient {
    /// POSTs the payload as JSON and reports the raw status plus any
    /// `Retry-After` value. Classification is the dispatcher's job: every
    /// received status, including 404 and 429, comes back as `Ok`.
    async fn post_message(
        &self,
        endpoint: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookReply, HooksmithError> {
        let response = self
            .client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status().as_u16();
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<f64>().ok());

        debug!(status, retry_after_secs, "webhook message response received");

        Ok(WebhookReply {
            status,
            retry_after_secs,
        })
    }
}

/// Maps a reqwest send failure onto the transport error variant.
fn request_failed(err: reqwest::Error) -> HooksmithError {
    HooksmithError::Transport {
        message: format!("HTTP request failed: {err}"),
        source: Some(Box::new(err)),
    }
}

/// Maps a non-2xx one-shot response onto the error taxonomy.
async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> HooksmithError {
    if status == reqwest::StatusCode::NOT_FOUND {
        return HooksmithError::Gone;
    }
    let body = response.text().await.unwrap_or_default();
    HooksmithError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    }
}
