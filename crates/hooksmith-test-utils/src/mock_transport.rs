// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock webhook transport for deterministic scheduler testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hooksmith_core::error::HooksmithError;
use hooksmith_core::traits::transport::WebhookTransport;
use hooksmith_core::types::{WebhookPayload, WebhookReply};

/// A mock transport that answers from a scripted FIFO queue.
///
/// When the queue is empty, a `204 No Content` reply is returned. An optional
/// latency is applied to every request, which lets tests exercise the
/// scheduler's skip-on-overlap rule under tokio's paused clock.
///
/// The mock also tracks concurrency: `max_in_flight()` reports the largest
/// number of requests that were ever outstanding at once, which scheduler
/// tests assert is exactly one.
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<WebhookReply, HooksmithError>>>,
    latency: Option<Duration>,
    sent: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    sent_at: Mutex<Vec<tokio::time::Instant>>,
}

impl MockTransport {
    /// Create a mock with an empty reply queue (every request answers 204).
    pub fn new() -> Arc<Self> {
        Self::with_replies(Vec::new())
    }

    /// Create a mock pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<Result<WebhookReply, HooksmithError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::from(replies)),
            latency: None,
            sent: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            sent_at: Mutex::new(Vec::new()),
        })
    }

    /// Create a mock that holds every request for `latency` before replying.
    pub fn with_latency(
        replies: Vec<Result<WebhookReply, HooksmithError>>,
        latency: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::from(replies)),
            latency: Some(latency),
            sent: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            sent_at: Mutex::new(Vec::new()),
        })
    }

    /// Convenience: an `Ok` reply with the given status and no `Retry-After`.
    pub fn status(status: u16) -> Result<WebhookReply, HooksmithError> {
        Ok(WebhookReply {
            status,
            retry_after_secs: None,
        })
    }

    /// Convenience: a 429 reply carrying a `Retry-After` value in seconds.
    pub fn rate_limited(retry_after_secs: f64) -> Result<WebhookReply, HooksmithError> {
        Ok(WebhookReply {
            status: 429,
            retry_after_secs: Some(retry_after_secs),
        })
    }

    /// Convenience: a transport-level failure (no HTTP response at all).
    pub fn failure(message: &str) -> Result<WebhookReply, HooksmithError> {
        Err(HooksmithError::Transport {
            message: message.to_string(),
            source: None,
        })
    }

    /// Number of requests issued so far (counted at send time, before any
    /// simulated latency elapses).
    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    /// Largest number of requests that were ever in flight simultaneously.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Instants (tokio clock) at which each request was issued.
    pub async fn sent_at(&self) -> Vec<tokio::time::Instant> {
        self.sent_at.lock().await.clone()
    }
}

#[async_trait]
impl WebhookTransport for MockTransport {
    async fn post_message(
        &self,
        _endpoint: &str,
        _payload: &WebhookPayload,
    ) -> Result<WebhookReply, HooksmithError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        self.sent_at.lock().await.push(tokio::time::Instant::now());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(WebhookReply {
                status: 204,
                retry_after_secs: None,
            }));

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_replies_returned_in_order() {
        let transport = MockTransport::with_replies(vec![
            MockTransport::status(200),
            MockTransport::rate_limited(2.0),
            MockTransport::failure("connection refused"),
        ]);
        let payload = WebhookPayload::default();

        let first = transport.post_message("url", &payload).await.unwrap();
        assert_eq!(first.status, 200);

        let second = transport.post_message("url", &payload).await.unwrap();
        assert_eq!(second.status, 429);
        assert_eq!(second.retry_after_secs, Some(2.0));

        let third = transport.post_message("url", &payload).await;
        assert!(third.is_err());

        // Queue exhausted -- falls back to 204.
        let fourth = transport.post_message("url", &payload).await.unwrap();
        assert_eq!(fourth.status, 204);

        assert_eq!(transport.sent(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_holds_the_request_open() {
        let transport = MockTransport::with_latency(vec![], Duration::from_millis(250));
        let payload = WebhookPayload::default();

        let started = tokio::time::Instant::now();
        transport.post_message("url", &payload).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(250));
        assert_eq!(transport.max_in_flight(), 1);
    }
}
