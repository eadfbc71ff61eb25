// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types shared between the webhook client and the dispatcher.

use serde::{Deserialize, Serialize};

/// JSON body POSTed to the webhook endpoint.
///
/// Serializes to `{content, username?, avatar_url?, tts}` -- optional fields
/// are omitted entirely rather than sent as `null`, which some webhook
/// implementations reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Message text.
    pub content: String,

    /// Display name override for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Avatar image URL override for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Request text-to-speech playback on delivery.
    pub tts: bool,
}

impl WebhookPayload {
    /// True when every field is unset: empty content, no overrides, no TTS.
    ///
    /// An all-empty payload carries nothing the endpoint could deliver, so
    /// the scheduler rejects it at start time.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
            && self.username.is_none()
            && self.avatar_url.is_none()
            && !self.tts
    }
}

/// The HTTP-level result of one webhook POST, stripped down to the two
/// facts the dispatcher classifies on: the status code and the server's
/// requested backoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebhookReply {
    /// HTTP status code.
    pub status: u16,

    /// Parsed `Retry-After` header in seconds (may be fractional).
    /// `None` when the header is absent or unparsable.
    pub retry_after_secs: Option<f64>,
}

impl WebhookReply {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Webhook metadata returned by `GET {endpoint}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Owning application, if the webhook was created by one.
    pub application_id: Option<String>,
    /// Avatar hash, if an avatar is set.
    pub avatar: Option<String>,
    pub channel_id: String,
    pub guild_id: String,
    pub id: String,
    pub name: String,
    /// Webhook type discriminant as reported by the API.
    #[serde(rename = "type")]
    pub kind: u8,
    pub token: String,
    pub url: String,
}

/// Mutation body for `PATCH {endpoint}`.
///
/// Only fields that are `Some` are serialized, so a name-only edit leaves
/// the avatar untouched and vice versa.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New avatar image as a `data:<mime>;base64,<data>` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl WebhookEdit {
    /// True when the edit would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }
}
