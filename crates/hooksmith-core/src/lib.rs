// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Hooksmith webhook tool.
//!
//! This crate provides the error taxonomy, wire types, and the two seam
//! traits ([`WebhookTransport`], [`NotificationSink`]) that decouple the
//! dispatch scheduler from the HTTP client and from whatever surface
//! displays its messages.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HooksmithError;
pub use traits::{NotificationSink, WebhookTransport};
pub use types::{WebhookEdit, WebhookInfo, WebhookPayload, WebhookReply};
