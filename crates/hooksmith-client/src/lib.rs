// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP webhook client for Hooksmith.
//!
//! [`WebhookClient`] covers the one-shot metadata operations (fetch, edit,
//! delete) and implements the `WebhookTransport` seam the dispatcher sends
//! through.

pub mod avatar;
pub mod client;

pub use client::WebhookClient;
