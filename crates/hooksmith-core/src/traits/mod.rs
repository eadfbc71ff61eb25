// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits between the dispatcher core and its collaborators.

pub mod notify;
pub mod transport;

pub use notify::NotificationSink;
pub use transport::WebhookTransport;
