// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for the Hooksmith seam traits.
//!
//! `MockTransport` implements `WebhookTransport` with a scripted reply queue
//! and optional per-request latency, enabling fast, CI-runnable scheduler
//! tests without a network. `RecordingSink` captures notification messages
//! for assertion.

pub mod mock_transport;
pub mod recording_sink;

pub use mock_transport::MockTransport;
pub use recording_sink::RecordingSink;
