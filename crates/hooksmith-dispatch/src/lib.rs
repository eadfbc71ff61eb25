// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repeating dispatch scheduler for Hooksmith.
//!
//! Owns the send loop: timing, response classification, rate-limit backoff,
//! and lifecycle (start/stop). One request per tick, at most one request in
//! flight per job, and a guarantee that nothing is sent after a handle is
//! stopped.
//!
//! The scheduler talks to the outside world through two seams defined in
//! `hooksmith-core`: a [`WebhookTransport`](hooksmith_core::WebhookTransport)
//! that performs the actual HTTP send, and a
//! [`NotificationSink`](hooksmith_core::NotificationSink) that receives
//! human-readable outcome messages.

pub mod classify;
pub mod job;
pub mod rate;
pub mod scheduler;

pub use classify::{classify, DispatchOutcome, DEFAULT_BACKOFF};
pub use job::DispatchJob;
pub use rate::{estimate, RateEstimate};
pub use scheduler::{DispatchHandle, DispatchPhase, DispatchScheduler, DispatchStatus};
