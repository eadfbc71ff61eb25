// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for transient human-readable messages.

/// Accepts short-lived messages for transient display.
///
/// Fire-and-forget: implementations must return promptly and must never
/// surface their own failures to the caller. The dispatcher reports outcomes
/// through this seam but owns no part of rendering or expiry.
pub trait NotificationSink: Send + Sync {
    /// Posts one message. No return value; delivery is best-effort.
    fn post(&self, message: &str);
}
