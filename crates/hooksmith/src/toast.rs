// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal notification sink.
//!
//! The dispatcher's transient messages surface as single stderr lines,
//! keeping stdout free for command output.

use std::sync::atomic::{AtomicU64, Ordering};

use hooksmith_core::NotificationSink;

/// Prints each message as one numbered stderr line.
#[derive(Debug, Default)]
pub struct ToastSink {
    posted: AtomicU64,
}

impl ToastSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages posted so far.
    pub fn posted(&self) -> u64 {
        self.posted.load(Ordering::Relaxed)
    }
}

impl NotificationSink for ToastSink {
    fn post(&self, message: &str) {
        let n = self.posted.fetch_add(1, Ordering::Relaxed) + 1;
        eprintln!("[{n}] {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_posted_messages() {
        let sink = ToastSink::new();
        assert_eq!(sink.posted(), 0);
        sink.post("one");
        sink.post("two");
        assert_eq!(sink.posted(), 2);
    }
}
