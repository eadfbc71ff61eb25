// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink that records messages for assertion.

use std::sync::Mutex;

use hooksmith_core::traits::notify::NotificationSink;

/// Captures every posted message in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages posted so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock poisoned").clone()
    }

    /// True when nothing has been posted.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().expect("sink lock poisoned").is_empty()
    }
}

impl NotificationSink for RecordingSink {
    fn post(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink lock poisoned")
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.post("first");
        sink.post("second");

        assert_eq!(sink.messages(), vec!["first", "second"]);
    }
}
