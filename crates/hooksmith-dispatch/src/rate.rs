// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Estimated-throughput display helper.

use std::time::Duration;

/// Human-facing throughput estimate for a tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateEstimate {
    /// Zero interval: the loop runs as fast as the endpoint allows.
    Unbounded,
    /// Approximate requests per second, rounded to the nearest integer.
    PerSecond(u64),
}

impl std::fmt::Display for RateEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateEstimate::Unbounded => write!(f, "as fast as possible"),
            RateEstimate::PerSecond(n) => write!(f, "~{n} messages/second"),
        }
    }
}

/// Estimates throughput for `interval` without ever dividing by zero.
pub fn estimate(interval: Duration) -> RateEstimate {
    if interval.is_zero() {
        return RateEstimate::Unbounded;
    }
    let per_second = (1.0 / interval.as_secs_f64()).round() as u64;
    RateEstimate::PerSecond(per_second)
}
