// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduler behavior tests under tokio's paused clock.
//!
//! All timing here is virtual: sleeps advance the test clock
//! deterministically, so backoff windows can be asserted to the millisecond
//! without real waits.

use std::sync::Arc;
use std::time::Duration;

use hooksmith_core::error::HooksmithError;
use hooksmith_core::types::WebhookPayload;
use hooksmith_dispatch::{DispatchJob, DispatchPhase, DispatchScheduler};
use hooksmith_test_utils::{MockTransport, RecordingSink};

fn job(interval_ms: u64) -> DispatchJob {
    DispatchJob {
        endpoint: "https://example.com/api/webhooks/1/token".to_string(),
        payload: WebhookPayload {
            content: "ping".to_string(),
            ..Default::default()
        },
        interval: Duration::from_millis(interval_ms),
    }
}

fn scheduler(transport: &Arc<MockTransport>, sink: &Arc<RecordingSink>) -> DispatchScheduler {
    DispatchScheduler::new(transport.clone(), sink.clone())
}

async fn advance_to(ms: u64, epoch: tokio::time::Instant) {
    tokio::time::sleep_until(epoch + Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn start_reports_running_immediately() {
    let transport = MockTransport::new();
    let sink = Arc::new(RecordingSink::new());

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();
    assert_eq!(handle.status().phase, DispatchPhase::Running);
    assert!(handle.status().last_outcome.is_none());

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn immediate_stop_issues_zero_requests() {
    let transport = MockTransport::new();
    let sink = Arc::new(RecordingSink::new());

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();
    handle.stop().await;

    assert_eq!(transport.sent(), 0);
    assert_eq!(handle.status().phase, DispatchPhase::Stopped);
}

#[tokio::test(start_paused = true)]
async fn immediate_stop_issues_zero_requests_with_zero_interval() {
    let transport = MockTransport::new();
    let sink = Arc::new(RecordingSink::new());

    let handle = scheduler(&transport, &sink).start(job(0)).unwrap();
    handle.stop().await;

    assert_eq!(transport.sent(), 0);
    assert_eq!(handle.status().phase, DispatchPhase::Stopped);
}

#[tokio::test(start_paused = true)]
async fn first_request_fires_one_interval_after_start() {
    let transport = MockTransport::new();
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    advance_to(99, epoch).await;
    assert_eq!(transport.sent(), 0);

    advance_to(150, epoch).await;
    assert_eq!(transport.sent(), 1);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn slow_responses_never_overlap() {
    // Round-trip latency (250 ms) is longer than the interval (100 ms):
    // ticks that fire mid-request must be dropped, not queued. Sends land
    // at 100, 400, 700, 1000 ms.
    let transport = MockTransport::with_latency(vec![], Duration::from_millis(250));
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();
    advance_to(1050, epoch).await;
    handle.stop().await;

    assert_eq!(transport.max_in_flight(), 1);
    assert_eq!(transport.sent(), 4);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_pauses_then_resumes_without_catchup() {
    let transport = MockTransport::with_replies(vec![
        MockTransport::status(200),
        MockTransport::rate_limited(2.0),
        MockTransport::status(200),
    ]);
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    // Send 1 at 100 ms answers 200; still running.
    advance_to(150, epoch).await;
    assert_eq!(transport.sent(), 1);
    assert_eq!(handle.status().phase, DispatchPhase::Running);

    // Send 2 at 200 ms answers 429 with Retry-After: 2 -- the loop must sit
    // in backoff, issuing nothing, until 2200 ms.
    advance_to(1000, epoch).await;
    assert_eq!(transport.sent(), 2);
    assert_eq!(handle.status().phase, DispatchPhase::BackoffWait);

    // Backoff over at 2200 ms; running again but the next tick is a full
    // interval later, with no burst of caught-up ticks.
    advance_to(2250, epoch).await;
    assert_eq!(handle.status().phase, DispatchPhase::Running);
    assert_eq!(transport.sent(), 2);

    advance_to(2350, epoch).await;
    assert_eq!(transport.sent(), 3);

    // Gap between the rate-limited send and the next one is the full
    // backoff plus one normal interval.
    let sent_at = transport.sent_at().await;
    assert!(sent_at[2] - sent_at[1] >= Duration::from_millis(2100));

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn missing_retry_after_defaults_to_five_seconds() {
    let transport = MockTransport::with_replies(vec![
        MockTransport::status(429),
        MockTransport::status(200),
    ]);
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    // 429 at 100 ms with no header: backoff must last exactly 5 s.
    advance_to(5050, epoch).await;
    assert_eq!(transport.sent(), 1);
    assert_eq!(handle.status().phase, DispatchPhase::BackoffWait);

    advance_to(5250, epoch).await;
    assert_eq!(transport.sent(), 2);

    let sent_at = transport.sent_at().await;
    assert_eq!(sent_at[1] - sent_at[0], Duration::from_millis(5100));

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn not_found_is_terminal() {
    let transport = MockTransport::with_replies(vec![
        MockTransport::status(204),
        MockTransport::status(404),
    ]);
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    let terminal = handle.wait_terminal().await;
    assert_eq!(terminal.phase, DispatchPhase::Failed);
    assert_eq!(transport.sent(), 2);

    // No tick ever fires again for this handle.
    advance_to(2000, epoch).await;
    assert_eq!(transport.sent(), 2);
    assert_eq!(handle.status().phase, DispatchPhase::Failed);

    assert!(sink.messages().iter().any(|m| m.contains("404")));
}

#[tokio::test(start_paused = true)]
async fn stop_during_backoff_preempts_resume() {
    let transport = MockTransport::with_replies(vec![MockTransport::rate_limited(5.0)]);
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    advance_to(1000, epoch).await;
    assert_eq!(handle.status().phase, DispatchPhase::BackoffWait);
    assert_eq!(transport.sent(), 1);

    handle.stop().await;
    assert_eq!(handle.status().phase, DispatchPhase::Stopped);

    // Past the would-be resume point: the scheduled resume never sends.
    advance_to(8000, epoch).await;
    assert_eq!(transport.sent(), 1);
}

#[tokio::test(start_paused = true)]
async fn transient_errors_do_not_halt_the_loop() {
    let transport = MockTransport::with_replies(vec![
        MockTransport::failure("connection refused"),
        MockTransport::status(204),
    ]);
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    advance_to(250, epoch).await;
    assert_eq!(transport.sent(), 2);
    assert_eq!(handle.status().phase, DispatchPhase::Running);

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("connection refused"));

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn unexpected_statuses_are_reported_but_nonfatal() {
    let transport = MockTransport::with_replies(vec![
        MockTransport::status(500),
        MockTransport::status(204),
    ]);
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();

    advance_to(250, epoch).await;
    assert_eq!(transport.sent(), 2);
    assert_eq!(handle.status().phase, DispatchPhase::Running);
    assert!(sink.messages().iter().any(|m| m.contains("500")));

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn zero_interval_runs_unbounded_one_at_a_time() {
    // 10 ms of latency per request is the only pacing; the loop still never
    // overlaps requests.
    let transport = MockTransport::with_latency(vec![], Duration::from_millis(10));
    let sink = Arc::new(RecordingSink::new());
    let epoch = tokio::time::Instant::now();

    let handle = scheduler(&transport, &sink).start(job(0)).unwrap();
    advance_to(100, epoch).await;
    handle.stop().await;

    assert!(transport.sent() >= 5);
    assert_eq!(transport.max_in_flight(), 1);
}

#[tokio::test(start_paused = true)]
async fn stop_is_idempotent() {
    let transport = MockTransport::new();
    let sink = Arc::new(RecordingSink::new());

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();
    handle.stop().await;
    handle.stop().await;
    assert_eq!(handle.status().phase, DispatchPhase::Stopped);
}

#[tokio::test(start_paused = true)]
async fn stop_after_failure_keeps_failed_phase() {
    let transport = MockTransport::with_replies(vec![MockTransport::status(404)]);
    let sink = Arc::new(RecordingSink::new());

    let handle = scheduler(&transport, &sink).start(job(100)).unwrap();
    let terminal = handle.wait_terminal().await;
    assert_eq!(terminal.phase, DispatchPhase::Failed);

    // A stop after the fatal exit is a no-op; the phase stays Failed.
    handle.stop().await;
    assert_eq!(handle.status().phase, DispatchPhase::Failed);
}

#[tokio::test(start_paused = true)]
async fn invalid_jobs_rejected_synchronously() {
    let transport = MockTransport::new();
    let sink = Arc::new(RecordingSink::new());
    let sched = scheduler(&transport, &sink);

    let mut empty_endpoint = job(100);
    empty_endpoint.endpoint = String::new();
    assert!(matches!(
        sched.start(empty_endpoint),
        Err(HooksmithError::InvalidJob(_))
    ));

    let mut empty_payload = job(100);
    empty_payload.payload = WebhookPayload::default();
    assert!(matches!(
        sched.start(empty_payload),
        Err(HooksmithError::InvalidJob(_))
    ));

    assert_eq!(transport.sent(), 0);
}
