// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatch loop: timing, sending, classification, backoff, lifecycle.
//!
//! One tokio task per job drives ticks. The loop owns the single in-flight
//! request: it awaits each send to completion before waiting for the next
//! tick, and the ticker drops (never queues) ticks that fire while a send is
//! still outstanding. Stopping is cooperative -- a [`CancellationToken`] is
//! checked before every tick-send and before resuming from backoff, but an
//! already-sent request is never aborted, so its outcome is always
//! classified.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use hooksmith_core::traits::notify::NotificationSink;
use hooksmith_core::traits::transport::WebhookTransport;
use hooksmith_core::HooksmithError;

use crate::classify::{classify, DispatchOutcome};
use crate::job::DispatchJob;

/// Phases of the dispatch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPhase {
    /// State exists but the loop has not been started.
    Idle,
    /// Ticking normally.
    Running,
    /// Suspended by a server-mandated backoff; resumes on its own.
    BackoffWait,
    /// Terminated by the caller. Terminal.
    Stopped,
    /// Terminated by a fatal outcome. Terminal.
    Failed,
}

impl DispatchPhase {
    /// True for phases from which no further tick can ever occur.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchPhase::Stopped | DispatchPhase::Failed)
    }
}

impl std::fmt::Display for DispatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchPhase::Idle => write!(f, "idle"),
            DispatchPhase::Running => write!(f, "running"),
            DispatchPhase::BackoffWait => write!(f, "backoff"),
            DispatchPhase::Stopped => write!(f, "stopped"),
            DispatchPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Snapshot of a job's state: current phase plus the most recent outcome.
///
/// `last_outcome` exists for observability only; it never drives
/// transitions.
#[derive(Debug, Clone)]
pub struct DispatchStatus {
    pub phase: DispatchPhase,
    pub last_outcome: Option<DispatchOutcome>,
}

impl Default for DispatchStatus {
    fn default() -> Self {
        Self {
            phase: DispatchPhase::Idle,
            last_outcome: None,
        }
    }
}

/// Starts dispatch jobs against a transport, reporting outcomes to a sink.
///
/// Jobs are independent: each `start` spawns its own loop task with its own
/// state, and concurrent jobs need no extra synchronization.
pub struct DispatchScheduler {
    transport: Arc<dyn WebhookTransport>,
    sink: Arc<dyn NotificationSink>,
}

impl DispatchScheduler {
    pub fn new(transport: Arc<dyn WebhookTransport>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { transport, sink }
    }

    /// Validates the job and starts its dispatch loop.
    ///
    /// On success the state is already `Running` when this returns; the
    /// first request fires one full interval later. The only synchronous
    /// failure is `InvalidJob`.
    pub fn start(&self, job: DispatchJob) -> Result<DispatchHandle, HooksmithError> {
        job.validate()?;

        let (status_tx, status_rx) = watch::channel(DispatchStatus::default());
        status_tx.send_modify(|status| status.phase = DispatchPhase::Running);

        let cancel = CancellationToken::new();
        info!(
            endpoint = job.endpoint.as_str(),
            interval_ms = job.interval.as_millis() as u64,
            "dispatch started"
        );

        let task = tokio::spawn(run_loop(
            job,
            self.transport.clone(),
            self.sink.clone(),
            cancel.clone(),
            status_tx,
        ));

        Ok(DispatchHandle {
            cancel,
            status: status_rx,
            task: tokio::sync::Mutex::new(Some(task)),
        })
    }
}

/// Control handle for one running dispatch job.
pub struct DispatchHandle {
    cancel: CancellationToken,
    status: watch::Receiver<DispatchStatus>,
    task: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

impl DispatchHandle {
    /// Requests termination and waits for the loop to wind down.
    ///
    /// When this returns the loop task has exited: no request will be issued
    /// that was not already in flight when `stop` was called, and an
    /// in-flight request's outcome has been classified and recorded.
    /// Idempotent -- stopping an already-terminated handle is a no-op.
    pub async fn stop(&self) {
        self.cancel.cancel();
        let task = self.task.lock().await.take();
        if let Some(task) = task {
            if let Err(err) = task.await {
                warn!(error = %err, "dispatch loop task panicked");
            }
        }
    }

    /// Non-blocking snapshot of the current phase and last outcome.
    pub fn status(&self) -> DispatchStatus {
        self.status.borrow().clone()
    }

    /// Waits until the job reaches a terminal phase and returns the final
    /// status. Returns immediately if the job already terminated.
    pub async fn wait_terminal(&self) -> DispatchStatus {
        let mut rx = self.status.clone();
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if snapshot.phase.is_terminal() {
                return snapshot;
            }
            if rx.changed().await.is_err() {
                return self.status();
            }
        }
    }
}

/// The per-job loop. Exits on cancellation or on a fatal outcome; every exit
/// path leaves the status in a terminal phase, and no timer outlives it.
async fn run_loop(
    job: DispatchJob,
    transport: Arc<dyn WebhookTransport>,
    sink: Arc<dyn NotificationSink>,
    cancel: CancellationToken,
    status: watch::Sender<DispatchStatus>,
) {
    // Zero interval means unbounded rate: no ticker, only the stop check
    // between sends. The first tick of a real interval fires one full
    // period after start.
    let mut ticker = if job.interval.is_zero() {
        None
    } else {
        let mut ticker = time::interval_at(Instant::now() + job.interval, job.interval);
        // Ticks that fire while a send is outstanding are dropped, not
        // queued: at most one request is ever in flight per job.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Some(ticker)
    };

    loop {
        if !wait_for_tick(ticker.as_mut(), &cancel).await {
            status.send_modify(|s| s.phase = DispatchPhase::Stopped);
            debug!("dispatch stopped before next tick");
            break;
        }

        // The send itself is not raced against the stop flag: once issued,
        // a request is always driven to classification.
        let outcome = classify(transport.post_message(&job.endpoint, &job.payload).await);

        match outcome {
            DispatchOutcome::Accepted => {
                debug!(endpoint = job.endpoint.as_str(), "message accepted");
                status.send_modify(|s| s.last_outcome = Some(DispatchOutcome::Accepted));
            }
            DispatchOutcome::TransientError(message) => {
                warn!(error = message.as_str(), "send failed, retrying next tick");
                sink.post(&format!("failed to send webhook: {message}"));
                status.send_modify(|s| {
                    s.last_outcome = Some(DispatchOutcome::TransientError(message));
                });
            }
            DispatchOutcome::UnexpectedStatus(code) => {
                warn!(status = code, "unexpected response, retrying next tick");
                sink.post(&format!("webhook returned unexpected status {code}"));
                status.send_modify(|s| {
                    s.last_outcome = Some(DispatchOutcome::UnexpectedStatus(code));
                });
            }
            DispatchOutcome::EndpointGone => {
                warn!(endpoint = job.endpoint.as_str(), "webhook gone, dispatch failed");
                sink.post("invalid webhook: 404");
                status.send_modify(|s| {
                    s.last_outcome = Some(DispatchOutcome::EndpointGone);
                    s.phase = DispatchPhase::Failed;
                });
                break;
            }
            DispatchOutcome::RateLimited { retry_after } => {
                info!(
                    wait_secs = retry_after.as_secs_f64(),
                    "rate limited, backing off"
                );
                status.send_modify(|s| {
                    s.last_outcome = Some(DispatchOutcome::RateLimited { retry_after });
                    s.phase = DispatchPhase::BackoffWait;
                });

                // The backoff suspends ticking only; stop pre-empts the
                // pending resume, even when both are ready.
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        status.send_modify(|s| s.phase = DispatchPhase::Stopped);
                        debug!("dispatch stopped during backoff");
                        break;
                    }
                    _ = time::sleep(retry_after) => {}
                }

                // Resume normal-interval spacing from this point; missed
                // ticks are not made up.
                if let Some(ticker) = ticker.as_mut() {
                    ticker.reset();
                }
                status.send_modify(|s| s.phase = DispatchPhase::Running);
            }
        }
    }

    debug!("dispatch loop exited");
}

/// Waits for the next tick, racing the stop flag. Returns `false` when the
/// loop should terminate instead of sending.
async fn wait_for_tick(
    ticker: Option<&mut time::Interval>,
    cancel: &CancellationToken,
) -> bool {
    match ticker {
        Some(ticker) => {
            // Biased: when the stop flag and a due tick are both ready, the
            // stop flag wins -- nothing is sent after cancellation.
            tokio::select! {
                biased;
                _ = cancel.cancelled() => false,
                _ = ticker.tick() => true,
            }
        }
        // Unbounded mode: only the stop check separates sends.
        None => !cancel.is_cancelled(),
    }
}
