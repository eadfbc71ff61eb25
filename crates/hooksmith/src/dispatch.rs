// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hooksmith dispatch` command implementation.
//!
//! Builds a dispatch job from the command line and config defaults, starts
//! the scheduler, and runs until a signal arrives or the loop terminates on
//! its own (endpoint gone).

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::info;

use hooksmith_client::WebhookClient;
use hooksmith_config::HooksmithConfig;
use hooksmith_core::{HooksmithError, WebhookPayload};
use hooksmith_dispatch::{rate, DispatchJob, DispatchScheduler};

use crate::shutdown;
use crate::toast::ToastSink;

/// Arguments for the dispatch subcommand.
#[derive(Args, Debug)]
pub struct DispatchArgs {
    /// Webhook URL (falls back to `webhook.url` from config).
    pub url: Option<String>,

    /// Message text sent on every tick.
    #[arg(long)]
    pub content: Option<String>,

    /// Display-name override (falls back to `dispatch.username` from config).
    #[arg(long)]
    pub username: Option<String>,

    /// Avatar URL override (falls back to `dispatch.avatar_url` from config).
    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Request text-to-speech playback.
    #[arg(long)]
    pub tts: bool,

    /// Milliseconds between sends; 0 means as fast as possible
    /// (falls back to `dispatch.interval_ms` from config).
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

/// Runs the dispatch loop until interrupted or terminated by the scheduler.
pub async fn run_dispatch(
    args: DispatchArgs,
    config: &HooksmithConfig,
) -> Result<(), HooksmithError> {
    let endpoint = crate::resolve_url(args.url, config)?;
    let interval = Duration::from_millis(args.interval_ms.unwrap_or(config.dispatch.interval_ms));

    let payload = WebhookPayload {
        content: args.content.unwrap_or_default(),
        username: args.username.or_else(|| config.dispatch.username.clone()),
        avatar_url: args
            .avatar_url
            .or_else(|| config.dispatch.avatar_url.clone()),
        tts: args.tts,
    };

    let job = DispatchJob {
        endpoint,
        payload,
        interval,
    };

    println!("dispatching at {}", rate::estimate(interval));

    let transport = Arc::new(WebhookClient::new()?);
    let sink = Arc::new(ToastSink::new());
    let scheduler = DispatchScheduler::new(transport, sink);
    let handle = scheduler.start(job)?;

    let cancel = shutdown::install_signal_handler();
    tokio::select! {
        _ = cancel.cancelled() => {
            handle.stop().await;
        }
        _ = handle.wait_terminal() => {}
    }

    let status = handle.status();
    info!(phase = %status.phase, "dispatch finished");
    println!("dispatch {}", status.phase);
    if let Some(outcome) = status.last_outcome {
        println!("last outcome: {outcome}");
    }

    Ok(())
}
