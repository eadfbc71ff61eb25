// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hooksmith delete` command implementation.

use hooksmith_client::WebhookClient;
use hooksmith_core::HooksmithError;

/// Deletes the webhook. Refuses to act without the `--yes` confirmation.
pub async fn run_delete(url: &str, yes: bool) -> Result<(), HooksmithError> {
    if !yes {
        return Err(HooksmithError::Config(
            "refusing to delete without --yes".to_string(),
        ));
    }

    let client = WebhookClient::new()?;
    client.delete(url).await?;
    println!("webhook deleted");

    Ok(())
}
