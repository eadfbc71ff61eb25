// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hooksmith edit` command implementation.

use std::path::PathBuf;

use clap::Args;

use hooksmith_client::{avatar, WebhookClient};
use hooksmith_config::HooksmithConfig;
use hooksmith_core::{HooksmithError, WebhookEdit};

/// Arguments for the edit subcommand.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Webhook URL (falls back to `webhook.url` from config).
    pub url: Option<String>,

    /// New webhook name.
    #[arg(long)]
    pub name: Option<String>,

    /// Path to a new avatar image (png, jpg, gif, or webp).
    #[arg(long)]
    pub avatar: Option<PathBuf>,
}

/// Applies a name and/or avatar edit to the webhook.
pub async fn run_edit(args: EditArgs, config: &HooksmithConfig) -> Result<(), HooksmithError> {
    let url = crate::resolve_url(args.url, config)?;

    if args.name.is_none() && args.avatar.is_none() {
        return Err(HooksmithError::Config(
            "nothing to edit: pass --name and/or --avatar".to_string(),
        ));
    }

    let avatar = match args.avatar {
        Some(path) => {
            let bytes = std::fs::read(&path).map_err(|e| {
                HooksmithError::Config(format!(
                    "failed to read avatar file {}: {e}",
                    path.display()
                ))
            })?;
            Some(avatar::data_uri(&bytes, avatar::guess_mime(&path)))
        }
        None => None,
    };

    let edit = WebhookEdit {
        name: args.name,
        avatar,
    };

    let client = WebhookClient::new()?;
    let info = client.edit(&url, &edit).await?;
    println!("webhook updated: name is `{}`", info.name);

    Ok(())
}
