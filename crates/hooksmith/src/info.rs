// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hooksmith info` command implementation.

use hooksmith_client::WebhookClient;
use hooksmith_core::HooksmithError;

/// Fetches webhook metadata and prints it field by field.
pub async fn run_info(url: &str) -> Result<(), HooksmithError> {
    let client = WebhookClient::new()?;
    let info = client.fetch_info(url).await?;

    println!("name:       {}", info.name);
    println!("id:         {}", info.id);
    println!("channel id: {}", info.channel_id);
    println!("guild id:   {}", info.guild_id);
    println!("token:      {}", info.token);
    println!("avatar:     {}", if info.avatar.is_some() { "yes" } else { "no" });
    if let Some(application_id) = &info.application_id {
        println!("app id:     {application_id}");
    }

    Ok(())
}
