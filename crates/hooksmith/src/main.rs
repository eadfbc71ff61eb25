// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hooksmith - a client-side tool for driving a single webhook endpoint:
//! inspect it, edit it, delete it, or dispatch a sustained stream of
//! messages against it.
//!
//! This is the binary entry point.

use clap::{Parser, Subcommand};

use hooksmith_config::HooksmithConfig;
use hooksmith_core::HooksmithError;

mod delete;
mod dispatch;
mod edit;
mod info;
mod shutdown;
mod toast;

/// Hooksmith - webhook inspection and dispatch tool.
#[derive(Parser, Debug)]
#[command(name = "hooksmith", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch and print webhook metadata.
    Info {
        /// Webhook URL (falls back to `webhook.url` from config).
        url: Option<String>,
    },
    /// Send messages on a repeating schedule until interrupted.
    Dispatch(dispatch::DispatchArgs),
    /// Update the webhook's name and/or avatar.
    Edit(edit::EditArgs),
    /// Delete the webhook.
    Delete {
        /// Webhook URL (falls back to `webhook.url` from config).
        url: Option<String>,
        /// Confirm the deletion; without this flag nothing is deleted.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match hooksmith_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            hooksmith_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let result = match cli.command {
        Commands::Info { url } => {
            let url = resolve_url(url, &config);
            match url {
                Ok(url) => info::run_info(&url).await,
                Err(err) => Err(err),
            }
        }
        Commands::Dispatch(args) => dispatch::run_dispatch(args, &config).await,
        Commands::Edit(args) => edit::run_edit(args, &config).await,
        Commands::Delete { url, yes } => match resolve_url(url, &config) {
            Ok(url) => delete::run_delete(&url, yes).await,
            Err(err) => Err(err),
        },
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Picks the webhook URL from the command line, falling back to config.
fn resolve_url(arg: Option<String>, config: &HooksmithConfig) -> Result<String, HooksmithError> {
    arg.or_else(|| config.webhook.url.clone())
        .ok_or_else(|| {
            HooksmithError::Config(
                "no webhook URL: pass one as an argument or set webhook.url in hooksmith.toml"
                    .to_string(),
            )
        })
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hooksmith={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_url_prefers_argument() {
        let mut config = HooksmithConfig::default();
        config.webhook.url = Some("https://example.com/from-config".to_string());

        let url = resolve_url(Some("https://example.com/from-arg".to_string()), &config)
            .expect("argument should win");
        assert_eq!(url, "https://example.com/from-arg");
    }

    #[test]
    fn resolve_url_falls_back_to_config() {
        let mut config = HooksmithConfig::default();
        config.webhook.url = Some("https://example.com/from-config".to_string());

        let url = resolve_url(None, &config).expect("config should supply the URL");
        assert_eq!(url, "https://example.com/from-config");
    }

    #[test]
    fn resolve_url_errors_when_unset() {
        let config = HooksmithConfig::default();
        let err = resolve_url(None, &config).unwrap_err();
        assert!(matches!(err, HooksmithError::Config(_)));
    }
}
