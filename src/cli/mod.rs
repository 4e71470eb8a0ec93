//! Command-line interface: argument types, command handlers and output.

pub mod commands;
pub mod display;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::domain::errors::ClientError;
use crate::infrastructure::config::{ConfigLoader, ConfigOverrides};
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::neutron::{NeutronClient, NeutronClientConfig};
use crate::services::RuleService;

pub use types::{Cli, Commands, ListenerArg};

/// Load configuration, start logging, build the client and run the command.
pub async fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        url: cli.os_url.clone(),
        token: cli.os_token.clone(),
    };
    let config = ConfigLoader::load(&cli.config, &overrides)?;
    let _logger = LoggerImpl::init(&config.logging, cli.verbose)?;

    let client = NeutronClient::with_config(NeutronClientConfig::from_endpoint(&config.endpoint)?)
        .context("Failed to create networking client")?;
    let service = RuleService::new(Arc::new(client));

    commands::rule::execute(cli.command, &service, cli.json).await
}

/// The `--json` error object: the full context chain and the error class.
///
/// `kind` comes from the innermost [`ClientError`] when there is one,
/// otherwise it is `"error"`.
pub fn error_output(err: &anyhow::Error) -> Value {
    let kind = err
        .downcast_ref::<ClientError>()
        .map_or("error", ClientError::kind);
    json!({
        "error": format!("{err:#}"),
        "kind": kind,
    })
}

/// Report an error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&error_output(&err)).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
