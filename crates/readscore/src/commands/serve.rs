//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{debug, info, instrument};

use readscore_core::config::Config;

use crate::server::ReadscoreServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; tool defaults come from config
}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so all diagnostics go through `tracing`
/// (stderr or the log file).
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    debug!(
        min_score = ?config.min_score,
        input_limit = ?config.input_limit(),
        "starting MCP server"
    );

    let service = ReadscoreServer::new(config)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    info!("MCP server ready on stdio");

    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");

    Ok(())
}
