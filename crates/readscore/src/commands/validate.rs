//! Validate command — publish checks on draft content.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::config::Config;
use readscore_core::content::{self, ContentStats};

use super::read_input;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File to validate (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Minimum content length in characters (after trimming).
    #[arg(long)]
    pub min_chars: Option<usize>,
}

/// Outcome of a publish check, as reported by `--json` and the MCP server.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the content may be published.
    pub valid: bool,
    /// Why the content was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Minimum trimmed length that was applied.
    pub min_chars: usize,
    /// Character and word counts.
    pub stats: ContentStats,
}

impl ValidationReport {
    /// Validate `text` against `min_chars` and collect its statistics.
    pub fn check(text: &str, min_chars: usize) -> Self {
        let result = content::validate_content(text, min_chars);
        Self {
            valid: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
            min_chars,
            stats: content::content_stats(text),
        }
    }
}

/// Check that content is non-empty and long enough to publish.
#[instrument(name = "cmd_validate", skip_all, fields(file = %args.file))]
pub fn cmd_validate(args: ValidateArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, min_chars = ?args.min_chars, "executing validate command");

    let text = read_input(&args.file, config.input_limit())?;
    let min_chars = args.min_chars.unwrap_or_else(|| config.min_content_chars());

    if global_json {
        let report = ValidationReport::check(&text, min_chars);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = content::content_stats(&text);
    content::validate_content(&text, min_chars)
        .with_context(|| format!("{} failed validation", args.file))?;
    println!(
        "{} {} ({} characters, {} words)",
        "PASS:".green(),
        args.file,
        stats.characters,
        stats.words
    );

    Ok(())
}
