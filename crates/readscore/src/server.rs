//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes readability scoring over the MCP protocol so AI assistants and
//! editors can score drafts via stdio transport.
//!
//! The server is a presentation layer. Each `#[tool]` method delegates to the
//! same core functions the CLI commands use.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use readscore_core::config::Config;
use readscore_core::readability;

use crate::commands::classify::Classification;
use crate::commands::validate::ValidationReport;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreTextParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown/HTML before scoring.
    pub strip_markup: Option<bool>,
    /// Minimum acceptable score (0-100).
    pub min_score: Option<f64>,
}

/// Parameters for the `classify_score` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyScoreParams {
    /// Readability score to classify.
    pub score: f64,
}

/// Parameters for the `validate_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ValidateContentParams {
    /// The draft content to check.
    pub text: String,
    /// Minimum content length in characters (after trimming).
    pub min_chars: Option<usize>,
}

/// MCP server exposing readability scoring to AI assistants.
#[derive(Clone)]
pub struct ReadscoreServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    config: Config,
}

impl Default for ReadscoreServer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ReadscoreServer {
    fn check_input_size(&self, text: &str) -> Result<(), McpError> {
        match self.config.input_limit() {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }
}

#[tool_router]
impl ReadscoreServer {
    /// Create a server whose tool defaults come from `config`.
    pub fn new(config: Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score readability on a 0-100 scale.
    #[tool(
        description = "Score readability of text on a 0-100 scale (higher is easier). Returns the score, level, target audience, badge, letter grade, and statistics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_text(
        &self,
        Parameters(params): Parameters<ScoreTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let strip_markup = params.strip_markup.unwrap_or(self.config.strip_markup);
        tracing::debug!(tool = "score_text", strip_markup, "executing MCP tool");

        self.check_input_size(&params.text)?;
        let min_score = params.min_score.or(self.config.min_score);
        let report = readability::check_readability(&params.text, strip_markup, min_score);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "score_text", score = report.score, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Map a score to its labels.
    #[tool(
        description = "Classify a readability score. Returns the level, target audience, badge, and letter grade."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", score = params.score))]
    fn classify_score(
        &self,
        Parameters(params): Parameters<ClassifyScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_score", score = params.score, "executing MCP tool");

        let classification = Classification::for_score(params.score);
        let json = serde_json::to_string_pretty(&classification)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "classify_score", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Run the publish check on draft content.
    #[tool(
        description = "Check that draft content is non-empty and long enough to publish. Returns validity, the failure reason, and character/word counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn validate_content(
        &self,
        Parameters(params): Parameters<ValidateContentParams>,
    ) -> Result<CallToolResult, McpError> {
        let min_chars = params
            .min_chars
            .unwrap_or_else(|| self.config.min_content_chars());
        tracing::debug!(tool = "validate_content", min_chars, "executing MCP tool");

        self.check_input_size(&params.text)?;
        let report = ValidationReport::check(&params.text, min_chars);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "validate_content",
            valid = report.valid,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ReadscoreServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use score_text to rate how easy a draft is to read, \
                 classify_score to label a score, and validate_content before publishing.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
