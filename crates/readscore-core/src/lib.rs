//! Core library for readscore.
//!
//! Scores free-form prose on a 0–100 readability scale and maps scores to
//! display labels. Scoring is pure and stateless: every call is independent
//! and safe to run from any number of threads.
//!
//! # Modules
//!
//! - [`readability`] - Score composition and reports
//! - [`classify`] - Level, audience, badge and letter-grade lookups
//! - [`text`] - Normalization and tokenization
//! - [`syllables`] - Syllable estimation and complex-word classification
//! - [`content`] - Editor statistics and publish validation
//! - [`markup`] - Caller-side markdown/HTML stripping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{audience_for_score, compute_readability_score, level_for_score};
//!
//! let score = compute_readability_score("The cat sat. The dog ran. Birds fly high.");
//! assert!((0.0..=100.0).contains(&score));
//! println!("{score:.1} {} ({})", level_for_score(score), audience_for_score(score));
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod content;
pub mod error;
pub mod markup;
pub mod readability;
pub mod syllables;
pub mod text;

pub use classify::{
    Badge, LetterGrade, ReadabilityLevel, TargetAudience, audience_for_score, badge_for_score,
    letter_grade_for_score, level_for_score,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use content::{ContentStats, DEFAULT_MIN_CONTENT_CHARS, content_stats, validate_content};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{
    ReadabilityReport, ScoreBreakdown, TextMetrics, analyze_text, check_readability,
    compute_readability_score, score_breakdown,
};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
