//! Content statistics and publish validation.
//!
//! These are the editor-facing counts shown next to a draft. They are
//! computed independently of the scorer: an empty draft has zero words here
//! even though the scorer floors its word count at one.
//!
//! Lengths are UTF-16 code units (see [`text::utf16_len`]), the same unit the
//! paragraph-structure bonus uses, and whitespace is the [`text::is_space`]
//! set. A character outside the Basic Multilingual Plane, such as an emoji,
//! counts as two.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// Default minimum length, in UTF-16 code units, of publishable content.
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 50;

/// Character and word counts for a piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentStats {
    /// Length of the raw input in UTF-16 code units.
    pub characters: usize,
    /// Whitespace-separated words in the trimmed input.
    pub words: usize,
}

/// Count characters and words the way an editor status bar does.
pub fn content_stats(text: &str) -> ContentStats {
    ContentStats {
        characters: text::utf16_len(text),
        words: text
            .split(text::is_space)
            .filter(|word| !word.is_empty())
            .count(),
    }
}

/// Check that content is long enough to publish.
///
/// Fails with [`AnalysisError::EmptyContent`] for blank input and
/// [`AnalysisError::ContentTooShort`] when the trimmed content is shorter than
/// `min_chars` UTF-16 code units.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn validate_content(text: &str, min_chars: usize) -> AnalysisResult<()> {
    let trimmed = text::trim_space(text);
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyContent);
    }

    let chars = text::utf16_len(trimmed);
    if chars < min_chars {
        tracing::debug!(chars, min_chars, "content below minimum length");
        return Err(AnalysisError::ContentTooShort {
            chars,
            min: min_chars,
        });
    }

    Ok(())
}
