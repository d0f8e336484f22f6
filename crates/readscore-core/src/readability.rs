//! Readability scoring on a 0–100 scale (higher = easier).
//!
//! The score blends a Flesch Reading Ease term with three heuristics:
//!
//! ```text
//! final = 0.6 * base + 0.2 * sentence_bonus + 0.1 * paragraph_bonus - 0.1 * complex_penalty
//! base  = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
//! ```
//!
//! and clamps the result to `[0, 100]`. Empty or whitespace-only input
//! scores 0. Every function here is pure; nothing is cached between calls.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{self, Badge, LetterGrade, ReadabilityLevel, TargetAudience};
use crate::content::{self, ContentStats};
use crate::markup;
use crate::syllables;
use crate::text;

const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

const BASE_WEIGHT: f64 = 0.6;
const SENTENCE_BONUS_WEIGHT: f64 = 0.2;
const PARAGRAPH_BONUS_WEIGHT: f64 = 0.1;
const COMPLEX_PENALTY_WEIGHT: f64 = 0.1;

/// Target average sentence length, in words.
pub const OPTIMAL_WORDS_PER_SENTENCE: f64 = 17.5;

/// Lowest possible score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest possible score.
pub const MAX_SCORE: f64 = 100.0;

/// Lexical statistics of a text.
///
/// `sentence_count` and `word_count` are never zero so the averages are
/// always defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Sentences, floored at 1.
    pub sentence_count: usize,
    /// Words, floored at 1.
    pub word_count: usize,
    /// Estimated syllables across all words.
    pub syllable_count: usize,
    /// Words with 3+ estimated syllables or 7+ characters.
    pub complex_word_count: usize,
    /// `word_count / sentence_count`.
    pub avg_words_per_sentence: f64,
    /// `syllable_count / word_count`.
    pub avg_syllables_per_word: f64,
}

/// The sub-scores combined into a readability score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Flesch Reading Ease term. Not clamped; may be negative or above 100.
    pub base: f64,
    /// Percentage of complex words (0–100, higher is worse).
    pub complex_penalty: f64,
    /// Sentence-length bonus: 100, 80, 60 or 40.
    pub sentence_bonus: f64,
    /// Paragraph-structure bonus: 100, 80 or 60.
    pub paragraph_bonus: f64,
    /// Paragraphs found in the raw input.
    pub paragraph_count: usize,
}

impl ScoreBreakdown {
    /// Weighted sum of the sub-scores, before clamping.
    ///
    /// Each product is rounded before it is summed, left to right, so scores
    /// on a band edge land in the same band as the editor's.
    #[allow(clippy::suboptimal_flops)]
    pub fn combined(&self) -> f64 {
        self.base * BASE_WEIGHT
            + self.sentence_bonus * SENTENCE_BONUS_WEIGHT
            + self.paragraph_bonus * PARAGRAPH_BONUS_WEIGHT
            - self.complex_penalty * COMPLEX_PENALTY_WEIGHT
    }

    /// The final score: [`combined`](Self::combined) clamped to `[0, 100]`.
    pub fn score(&self) -> f64 {
        self.combined().clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Everything a presentation layer shows for a piece of content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Readability score, 0–100.
    pub score: f64,
    /// Level label for the score.
    pub level: ReadabilityLevel,
    /// Target-audience grade for the score.
    pub audience: TargetAudience,
    /// Editor badge for the score.
    pub badge: Badge,
    /// Letter grade for the score.
    pub letter_grade: LetterGrade,
    /// Lexical statistics (absent for blank input).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TextMetrics>,
    /// Sub-scores (absent for blank input).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    /// Character and word counts of the analyzed text.
    pub stats: ContentStats,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score is below the minimum.
    pub below_min: bool,
}

/// Compute the readability score of `text`, in `[0, 100]`.
///
/// Returns 0 for empty or whitespace-only input. Markup is not stripped.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_readability_score(text: &str) -> f64 {
    score_breakdown(text).map_or(MIN_SCORE, |b| b.score())
}

/// Compute the sub-scores for `text`.
///
/// Returns `None` for empty or whitespace-only input, which scores 0.
pub fn score_breakdown(text: &str) -> Option<ScoreBreakdown> {
    analyze(text).map(|(_, breakdown)| breakdown)
}

fn analyze(text: &str) -> Option<(TextMetrics, ScoreBreakdown)> {
    if text::is_blank(text) {
        return None;
    }

    let metrics = analyze_text(text);
    let paragraph_count = text::split_paragraphs(text).len();

    let breakdown = ScoreBreakdown {
        base: base_readability(&metrics),
        complex_penalty: complex_word_penalty(&metrics),
        sentence_bonus: sentence_length_bonus(metrics.avg_words_per_sentence),
        paragraph_bonus: paragraph_bonus_for(paragraph_count, text::utf16_len(text)),
        paragraph_count,
    };
    Some((metrics, breakdown))
}

/// Derive lexical statistics from raw text.
///
/// The text is normalized first; see [`text::normalize`].
pub fn analyze_text(raw: &str) -> TextMetrics {
    let normalized = text::normalize(raw);
    let sentence_count = text::count_sentences(&normalized);

    let mut word_count = 0;
    let mut syllable_count = 0;
    let mut complex_word_count = 0;
    for word in text::words(&normalized) {
        let syllables = syllables::estimate_syllables(word);
        word_count += 1;
        syllable_count += syllables;
        if syllables::is_complex_word(word, syllables) {
            complex_word_count += 1;
        }
    }
    let word_count = word_count.max(1);

    TextMetrics {
        sentence_count,
        word_count,
        syllable_count,
        complex_word_count,
        avg_words_per_sentence: word_count as f64 / sentence_count as f64,
        avg_syllables_per_word: syllable_count as f64 / word_count as f64,
    }
}

/// Flesch Reading Ease term. Unclamped.
#[allow(clippy::suboptimal_flops)]
pub fn base_readability(metrics: &TextMetrics) -> f64 {
    FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * metrics.avg_words_per_sentence
        - FLESCH_SYLLABLE_WEIGHT * metrics.avg_syllables_per_word
}

/// Percentage of complex words, 0–100.
pub fn complex_word_penalty(metrics: &TextMetrics) -> f64 {
    metrics.complex_word_count as f64 / metrics.word_count as f64 * 100.0
}

/// Step bonus for how close the average sentence length is to
/// [`OPTIMAL_WORDS_PER_SENTENCE`].
pub fn sentence_length_bonus(avg_words_per_sentence: f64) -> f64 {
    let deviation = (avg_words_per_sentence - OPTIMAL_WORDS_PER_SENTENCE).abs();
    if deviation <= 2.5 {
        100.0
    } else if deviation <= 5.0 {
        80.0
    } else if deviation <= 10.0 {
        60.0
    } else {
        40.0
    }
}

/// Bonus for paragraph structure of the raw (unnormalized) input.
///
/// A single block gets 60. Otherwise the average paragraph length is the
/// *whole* input length divided by the paragraph count, so separator
/// whitespace and markup count toward it.
pub fn paragraph_structure_bonus(raw: &str) -> f64 {
    paragraph_bonus_for(text::split_paragraphs(raw).len(), text::utf16_len(raw))
}

fn paragraph_bonus_for(paragraph_count: usize, input_len: usize) -> f64 {
    if paragraph_count <= 1 {
        return 60.0;
    }

    let avg_paragraph_len = input_len as f64 / paragraph_count as f64;
    if (50.0..=150.0).contains(&avg_paragraph_len) {
        100.0
    } else if (30.0..=200.0).contains(&avg_paragraph_len) {
        80.0
    } else {
        60.0
    }
}

/// Score and classify text for display.
///
/// # Arguments
///
/// * `text` — The text to analyze.
/// * `strip_markup` — If `true`, strip markdown/HTML before scoring.
/// * `min_score` — Optional minimum acceptable score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    strip_markup: bool,
    min_score: Option<f64>,
) -> ReadabilityReport {
    let prose = if strip_markup {
        markup::strip_markup(text)
    } else {
        text.to_string()
    };

    let analysis = analyze(&prose);
    let score = analysis.map_or(MIN_SCORE, |(_, b)| b.score());
    let below_min = min_score.is_some_and(|min| score < min);

    tracing::debug!(score, below_min, "readability scored");

    ReadabilityReport {
        score,
        level: classify::level_for_score(score),
        audience: classify::audience_for_score(score),
        badge: classify::badge_for_score(score),
        letter_grade: classify::letter_grade_for_score(score),
        metrics: analysis.map(|(m, _)| m),
        breakdown: analysis.map(|(_, b)| b),
        stats: content::content_stats(&prose),
        min_score,
        below_min,
    }
}
