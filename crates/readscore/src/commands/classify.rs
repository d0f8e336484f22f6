//! Classify command — labels for a score computed elsewhere.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::classify::{self, Badge, LetterGrade, ReadabilityLevel, TargetAudience};

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Readability score (0-100).
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

/// Every label derived from a score.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Classification {
    /// Readability level.
    pub level: ReadabilityLevel,
    /// Target-audience grade.
    pub audience: TargetAudience,
    /// Editor badge.
    pub badge: Badge,
    /// Letter grade.
    pub letter_grade: LetterGrade,
}

impl Classification {
    /// Look up all labels for `score`.
    pub fn for_score(score: f64) -> Self {
        Self {
            level: classify::level_for_score(score),
            audience: classify::audience_for_score(score),
            badge: classify::badge_for_score(score),
            letter_grade: classify::letter_grade_for_score(score),
        }
    }
}

/// Print the level, audience, badge and letter grade for a score.
#[instrument(name = "cmd_classify", skip_all, fields(score = args.score))]
pub fn cmd_classify(args: ClassifyArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(score = args.score, "executing classify command");

    let classification = Classification::for_score(args.score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("{}: {}", "Level".dimmed(), classification.level);
        println!("{}: {}", "Audience".dimmed(), classification.audience);
        println!("{}: {}", "Badge".dimmed(), classification.badge);
        println!("{}: {}", "Grade".dimmed(), classification.letter_grade);
    }

    Ok(())
}
