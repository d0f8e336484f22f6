//! Display classifications derived from a readability score.
//!
//! Each lookup is a total function of the score alone. Bands are evaluated
//! top-down with inclusive lower bounds, so `90.0` is "Very Easy" and
//! `89.999` is "Easy". A NaN score matches no threshold and lands in the
//! lowest band.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lower bounds shared by [`ReadabilityLevel`] and [`TargetAudience`].
const LEVEL_THRESHOLDS: [f64; 6] = [90.0, 80.0, 70.0, 60.0, 50.0, 30.0];

/// Lower bounds shared by [`Badge`] and [`LetterGrade`].
const BADGE_THRESHOLDS: [f64; 3] = [80.0, 60.0, 40.0];

/// Index of the first band whose lower bound the score reaches.
fn band(score: f64, thresholds: &[f64]) -> usize {
    thresholds
        .iter()
        .position(|&min| score >= min)
        .unwrap_or(thresholds.len())
}

/// Readability level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// Score 90 and above.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Score 80 to 90.
    #[serde(rename = "Easy")]
    Easy,
    /// Score 70 to 80.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// Score 60 to 70.
    #[serde(rename = "Standard")]
    Standard,
    /// Score 50 to 60.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// Score 30 to 50.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Below 30.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    const BANDS: [Self; 7] = [
        Self::VeryEasy,
        Self::Easy,
        Self::FairlyEasy,
        Self::Standard,
        Self::FairlyDifficult,
        Self::Difficult,
        Self::VeryDifficult,
    ];

    /// Returns the display label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target-audience grade for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TargetAudience {
    /// Score 90 and above.
    #[serde(rename = "5th grade")]
    FifthGrade,
    /// Score 80 to 90.
    #[serde(rename = "6th grade")]
    SixthGrade,
    /// Score 70 to 80.
    #[serde(rename = "7th grade")]
    SeventhGrade,
    /// Score 60 to 70.
    #[serde(rename = "8th & 9th grade")]
    EighthNinthGrade,
    /// Score 50 to 60.
    #[serde(rename = "10th to 12th grade")]
    HighSchool,
    /// Score 30 to 50.
    #[serde(rename = "College level")]
    College,
    /// Below 30.
    #[serde(rename = "Graduate level")]
    Graduate,
}

impl TargetAudience {
    const BANDS: [Self; 7] = [
        Self::FifthGrade,
        Self::SixthGrade,
        Self::SeventhGrade,
        Self::EighthNinthGrade,
        Self::HighSchool,
        Self::College,
        Self::Graduate,
    ];

    /// Returns the display label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FifthGrade => "5th grade",
            Self::SixthGrade => "6th grade",
            Self::SeventhGrade => "7th grade",
            Self::EighthNinthGrade => "8th & 9th grade",
            Self::HighSchool => "10th to 12th grade",
            Self::College => "College level",
            Self::Graduate => "Graduate level",
        }
    }
}

impl std::fmt::Display for TargetAudience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse badge shown next to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Badge {
    /// Score 80 and above.
    Excellent,
    /// Score 60 to 80.
    Good,
    /// Score 40 to 60.
    Average,
    /// Below 40.
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Badge {
    const BANDS: [Self; 4] = [
        Self::Excellent,
        Self::Good,
        Self::Average,
        Self::NeedsImprovement,
    ];

    /// Returns the display label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade, on the same bands as [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LetterGrade {
    /// Score 80 and above.
    A,
    /// Score 60 to 80.
    B,
    /// Score 40 to 60.
    C,
    /// Below 40.
    D,
}

impl LetterGrade {
    const BANDS: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the grade letter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readability level for a score.
pub fn level_for_score(score: f64) -> ReadabilityLevel {
    ReadabilityLevel::BANDS[band(score, &LEVEL_THRESHOLDS)]
}

/// Target-audience grade for a score.
pub fn audience_for_score(score: f64) -> TargetAudience {
    TargetAudience::BANDS[band(score, &LEVEL_THRESHOLDS)]
}

/// Badge for a score.
pub fn badge_for_score(score: f64) -> Badge {
    Badge::BANDS[band(score, &BADGE_THRESHOLDS)]
}

/// Letter grade for a score.
pub fn letter_grade_for_score(score: f64) -> LetterGrade {
    LetterGrade::BANDS[band(score, &BADGE_THRESHOLDS)]
}
