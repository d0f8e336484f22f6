//! Vowel-count syllable estimation and complex-word classification.
//!
//! The estimate counts every vowel letter rather than vowel groups, so
//! "beautiful" scores 5. Existing scores depend on this over-count; changing
//! it changes every score.

/// Words at or below this many characters count as one syllable.
const SHORT_WORD_LEN: usize = 3;

/// Minimum estimated syllables for a word to count as complex.
pub const COMPLEX_MIN_SYLLABLES: usize = 3;

/// Minimum character length for a word to count as complex.
pub const COMPLEX_MIN_LEN: usize = 7;

const fn is_vowel(ch: char) -> bool {
    matches!(
        ch.to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
    )
}

/// Estimate the syllable count of a single word.
///
/// - Three characters or fewer: 1.
/// - Otherwise the number of `a e i o u y` letters (either case),
///   minus one for a trailing lowercase `e`,
///   plus one if the word contains lowercase `le`.
/// - Never less than 1.
pub fn estimate_syllables(word: &str) -> usize {
    let len = word.chars().count();
    if len <= SHORT_WORD_LEN {
        return 1;
    }

    let mut syllables = word.chars().filter(|&c| is_vowel(c)).count();

    // Silent e
    if word.ends_with('e') {
        syllables = syllables.saturating_sub(1);
    }
    // -le endings ("table", "simple")
    if word.contains("le") && len > 2 {
        syllables += 1;
    }

    syllables.max(1)
}

/// Whether a word counts as complex.
///
/// Either condition alone qualifies: an estimate of three or more syllables,
/// or a length of seven or more characters.
pub fn is_complex_word(word: &str, syllables: usize) -> bool {
    syllables >= COMPLEX_MIN_SYLLABLES || word.chars().count() >= COMPLEX_MIN_LEN
}
