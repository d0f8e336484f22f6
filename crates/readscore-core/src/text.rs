//! Text normalization and tokenization.
//!
//! The scorer works on a normalized copy of the input: anything that is not
//! an ASCII word character, whitespace, or a sentence terminator becomes a
//! space, whitespace runs collapse, and the result is trimmed. Sentence and
//! word counts are derived from that copy. Paragraphs are split from the
//! *raw* input so blank lines survive.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for paragraph boundaries: a newline, optional whitespace, a newline.
///
/// "Whitespace" is the [`is_space`] set: `\s` plus the byte-order mark,
/// minus NEL.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[[\s\x{FEFF}]--\x{85}]*\n").expect("valid regex"));

/// Byte-order mark. Editors and browsers treat it as whitespace.
const BYTE_ORDER_MARK: char = '\u{feff}';
/// Next-line control. Unicode white space, but not whitespace to browsers.
const NEXT_LINE: char = '\u{85}';

/// Whether `ch` is whitespace as browsers and rich-text editors see it.
///
/// This is Unicode white space plus U+FEFF, minus U+0085. Blank-input
/// checks, trimming and content statistics all use this set, so a file that
/// holds only a byte-order mark counts as empty.
pub fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != NEXT_LINE) || ch == BYTE_ORDER_MARK
}

/// Trim [`is_space`] characters from both ends.
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Whether `text` holds nothing but [`is_space`] characters.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Length in UTF-16 code units, the unit editors report.
///
/// Every length the crate reports or compares against (paragraph sizes,
/// content statistics, publish minimums) uses this unit.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_kept(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || is_sentence_terminator(ch)
}

/// Normalize raw text for tokenization.
///
/// Every character outside `[A-Za-z0-9_]`, whitespace, `.`, `!` and `?` is
/// replaced by a space, whitespace runs collapse to a single space, and the
/// result is trimmed. Markup is not treated specially: `<p>` becomes ` p `.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if is_kept(ch) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Whitespace and replaced characters both act as separators.
            pending_space = true;
        }
    }

    out
}

/// Count sentences in normalized text.
///
/// Splits on runs of `.`, `!` and `?` and ignores fragments that are blank.
/// Text without any terminator is still one sentence, so the result is never
/// zero.
pub fn count_sentences(normalized: &str) -> usize {
    normalized
        .split(is_sentence_terminator)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
        .max(1)
}

/// Iterate the words of normalized text.
///
/// Words are whitespace-separated and keep any attached terminator, so
/// `"sat."` is one four-character word.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Split raw text into paragraphs separated by blank lines.
///
/// Lines containing only whitespace (see [`is_space`]) count as blank.
/// Fragments that are empty after trimming are dropped.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !is_blank(p))
        .collect()
}
