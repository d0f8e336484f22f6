//! Caller-side markup stripping.
//!
//! The scorer treats markup as ordinary noise: tag names and link targets
//! count as words. Callers that want tag-free analysis run their input
//! through [`strip_markup`] first. Markdown is parsed with pulldown-cmark;
//! raw HTML (including whole HTML documents from a rich-text editor) has its
//! tags removed while keeping the text between them.
//!
//! Block boundaries are written out as blank lines so the paragraph-structure
//! sub-score still sees the document's paragraphs.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for a single HTML tag, capturing the tag name.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<\s*/?\s*([A-Za-z][A-Za-z0-9]*)?[^>]*>").expect("valid regex")
});

/// HTML elements whose boundaries end a paragraph.
const BLOCK_ELEMENTS: &[&str] = &[
    "p",
    "div",
    "br",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "ul",
    "ol",
    "blockquote",
    "pre",
    "section",
    "article",
    "header",
    "footer",
    "table",
    "tr",
];

const PARAGRAPH_BREAK: &str = "\n\n";

/// Strip markdown and HTML markup, returning prose with blank-line paragraph
/// breaks.
///
/// Removes code blocks, inline code, images, YAML frontmatter and HTML tags.
/// Keeps heading, paragraph, list, blockquote, table-cell and link text.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_markup(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::Html(html) | Event::InlineHtml(html) if skip_depth == 0 => {
                result.push_str(&strip_tags(&html));
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::BlockQuote(_)
                | TagEnd::TableRow
                | TagEnd::TableHead,
            ) if skip_depth == 0 => {
                push_paragraph_break(&mut result);
            }
            Event::End(TagEnd::TableCell) if skip_depth == 0 => {
                result.push(' ');
            }

            _ => {}
        }
    }

    result.trim().to_string()
}

/// Replace HTML tags with spaces, or with a paragraph break for block elements.
fn strip_tags(html: &str) -> String {
    HTML_TAG
        .replace_all(html, |caps: &Captures<'_>| {
            let is_block = caps.get(1).is_some_and(|name| {
                BLOCK_ELEMENTS
                    .iter()
                    .any(|block| name.as_str().eq_ignore_ascii_case(block))
            });
            if is_block { PARAGRAPH_BREAK } else { " " }
        })
        .into_owned()
}

fn push_paragraph_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with(PARAGRAPH_BREAK) {
        out.push_str(PARAGRAPH_BREAK);
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };

    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
