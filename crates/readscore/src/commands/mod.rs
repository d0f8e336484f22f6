//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod classify;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod validate;

/// Path argument that reads from stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// File extensions whose contents are stripped of markup by default.
const MARKUP_EXTENSIONS: &[&str] = &["md", "markdown", "html", "htm"];

/// Whether a path names a markdown or HTML file.
pub fn is_markup_file(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| MARKUP_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let stdin = std::io::stdin().lock();
    read_limited(stdin, max_bytes, "stdin")
}

/// Read all of `reader`, failing once it yields more than `max_bytes`.
///
/// The size check runs on raw bytes before UTF-8 decoding, so a limit that
/// falls inside a multi-byte character still reports the size error.
fn read_limited<R: Read>(
    mut reader: R,
    max_bytes: Option<usize>,
    source: &str,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            // Read one byte past the limit to detect oversized input.
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
            if bytes.len() > max {
                anyhow::bail!("input too large: {source} exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
        }
    }
    String::from_utf8(bytes).with_context(|| format!("{source} is not valid UTF-8"))
}
