//! # Peek Preview
//!
//! Condensed view of a document body: blank lines are dropped, and long bodies
//! keep only their opening and closing lines with a count of what was cut.

use serde::Serialize;

pub const DEFAULT_PEEK_LINES: usize = 3;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PeekResult {
    pub opening_lines: String,
    pub truncated_count: Option<usize>,
    pub closing_lines: Option<String>,
}

/// Builds a preview keeping `lines` lines at each end.
///
/// A body with at most `2 * lines + 3` non-blank lines is shown whole, since
/// eliding fewer than four lines saves nothing.
pub fn format_as_peek(body: &str, lines: usize) -> PeekResult {
    let kept: Vec<&str> = body.lines().filter(|l| !l.trim().is_empty()).collect();
    let total = kept.len();

    if total <= lines * 2 + 3 {
        return PeekResult {
            opening_lines: kept.join("\n"),
            truncated_count: None,
            closing_lines: None,
        };
    }

    PeekResult {
        opening_lines: kept[..lines].join("\n"),
        truncated_count: Some(total - lines * 2),
        closing_lines: Some(kept[total - lines..].join("\n")),
    }
}
