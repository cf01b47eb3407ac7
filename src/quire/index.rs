//! # Display Indexes
//!
//! Listings number every document `1..=n` in the order the catalog tree shows
//! them (categories by name, then each group in sort order). Those numbers are
//! what users type on the command line:
//!
//! - `3`: the third document in the tree
//! - `2-4`: documents 2, 3 and 4
//! - anything else: a filename or title, matched case-insensitively
//!
//! Indexes are only meaningful for the scan and sort they were produced from;
//! a rescan with another sort policy renumbers everything.

use std::fmt;
use std::str::FromStr;

/// A user input selecting documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSelector {
    Index(usize),
    Name(String),
}

impl fmt::Display for DocSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocSelector::Index(i) => write!(f, "{}", i),
            DocSelector::Name(n) => write!(f, "\"{}\"", n),
        }
    }
}

impl FromStr for DocSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DocSelector::Index(n)),
            Err(_) => Ok(DocSelector::Name(s.to_string())),
        }
    }
}

/// Parses one argument that may be a single selector or an index range.
///
/// A range is two indexes joined by `-` with start <= end. Inputs that merely
/// contain a dash (`my-essay.md`) are treated as names.
pub fn parse_selector_or_range(s: &str) -> Result<Vec<DocSelector>, String> {
    if let Some((start, end)) = s.trim().split_once('-') {
        if let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) {
            if start == 0 {
                return Err("Indexes start at 1".to_string());
            }
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            return Ok((start..=end).map(DocSelector::Index).collect());
        }
    }
    s.parse::<DocSelector>().map(|sel| vec![sel])
}

/// Parses every argument, expanding ranges, in order.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DocSelector>, String> {
    let mut selectors = Vec::new();
    for input in inputs {
        selectors.extend(parse_selector_or_range(input.as_ref())?);
    }
    Ok(selectors)
}
