//! # Sort Policies
//!
//! Four named orders over a list of documents. All of them use a stable sort,
//! so documents with equal keys keep their relative input order.
//!
//! | name         | key                    | direction       |
//! |--------------|------------------------|-----------------|
//! | `date_desc`  | modification time      | newest first    |
//! | `date_asc`   | modification time      | oldest first    |
//! | `title`      | lowercased title       | A to Z          |
//! | `word_count` | word count             | longest first   |
//!
//! Policies apply within one category group at a time; see [`sort_groups`].

use crate::model::Document;
use crate::scanner::CategoryGroups;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    #[default]
    DateDesc,
    DateAsc,
    Title,
    WordCount,
}

impl SortPolicy {
    pub const ALL: [SortPolicy; 4] = [
        SortPolicy::DateDesc,
        SortPolicy::DateAsc,
        SortPolicy::Title,
        SortPolicy::WordCount,
    ];

    /// Looks up a policy by name. Unknown names fall back to `date_desc`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "date_asc" => SortPolicy::DateAsc,
            "title" => SortPolicy::Title,
            "word_count" => SortPolicy::WordCount,
            _ => SortPolicy::DateDesc,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortPolicy::DateDesc => "date_desc",
            SortPolicy::DateAsc => "date_asc",
            SortPolicy::Title => "title",
            SortPolicy::WordCount => "word_count",
        }
    }

    /// Short label for status lines.
    pub fn label(&self) -> &'static str {
        match self {
            SortPolicy::DateDesc => "Newest",
            SortPolicy::DateAsc => "Oldest",
            SortPolicy::Title => "Title",
            SortPolicy::WordCount => "Words",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortPolicy::DateDesc => "date (newest first)",
            SortPolicy::DateAsc => "date (oldest first)",
            SortPolicy::Title => "title (A-Z)",
            SortPolicy::WordCount => "word count (longest first)",
        }
    }

    pub fn apply(&self, documents: &mut [Document]) {
        match self {
            SortPolicy::DateDesc => {
                documents.sort_by(|a, b| b.metadata().modified.cmp(&a.metadata().modified))
            }
            SortPolicy::DateAsc => {
                documents.sort_by(|a, b| a.metadata().modified.cmp(&b.metadata().modified))
            }
            SortPolicy::Title => documents.sort_by_cached_key(|d| d.title().to_lowercase()),
            SortPolicy::WordCount => {
                documents.sort_by(|a, b| b.metadata().word_count.cmp(&a.metadata().word_count))
            }
        }
    }

    pub fn sorted(&self, mut documents: Vec<Document>) -> Vec<Document> {
        self.apply(&mut documents);
        documents
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortPolicy::from_name(s))
    }
}

/// Sorts every group in place. Documents never move between groups.
pub fn sort_groups(groups: &mut CategoryGroups, policy: SortPolicy) {
    for documents in groups.values_mut() {
        policy.apply(documents);
    }
}
