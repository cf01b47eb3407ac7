//! # Catalog Tree
//!
//! The browsable shape of a scan: category nodes in ascending name order, each
//! followed by its documents in sort order. Nodes are an explicit enum so
//! consumers match on [`TreeNode::Category`] / [`TreeNode::File`] instead of
//! probing what a node carries.
//!
//! Category grouping is exact (`Poetry` and `poetry` are two nodes) while the
//! icon lookup ignores case, so both of those nodes get the poetry icon.

use crate::index::DocSelector;
use crate::model::Document;
use crate::scanner::CategoryGroups;
use crate::sort::SortPolicy;
use chrono::Local;

pub const DEFAULT_ICON: &str = "📄";

#[derive(Debug, Clone)]
pub struct CategoryNode {
    pub name: String,
    pub count: usize,
}

impl CategoryNode {
    pub fn icon(&self) -> &'static str {
        category_icon(&self.name)
    }

    /// `"📝 Poetry (3 files)"`
    pub fn label(&self) -> String {
        format!("{} {} ({} files)", self.icon(), title_case(&self.name), self.count)
    }
}

#[derive(Debug, Clone)]
pub struct FileNode {
    /// 1-based position among all documents in the tree.
    pub index: usize,
    pub document: Document,
}

impl FileNode {
    /// Everything after the filename on a listing line:
    /// `" • Mar 01 • 120 words • ~1 min #nature"`
    pub fn detail(&self) -> String {
        let doc = &self.document;
        let mut detail = format!(
            " • {} • {} words • {}",
            short_date(doc),
            doc.metadata().word_count,
            reading_time_label(doc.metadata().reading_time)
        );
        for tag in doc.tags() {
            detail.push_str(&format!(" #{}", tag));
        }
        detail
    }
}

#[derive(Debug, Clone)]
pub enum TreeNode {
    Category(CategoryNode),
    File(FileNode),
}

#[derive(Debug, Clone, Default)]
pub struct CatalogTree {
    nodes: Vec<TreeNode>,
}

impl CatalogTree {
    /// Flattens already-sorted groups into display order.
    pub fn build(groups: &CategoryGroups) -> Self {
        let mut nodes = Vec::new();
        let mut index = 0;
        for (name, documents) in groups {
            nodes.push(TreeNode::Category(CategoryNode {
                name: name.clone(),
                count: documents.len(),
            }));
            for document in documents {
                index += 1;
                nodes.push(TreeNode::File(FileNode {
                    index,
                    document: document.clone(),
                }));
            }
        }
        Self { nodes }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.nodes.iter().filter_map(|node| match node {
            TreeNode::File(file) => Some(file),
            TreeNode::Category(_) => None,
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryNode> {
        self.nodes.iter().filter_map(|node| match node {
            TreeNode::Category(category) => Some(category),
            TreeNode::File(_) => None,
        })
    }

    pub fn get(&self, index: usize) -> Option<&FileNode> {
        self.files().find(|file| file.index == index)
    }

    /// Finds the first document matching `selector` in tree order. Names match
    /// a filename or title, ignoring case.
    pub fn resolve(&self, selector: &DocSelector) -> Option<&FileNode> {
        match selector {
            DocSelector::Index(index) => self.get(*index),
            DocSelector::Name(name) => {
                let wanted = name.to_lowercase();
                self.files().find(|file| {
                    file.document.filename().to_lowercase() == wanted
                        || file.document.title().to_lowercase() == wanted
                })
            }
        }
    }

    pub fn summary(&self, sort: SortPolicy) -> CatalogSummary {
        let mut summary = CatalogSummary {
            files: 0,
            categories: self.categories().count(),
            words: 0,
            reading_minutes: 0,
            sort,
        };
        for file in self.files() {
            summary.files += 1;
            summary.words += file.document.metadata().word_count;
            summary.reading_minutes += file.document.metadata().reading_time;
        }
        summary
    }
}

/// Totals shown under a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub files: usize,
    pub categories: usize,
    pub words: usize,
    pub reading_minutes: usize,
    pub sort: SortPolicy,
}

/// Icon for a category, ignoring case.
pub fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "poetry" => "📝",
        "essays" => "📚",
        "journal" => "✍️",
        "drafts" => "💭",
        "fiction" => "📖",
        _ => DEFAULT_ICON,
    }
}

/// Capitalizes the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn reading_time_label(minutes: usize) -> String {
    match minutes {
        0 => "<1 min".to_string(),
        n => format!("~{} min", n),
    }
}

fn short_date(doc: &Document) -> String {
    doc.metadata()
        .modified
        .with_timezone(&Local)
        .format("%b %d")
        .to_string()
}
