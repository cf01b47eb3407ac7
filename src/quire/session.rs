//! # Browsing Session
//!
//! A [`Session`] holds everything one interactive run needs: where to scan,
//! how to sort, the result of the last scan, and which document is selected.
//!
//! Every scan is a fresh, complete pass. [`Session::refresh`] and
//! [`Session::set_sort`] both discard the previous groups and tree and re-read
//! the directory from disk; nothing is cached between scans. The selection
//! survives a rescan only if its path is still present, and it is re-pointed
//! at the reloaded document so display indexes stay consistent.

use crate::error::{QuireError, Result};
use crate::index::DocSelector;
use crate::model::Document;
use crate::scanner::{group_by_category, CategoryGroups, Scanner};
use crate::sort::{sort_groups, SortPolicy};
use crate::tree::{CatalogSummary, CatalogTree, FileNode};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Session {
    scanner: Scanner,
    sort: SortPolicy,
    groups: CategoryGroups,
    tree: CatalogTree,
    selected: Option<PathBuf>,
}

impl Session {
    /// Creates a session and performs the initial scan.
    pub fn open(root: impl Into<PathBuf>, recursive: bool, sort: SortPolicy) -> Result<Self> {
        let mut session = Self {
            scanner: Scanner::new(root, recursive),
            sort,
            groups: CategoryGroups::new(),
            tree: CatalogTree::default(),
            selected: None,
        };
        session.refresh()?;
        Ok(session)
    }

    pub fn root(&self) -> &Path {
        self.scanner.root()
    }

    pub fn recursive(&self) -> bool {
        self.scanner.recursive()
    }

    pub fn sort(&self) -> SortPolicy {
        self.sort
    }

    pub fn groups(&self) -> &CategoryGroups {
        &self.groups
    }

    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    pub fn summary(&self) -> CatalogSummary {
        self.tree.summary(self.sort)
    }

    /// Rescans the root and rebuilds the tree with the current policy.
    pub fn refresh(&mut self) -> Result<()> {
        let documents = self.scanner.scan()?;
        let mut groups = group_by_category(documents);
        sort_groups(&mut groups, self.sort);
        self.tree = CatalogTree::build(&groups);
        self.groups = groups;

        if let Some(path) = &self.selected {
            if !self.tree.files().any(|f| f.document.path() == path) {
                debug!(path = %path.display(), "selection no longer present");
                self.selected = None;
            }
        }
        Ok(())
    }

    /// Switches policy and rescans.
    pub fn set_sort(&mut self, sort: SortPolicy) -> Result<()> {
        self.sort = sort;
        self.refresh()
    }

    /// Looks up a document in the current tree.
    pub fn resolve(&self, selector: &DocSelector) -> Result<&FileNode> {
        self.tree
            .resolve(selector)
            .ok_or_else(|| QuireError::Api(format!("No document matches {}", selector)))
    }

    /// Resolves `selector` and remembers it as the current document.
    pub fn select(&mut self, selector: &DocSelector) -> Result<&FileNode> {
        let path = self.resolve(selector)?.document.path().to_path_buf();
        self.selected = Some(path);
        self.selected()
            .ok_or_else(|| QuireError::Api(format!("No document matches {}", selector)))
    }

    pub fn selected(&self) -> Option<&FileNode> {
        let path = self.selected.as_ref()?;
        self.tree.files().find(|f| f.document.path() == path)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.tree.files().map(|f| &f.document)
    }
}
