//! # Directory Scanning
//!
//! [`Scanner::scan`] walks a root directory and loads one [`Document`] per file
//! whose name ends in [`DOCUMENT_EXTENSION`]. The suffix match is
//! case-sensitive and applied to the name as the filesystem reports it, so
//! hidden files such as `.draft.md` are included.
//!
//! Entries the walk cannot read (permission denied, broken symlinks, link
//! loops) are skipped. The only error surfaced to the caller is a missing or
//! non-directory root: an existing empty directory is a legitimate, empty
//! result.
//!
//! The order of the returned documents follows the walk and carries no meaning;
//! apply a [`crate::sort::SortPolicy`] before depending on it.

use crate::error::{QuireError, Result};
use crate::model::Document;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const DOCUMENT_EXTENSION: &str = ".md";

/// Documents grouped by category name, each group in discovery order.
pub type CategoryGroups = BTreeMap<String, Vec<Document>>;

#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    recursive: bool,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            root: root.into(),
            recursive,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Reads every matching file under the root.
    pub fn scan(&self) -> Result<Vec<Document>> {
        let root = resolve_root(&self.root)?;

        let mut walker = WalkDir::new(&root).follow_links(true).min_depth(1);
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let documents: Vec<Document> = walker
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| is_document(entry.path()))
            .map(|entry| Document::load(entry.into_path()))
            .collect();

        debug!(
            root = %root.display(),
            recursive = self.recursive,
            count = documents.len(),
            "scan complete"
        );
        Ok(documents)
    }
}

/// Groups documents by [`Document::category`] in a single pass. Category names
/// are compared exactly, so `Poetry` and `poetry` form separate groups.
pub fn group_by_category(documents: Vec<Document>) -> CategoryGroups {
    let mut groups = CategoryGroups::new();
    for document in documents {
        groups.entry(document.category()).or_default().push(document);
    }
    groups
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(root).map_err(|err| match err.kind() {
        ErrorKind::NotFound => QuireError::RootNotFound(root.to_path_buf()),
        _ => QuireError::Io(err),
    })?;
    if !resolved.is_dir() {
        return Err(QuireError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(resolved)
}

fn is_document(path: &Path) -> bool {
    let matches_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(DOCUMENT_EXTENSION))
        .unwrap_or(false);
    matches_name && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn names(documents: &[Document]) -> BTreeSet<String> {
        documents.iter().map(|d| d.filename().to_string()).collect()
    }

    #[test]
    fn non_recursive_only_sees_top_level() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.md", "top");
        write(dir.path(), "sub/b.md", "nested");

        let docs = Scanner::new(dir.path(), false).scan().unwrap();
        assert_eq!(names(&docs), BTreeSet::from(["a.md".to_string()]));
    }

    #[test]
    fn recursive_sees_every_depth() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.md", "top");
        write(dir.path(), "sub/b.md", "nested");
        write(dir.path(), "deep/nested/c.md", "deeper");

        let docs = Scanner::new(dir.path(), true).scan().unwrap();
        assert_eq!(
            names(&docs),
            BTreeSet::from(["a.md".to_string(), "b.md".to_string(), "c.md".to_string()])
        );
        let nested = docs.iter().find(|d| d.filename() == "c.md").unwrap();
        assert!(nested.path().ends_with("deep/nested/c.md"));
        assert!(nested.path().is_absolute());
    }

    #[test]
    fn recursive_is_superset_of_flat() {
        let dir = tempdir().unwrap();
        write(dir.path(), "one.md", "1");
        write(dir.path(), "two.md", "2");
        write(dir.path(), "x/three.md", "3");
        write(dir.path(), "x/y/four.md", "4");

        let flat: BTreeSet<PathBuf> = Scanner::new(dir.path(), false)
            .scan()
            .unwrap()
            .iter()
            .map(|d| d.path().to_path_buf())
            .collect();
        let deep: BTreeSet<PathBuf> = Scanner::new(dir.path(), true)
            .scan()
            .unwrap()
            .iter()
            .map(|d| d.path().to_path_buf())
            .collect();

        assert!(flat.is_subset(&deep));
        let extra: Vec<_> = deep.difference(&flat).collect();
        assert_eq!(extra.len(), 2);
        let root = fs::canonicalize(dir.path()).unwrap();
        for path in extra {
            assert!(path.parent().unwrap() != root);
        }
    }

    #[test]
    fn extension_filter_is_case_sensitive() {
        let dir = tempdir().unwrap();
        write(dir.path(), "keep.md", "");
        write(dir.path(), "SHOUT.MD", "");
        write(dir.path(), "notes.txt", "");
        write(dir.path(), "archive.md.bak", "");

        let docs = Scanner::new(dir.path(), true).scan().unwrap();
        assert_eq!(names(&docs), BTreeSet::from(["keep.md".to_string()]));
    }

    #[test]
    fn hidden_files_are_included() {
        let dir = tempdir().unwrap();
        write(dir.path(), ".hidden_file.md", "secret");
        write(dir.path(), "visible.md", "open");

        let docs = Scanner::new(dir.path(), false).scan().unwrap();
        assert!(names(&docs).contains(".hidden_file.md"));
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn directories_named_like_documents_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("folder.md")).unwrap();
        write(dir.path(), "folder.md/inner.md", "x");

        let flat = Scanner::new(dir.path(), false).scan().unwrap();
        assert!(flat.is_empty());
        let deep = Scanner::new(dir.path(), true).scan().unwrap();
        assert_eq!(names(&deep), BTreeSet::from(["inner.md".to_string()]));
    }

    #[test]
    fn empty_directory_is_empty_result() {
        let dir = tempdir().unwrap();
        let docs = Scanner::new(dir.path(), true).scan().unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Scanner::new(&missing, true).scan().unwrap_err();
        assert!(matches!(err, QuireError::RootNotFound(p) if p == missing));
    }

    #[test]
    fn file_root_is_an_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "file.md", "");
        let err = Scanner::new(dir.path().join("file.md"), true)
            .scan()
            .unwrap_err();
        assert!(matches!(err, QuireError::RootNotDirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlinks_are_skipped() {
        let dir = tempdir().unwrap();
        write(dir.path(), "real.md", "x");
        std::os::unix::fs::symlink(dir.path().join("missing.md"), dir.path().join("dangling.md"))
            .unwrap();

        let docs = Scanner::new(dir.path(), true).scan().unwrap();
        assert_eq!(names(&docs), BTreeSet::from(["real.md".to_string()]));
    }

    #[test]
    fn groups_by_category_in_discovery_order() {
        let dir = tempdir().unwrap();
        write(dir.path(), "p1.md", "---\ncategory: poetry\n---\n");
        write(dir.path(), "e1.md", "---\ncategory: essays\n---\n");
        write(dir.path(), "p2.md", "---\ncategory: poetry\n---\n");
        write(dir.path(), "loose.md", "no header");
        write(dir.path(), "cap.md", "---\ncategory: Poetry\n---\n");

        let docs = Scanner::new(dir.path(), false).scan().unwrap();
        let order: Vec<String> = docs
            .iter()
            .filter(|d| d.category() == "poetry")
            .map(|d| d.filename().to_string())
            .collect();

        let groups = group_by_category(docs);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups["essays"].len(), 1);
        assert_eq!(groups["Poetry"].len(), 1);
        assert_eq!(groups["uncategorized"][0].filename(), "loose.md");
        let grouped: Vec<String> = groups["poetry"]
            .iter()
            .map(|d| d.filename().to_string())
            .collect();
        assert_eq!(grouped, order);
    }
}
