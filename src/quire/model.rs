use crate::header::{self, Header, HeaderValue, Scalar};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const UNCATEGORIZED: &str = "uncategorized";
pub const WORDS_PER_MINUTE: usize = 200;

/// Filesystem and text statistics, computed once when a document is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub word_count: usize,
    pub char_count: usize,
    pub line_count: usize,
    pub reading_time: usize,
}

impl DocumentMetadata {
    /// Statistics for `body` with the given timestamps.
    pub fn from_body(body: &str, created: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        let word_count = body.split_whitespace().count();
        Self {
            created,
            modified,
            word_count,
            char_count: body.chars().count(),
            line_count: body.lines().count(),
            reading_time: reading_time(word_count),
        }
    }

    /// Used when the file cannot be stat'ed.
    pub fn placeholder() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
            word_count: 0,
            char_count: 0,
            line_count: 0,
            reading_time: 1,
        }
    }
}

/// Whole minutes at [`WORDS_PER_MINUTE`], never less than one.
pub fn reading_time(word_count: usize) -> usize {
    (word_count / WORDS_PER_MINUTE).max(1)
}

/// One scanned file: its header, body and derived metadata.
///
/// Loading never fails. Unreadable files become empty documents, malformed
/// headers are dropped and stat failures produce placeholder metadata.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    filename: String,
    header: Header,
    body: String,
    metadata: DocumentMetadata,
}

impl Document {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let (header, body) = match fs::read_to_string(&path) {
            Ok(raw) => {
                let (header, body, problem) = header::parse_with_diagnostics(&raw);
                if let Some(err) = problem {
                    warn!(path = %path.display(), error = %err, "ignoring malformed header");
                }
                (header, body)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read document");
                (Header::default(), String::new())
            }
        };

        let metadata = match fs::metadata(&path) {
            Ok(meta) => {
                let stamp = |time: std::io::Result<std::time::SystemTime>| {
                    time.map(DateTime::<Utc>::from).unwrap_or_else(|_| Utc::now())
                };
                let modified = stamp(meta.modified());
                let created = stamp(meta.created());
                DocumentMetadata::from_body(&body, created, modified)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not stat document");
                DocumentMetadata::placeholder()
            }
        };

        Self::from_parts(path, header, body, metadata)
    }

    /// Builds a document from already-parsed parts, without touching disk.
    pub fn from_parts(
        path: PathBuf,
        header: Header,
        body: String,
        metadata: DocumentMetadata,
    ) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            filename,
            header,
            body,
            metadata,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// The `category` header value, or [`UNCATEGORIZED`] when it is missing or
    /// blank. Case is kept as written.
    pub fn category(&self) -> String {
        self.header_text("category")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string())
    }

    /// The `title` header value, even when empty, or the filename without its
    /// extension when there is none.
    pub fn title(&self) -> String {
        self.header_text("title").unwrap_or_else(|| {
            self.path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.filename.clone())
        })
    }

    pub fn tags(&self) -> Vec<String> {
        normalize_tags(self.header.get("tags"))
    }

    pub fn to_record(&self) -> DocumentRecord {
        DocumentRecord {
            path: self.path.to_string_lossy().into_owned(),
            filename: self.filename.clone(),
            title: self.title(),
            category: self.category(),
            tags: self.tags(),
            created: self.metadata.created,
            modified: self.metadata.modified,
            word_count: self.metadata.word_count,
            char_count: self.metadata.char_count,
            line_count: self.metadata.line_count,
            reading_time: self.metadata.reading_time,
        }
    }

    fn header_text(&self, key: &str) -> Option<String> {
        self.header.get(key).and_then(HeaderValue::as_text)
    }
}

/// Flattens the accepted `tags` shapes into trimmed, non-empty strings.
///
/// - a list: each element as text
/// - a string with line breaks: one tag per line, `- ` markers stripped
/// - any other string: a single tag
///
/// Order and duplicates are preserved; anything else yields no tags.
pub fn normalize_tags(value: Option<&HeaderValue>) -> Vec<String> {
    match value {
        Some(HeaderValue::List(items)) => items
            .iter()
            .map(|item| item.to_string().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
        Some(HeaderValue::Scalar(Scalar::Str(s))) if s.contains('\n') => s
            .lines()
            .map(|line| {
                let line = line.trim();
                line.strip_prefix("- ").unwrap_or(line).to_string()
            })
            .filter(|tag| !tag.is_empty())
            .collect(),
        Some(HeaderValue::Scalar(Scalar::Str(s))) => {
            let tag = s.trim();
            if tag.is_empty() {
                Vec::new()
            } else {
                vec![tag.to_string()]
            }
        }
        _ => Vec::new(),
    }
}

/// Flat, transport-neutral snapshot of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub path: String,
    pub filename: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub word_count: usize,
    pub char_count: usize,
    pub line_count: usize,
    pub reading_time: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn doc_from(raw: &str, name: &str) -> Document {
        let (header, body) = header::parse(raw);
        let now = Utc::now();
        let metadata = DocumentMetadata::from_body(&body, now, now);
        Document::from_parts(PathBuf::from("/notes").join(name), header, body, metadata)
    }

    #[test]
    fn loads_header_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sonnet.md");
        fs::write(
            &path,
            "---\ncategory: poetry\ntitle: \"Spring Sonnet\"\ntags: [nature, spring]\n---\n\
             The buds unfold beneath a gentle rain and every branch remembers green again.\n",
        )
        .unwrap();

        let doc = Document::load(&path);
        assert_eq!(doc.category(), "poetry");
        assert_eq!(doc.title(), "Spring Sonnet");
        assert_eq!(doc.tags(), vec!["nature", "spring"]);
        assert_eq!(doc.metadata().word_count, 13);
        assert_eq!(doc.metadata().reading_time, 1);
        assert_eq!(doc.filename(), "sonnet.md");
        assert_eq!(doc.path(), path.as_path());
    }

    #[test]
    fn defaults_without_header() {
        let doc = doc_from("Just a plain markdown file.", "plain.md");
        assert_eq!(doc.category(), "uncategorized");
        assert_eq!(doc.title(), "plain");
        assert!(doc.tags().is_empty());
        assert_eq!(doc.metadata().word_count, 5);
    }

    #[test]
    fn empty_file_gets_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        let doc = Document::load(&path);
        assert_eq!(doc.body(), "");
        assert_eq!(doc.metadata().word_count, 0);
        assert_eq!(doc.metadata().char_count, 0);
        assert_eq!(doc.metadata().line_count, 0);
        assert_eq!(doc.metadata().reading_time, 1);
        assert_eq!(doc.category(), "uncategorized");
        assert_eq!(doc.title(), "empty");
    }

    #[test]
    fn unreadable_file_is_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let doc = Document::load(&path);
        assert_eq!(doc.body(), "");
        assert!(doc.header().is_empty());
        assert_eq!(doc.metadata().word_count, 0);
    }

    #[test]
    fn missing_file_gets_placeholder_metadata() {
        let dir = tempdir().unwrap();
        let doc = Document::load(dir.path().join("gone.md"));
        assert_eq!(doc.metadata().word_count, 0);
        assert_eq!(doc.metadata().reading_time, 1);
        assert_eq!(doc.title(), "gone");
    }

    #[test]
    fn blank_category_falls_back_but_blank_title_is_kept() {
        let doc = doc_from("---\ncategory: \"  \"\ntitle: \"\"\n---\nx", "blank.md");
        assert_eq!(doc.category(), "uncategorized");
        assert_eq!(doc.title(), "");

        let doc = doc_from("---\ntitle: ~\n---\nx", "null.md");
        assert_eq!(doc.title(), "null");
        let doc = doc_from("---\ntitle: [a, b]\n---\nx", "listed.md");
        assert_eq!(doc.title(), "listed");
    }

    #[test]
    fn repeated_category_keeps_the_last() {
        let doc = doc_from(
            "---\ntitle: Draft\ncategory: poetry\ncategory: essays\n---\nbody text",
            "dup.md",
        );
        assert_eq!(doc.category(), "essays");
        assert_eq!(doc.title(), "Draft");
        assert_eq!(doc.body(), "body text");
        assert_eq!(doc.metadata().word_count, 2);
    }

    #[test]
    fn category_case_is_preserved() {
        let doc = doc_from("---\ncategory: Poetry\n---\n", "a.md");
        assert_eq!(doc.category(), "Poetry");
    }

    #[test]
    fn numeric_header_values_become_text() {
        let doc = doc_from("---\ncategory: 2024\ntitle: 42\n---\n", "n.md");
        assert_eq!(doc.category(), "2024");
        assert_eq!(doc.title(), "42");
    }

    #[test]
    fn list_category_is_not_a_category() {
        let doc = doc_from("---\ncategory: [a, b]\n---\n", "l.md");
        assert_eq!(doc.category(), "uncategorized");
    }

    #[test]
    fn title_keeps_inner_quotes() {
        let doc = doc_from("---\ntitle: \"Poem with 'quotes' in title\"\n---\n", "q.md");
        assert_eq!(doc.title(), "Poem with 'quotes' in title");
    }

    #[test]
    fn hidden_file_stem() {
        let doc = doc_from("", ".hidden_file.md");
        assert_eq!(doc.title(), ".hidden_file");
    }

    #[test]
    fn tag_formats_agree() {
        let list = doc_from("---\ntags: [a, b]\n---\n", "x.md").tags();
        let lines = doc_from("---\ntags: \"- a\\n- b\"\n---\n", "y.md").tags();
        assert_eq!(list, vec!["a", "b"]);
        assert_eq!(lines, list);
    }

    #[test]
    fn block_list_tags() {
        let doc = doc_from(
            "---\ntags:\n  - first\n  - \"  padded  \"\n  - \"\"\n  - first\n---\n",
            "t.md",
        );
        assert_eq!(doc.tags(), vec!["first", "padded", "first"]);
    }

    #[test]
    fn pipe_block_tags() {
        let doc = doc_from(
            "---\ntags: |\n  first tag\n  second tag\n\n  third tag\n---\n",
            "p.md",
        );
        assert_eq!(doc.tags(), vec!["first tag", "second tag", "third tag"]);
    }

    #[test]
    fn single_string_tag() {
        let doc = doc_from("---\ntags: \"  solo  \"\n---\n", "s.md");
        assert_eq!(doc.tags(), vec!["solo"]);
    }

    #[test]
    fn scalar_list_elements_are_stringified() {
        let doc = doc_from("---\ntags: [1, true, 2.5, ~]\n---\n", "m.md");
        assert_eq!(doc.tags(), vec!["1", "true", "2.5"]);

        // YAML 1.2 scalars: `True` is a boolean, `yes` stays a string.
        let doc = doc_from("---\ntags: [True, ~, yes]\n---\n", "y.md");
        assert_eq!(doc.tags(), vec!["true", "yes"]);
    }

    #[test]
    fn other_tag_shapes_are_ignored() {
        assert!(doc_from("---\ntags: 7\n---\n", "a.md").tags().is_empty());
        assert!(doc_from("---\ntags:\n  k: v\n---\n", "b.md").tags().is_empty());
        assert!(normalize_tags(None).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = doc_from("---\ntags: [\" a \", b]\n---\n", "i.md").tags();
        let again = normalize_tags(Some(&HeaderValue::List(
            once.iter().cloned().map(Scalar::Str).collect(),
        )));
        assert_eq!(once, again);
    }

    #[test]
    fn reading_time_floor() {
        assert_eq!(reading_time(0), 1);
        assert_eq!(reading_time(199), 1);
        assert_eq!(reading_time(200), 1);
        assert_eq!(reading_time(399), 1);
        assert_eq!(reading_time(400), 2);
        assert_eq!(reading_time(1000), 5);
    }

    #[test]
    fn counts_lines_and_chars() {
        let doc = doc_from("first line\nsecond 🌟\n\nlast", "c.md");
        assert_eq!(doc.metadata().line_count, 4);
        assert_eq!(doc.metadata().char_count, "first line\nsecond 🌟\n\nlast".chars().count());
        assert_eq!(doc.metadata().word_count, 5);
    }

    #[test]
    fn record_mirrors_accessors() {
        let doc = doc_from("---\ncategory: essays\ntags: x\n---\none two", "r.md");
        let record = doc.to_record();
        assert_eq!(record.filename, "r.md");
        assert_eq!(record.title, "r");
        assert_eq!(record.category, "essays");
        assert_eq!(record.tags, vec!["x"]);
        assert_eq!(record.word_count, 2);
        assert_eq!(record.reading_time, 1);
        assert!(record.path.ends_with("r.md"));
    }
}
