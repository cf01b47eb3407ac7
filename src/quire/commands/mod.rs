use crate::config::{QuireConfig, Settings};
use crate::model::DocumentRecord;
use crate::tree::{CatalogSummary, CatalogTree, FileNode};
use std::path::PathBuf;

pub mod config;
pub mod export;
pub mod helpers;
pub mod list;
pub mod open;
pub mod paths;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced. Commands never print; the caller renders this.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub tree: Option<CatalogTree>,
    pub summary: Option<CatalogSummary>,
    pub listed: Vec<FileNode>,
    pub paths: Vec<PathBuf>,
    pub records: Vec<DocumentRecord>,
    pub export_json: Option<String>,
    pub settings: Option<Settings>,
    pub config: Option<QuireConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_tree(mut self, tree: CatalogTree, summary: CatalogSummary) -> Self {
        self.tree = Some(tree);
        self.summary = Some(summary);
        self
    }

    pub fn with_listed(mut self, listed: Vec<FileNode>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_records(mut self, records: Vec<DocumentRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_config(mut self, config: QuireConfig) -> Self {
        self.config = Some(config);
        self
    }
}
