use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QuireError>;
