use crate::error::{QuireError, Result};
use crate::sort::SortPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// Settings read from `config.json`. Every field is optional; unset fields
/// fall back to command-line flags or built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuireConfig {
    /// Directory to scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Whether to descend into subdirectories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    /// Sort policy name (date_desc, date_asc, title, word_count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Editor command, e.g. "nvim" or "code -w"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl QuireConfig {
    /// Platform default location, e.g. `~/.config/quire/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "quire", "quire")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Loads an explicitly named file, which must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            QuireError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| QuireError::Config(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// Loads from `path` if it exists, otherwise returns defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn sort_policy(&self) -> Option<SortPolicy> {
        self.sort.as_deref().map(SortPolicy::from_name)
    }
}

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub directory: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub sort: Option<SortPolicy>,
    pub editor: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: PathBuf,
    pub recursive: bool,
    pub sort: SortPolicy,
    pub editor: Option<String>,
}

impl Settings {
    /// Flag > config file > default. The default directory is `cwd`.
    pub fn resolve(config: &QuireConfig, overrides: Overrides, cwd: PathBuf) -> Self {
        Self {
            directory: overrides
                .directory
                .or_else(|| config.directory.clone())
                .unwrap_or(cwd),
            recursive: overrides.recursive.or(config.recursive).unwrap_or(true),
            sort: overrides
                .sort
                .or_else(|| config.sort_policy())
                .unwrap_or_default(),
            editor: overrides
                .editor
                .or_else(|| config.editor.clone())
                .filter(|e| !e.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_default_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = QuireConfig::load_or_default(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, QuireConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = QuireConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, QuireError::Config(_)));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            QuireConfig::load(&path),
            Err(QuireError::Config(_))
        ));
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);
        let config = QuireConfig {
            directory: Some(PathBuf::from("/writing")),
            recursive: Some(false),
            sort: Some("title".into()),
            editor: Some("nvim".into()),
        };
        config.save(&path).unwrap();

        let loaded = QuireConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.sort_policy(), Some(SortPolicy::Title));
    }

    #[test]
    fn partial_file_leaves_rest_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"sort": "word_count"}"#).unwrap();
        let config = QuireConfig::load(&path).unwrap();
        assert_eq!(config.sort_policy(), Some(SortPolicy::WordCount));
        assert!(config.directory.is_none());
        assert!(config.editor.is_none());
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::resolve(
            &QuireConfig::default(),
            Overrides::default(),
            PathBuf::from("/cwd"),
        );
        assert_eq!(settings.directory, PathBuf::from("/cwd"));
        assert!(settings.recursive);
        assert_eq!(settings.sort, SortPolicy::DateDesc);
        assert!(settings.editor.is_none());
    }

    #[test]
    fn flags_beat_config() {
        let config = QuireConfig {
            directory: Some(PathBuf::from("/from-config")),
            recursive: Some(false),
            sort: Some("title".into()),
            editor: Some("nano".into()),
        };
        let overrides = Overrides {
            directory: Some(PathBuf::from("/from-flag")),
            recursive: Some(true),
            sort: Some(SortPolicy::DateAsc),
            editor: Some("vim".into()),
        };
        let settings = Settings::resolve(&config, overrides, PathBuf::from("/cwd"));
        assert_eq!(settings.directory, PathBuf::from("/from-flag"));
        assert!(settings.recursive);
        assert_eq!(settings.sort, SortPolicy::DateAsc);
        assert_eq!(settings.editor.as_deref(), Some("vim"));
    }

    #[test]
    fn config_beats_defaults() {
        let config = QuireConfig {
            directory: Some(PathBuf::from("/from-config")),
            recursive: Some(false),
            sort: Some("bogus".into()),
            editor: Some("  ".into()),
        };
        let settings = Settings::resolve(&config, Overrides::default(), PathBuf::from("/cwd"));
        assert_eq!(settings.directory, PathBuf::from("/from-config"));
        assert!(!settings.recursive);
        assert_eq!(settings.sort, SortPolicy::DateDesc);
        assert!(settings.editor.is_none());
    }
}
