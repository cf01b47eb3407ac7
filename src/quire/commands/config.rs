use crate::commands::{CmdMessage, CmdResult};
use crate::config::{QuireConfig, Settings};
use crate::error::{QuireError, Result};
use crate::sort::SortPolicy;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows effective settings, or edits the file at `config_path`.
pub fn run(
    settings: &Settings,
    config_path: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_settings(settings.clone())),
        ConfigAction::ShowKey(key) => {
            let value = setting_value(settings, &key)
                .ok_or_else(|| QuireError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let path = config_path.ok_or_else(|| {
                QuireError::Config("No config file location available".to_string())
            })?;
            let mut config = QuireConfig::load_or_default(path)?;
            set_value(&mut config, &key, &value).map_err(QuireError::Config)?;
            config.save(path)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {} in {}",
                key,
                value,
                path.display()
            )));
            Ok(result)
        }
    }
}

pub fn setting_value(settings: &Settings, key: &str) -> Option<String> {
    match key {
        "directory" => Some(settings.directory.display().to_string()),
        "recursive" => Some(settings.recursive.to_string()),
        "sort" => Some(settings.sort.name().to_string()),
        "editor" => Some(
            settings
                .editor
                .clone()
                .unwrap_or_else(|| "(auto)".to_string()),
        ),
        _ => None,
    }
}

fn set_value(config: &mut QuireConfig, key: &str, value: &str) -> std::result::Result<(), String> {
    match key {
        "directory" => config.directory = Some(value.into()),
        "recursive" => {
            let parsed = value
                .parse::<bool>()
                .map_err(|_| format!("recursive must be true or false, got {}", value))?;
            config.recursive = Some(parsed);
        }
        "sort" => {
            let known = value == "date" || SortPolicy::ALL.iter().any(|p| p.name() == value);
            if !known {
                return Err(format!("Unknown sort policy: {}", value));
            }
            config.sort = Some(value.to_string());
        }
        "editor" => config.editor = Some(value.to_string()),
        _ => return Err(format!("Unknown config key: {}", key)),
    }
    Ok(())
}
