use crate::error::{QuireError, Result};
use std::env;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Tried in order when neither an override nor `$EDITOR`/`$VISUAL` is set.
pub const FALLBACK_EDITORS: [&str; 5] = ["micro", "nano", "vim", "vi", "code"];

/// Used when nothing else resolves.
pub const LAST_RESORT_EDITOR: &str = "nano";

/// Picks the editor command: override, then `$EDITOR`, then `$VISUAL`, then
/// the first fallback found on `PATH`.
pub fn resolve_editor(override_cmd: Option<&str>) -> String {
    resolve_editor_with(override_cmd, |key| env::var(key).ok(), is_on_path)
}

/// [`resolve_editor`] with the environment and `PATH` probe supplied.
pub fn resolve_editor_with<E, P>(override_cmd: Option<&str>, env_var: E, on_path: P) -> String
where
    E: Fn(&str) -> Option<String>,
    P: Fn(&str) -> bool,
{
    if let Some(cmd) = override_cmd.filter(|c| !c.trim().is_empty()) {
        return cmd.to_string();
    }
    for key in ["EDITOR", "VISUAL"] {
        if let Some(value) = env_var(key).filter(|v| !v.trim().is_empty()) {
            return value;
        }
    }
    FALLBACK_EDITORS
        .iter()
        .find(|candidate| on_path(**candidate))
        .unwrap_or(&LAST_RESORT_EDITOR)
        .to_string()
}

/// Splits `"code -w"` into `("code", ["-w"])`.
pub fn split_command(cmd: &str) -> Result<(String, Vec<String>)> {
    let mut parts = cmd.split_whitespace().map(str::to_string);
    let program = parts
        .next()
        .ok_or_else(|| QuireError::Editor("Empty editor command".to_string()))?;
    Ok((program, parts.collect()))
}

/// Opens `path` in `editor` and blocks until it exits.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let (program, args) = split_command(editor)?;
    debug!(editor = %editor, path = %path.display(), "launching editor");

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| QuireError::Editor(format!("Failed to launch '{}': {}", program, e)))?;

    if !status.success() {
        return Err(QuireError::Editor(format!(
            "'{}' exited with {}",
            editor, status
        )));
    }
    Ok(())
}

fn is_on_path(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
