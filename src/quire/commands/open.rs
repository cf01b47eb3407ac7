use crate::commands::{CmdMessage, CmdResult};
use crate::editor::open_in_editor;
use crate::error::Result;
use crate::index::DocSelector;
use crate::session::Session;

/// Opens one document in `editor`, then rescans so edits show up. The listed
/// node is the rescanned one; it is absent if the editor removed the file.
pub fn run(session: &mut Session, selector: &DocSelector, editor: &str) -> Result<CmdResult> {
    let opened = session.select(selector)?;
    let filename = opened.document.filename().to_string();
    let path = opened.document.path().to_path_buf();

    open_in_editor(editor, &path)?;
    session.refresh()?;

    let mut result = CmdResult::default();
    match session.selected() {
        Some(node) => result = result.with_listed(vec![node.clone()]),
        None => result.add_message(CmdMessage::warning(format!(
            "{} is no longer in the catalog",
            filename
        ))),
    }
    result.add_message(CmdMessage::success(format!("Closed {}", filename)));
    Ok(result)
}
