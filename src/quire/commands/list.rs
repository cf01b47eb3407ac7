use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;

pub fn run(session: &Session) -> Result<CmdResult> {
    let tree = session.tree().clone();
    let mut result = CmdResult::default();
    if tree.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No documents found in {}",
            session.root().display()
        )));
    }
    Ok(result.with_tree(tree, session.summary()))
}
