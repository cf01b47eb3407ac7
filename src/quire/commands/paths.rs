use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DocSelector;
use crate::session::Session;

use super::helpers::nodes_by_selectors;

pub fn run(session: &Session, selectors: &[DocSelector]) -> Result<CmdResult> {
    let paths = nodes_by_selectors(session, selectors)?
        .into_iter()
        .map(|node| node.document.path().to_path_buf())
        .collect();
    Ok(CmdResult::default().with_paths(paths))
}
