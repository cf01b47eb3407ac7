use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DocSelector;
use crate::session::Session;

use super::helpers::nodes_by_selectors;

pub fn run(session: &Session, selectors: &[DocSelector]) -> Result<CmdResult> {
    let nodes = nodes_by_selectors(session, selectors)?;
    Ok(CmdResult::default().with_listed(nodes))
}
