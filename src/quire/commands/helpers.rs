use crate::error::Result;
use crate::index::DocSelector;
use crate::session::Session;
use crate::tree::FileNode;

/// Resolves every selector against the current tree, in order. A document
/// named twice is returned once, at its first position.
pub fn nodes_by_selectors(session: &Session, selectors: &[DocSelector]) -> Result<Vec<FileNode>> {
    let mut nodes: Vec<FileNode> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let node = session.resolve(selector)?;
        if !nodes.iter().any(|n| n.index == node.index) {
            nodes.push(node.clone());
        }
    }
    Ok(nodes)
}
