use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DocumentRecord;
use crate::session::Session;
use std::fs;
use std::path::Path;

/// Serializes every document in tree order. With `output` the JSON is
/// written to that file, otherwise it is returned for printing.
pub fn run(session: &Session, output: Option<&Path>) -> Result<CmdResult> {
    let records: Vec<DocumentRecord> = session.documents().map(|d| d.to_record()).collect();
    let json = serde_json::to_string_pretty(&records)?;
    let count = records.len();
    let mut result = CmdResult::default().with_records(records);

    match output {
        Some(path) => {
            fs::write(path, json)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} documents to {}",
                count,
                path.display()
            )));
        }
        None => result.export_json = Some(json),
    }
    Ok(result)
}
