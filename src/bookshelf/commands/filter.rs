use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::render::render;

/// Show only books whose title contains `query`. Case-sensitive; an empty
/// query shows the whole shelf.
pub fn run(records: &RecordStore, query: &str) -> Result<CmdResult> {
    let matches = records.filter_by_title(query);
    let mut result = CmdResult::default().with_view(render(&matches));

    if matches.is_empty() && !records.is_empty() {
        result.add_message(CmdMessage::info(format!("No titles contain \"{}\"", query)));
    }
    Ok(result)
}
