use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::records::RecordStore;

pub fn run(records: &mut RecordStore, id: BookId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(book) = records
        .find_index_by_id(id)
        .and_then(|index| records.remove_at(index))
    else {
        result.add_message(CmdMessage::info(format!("No book with id {}", id)));
        return Ok(result);
    };

    result.add_message(CmdMessage::success(format!(
        "Book removed ({}): {}",
        book.id, book.title
    )));
    Ok(result.mutated().with_affected_books(vec![book]))
}
