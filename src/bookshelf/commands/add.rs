use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::id::{Clock, IdGenerator};
use crate::model::{Book, NewBook};
use crate::records::RecordStore;

pub fn run<C: Clock>(
    records: &mut RecordStore,
    ids: &mut IdGenerator<C>,
    new_book: NewBook,
) -> Result<CmdResult> {
    require("Title", &new_book.title)?;
    require("Author", &new_book.author)?;
    require("Year", &new_book.year.to_string())?;

    let book = Book::new(ids.next_id(), new_book);
    records.append(book.clone());

    let shelf = if book.is_complete { "read" } else { "to read" };
    let mut result = CmdResult::default().mutated();
    result.add_message(CmdMessage::success(format!(
        "Book added to {} ({}): {}",
        shelf, book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::Api(format!("{} cannot be empty", field)));
    }
    Ok(())
}
