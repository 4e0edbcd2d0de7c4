use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::records::RecordStore;

pub fn mark_complete(records: &mut RecordStore, id: BookId) -> Result<CmdResult> {
    set_completion(records, id, true)
}

pub fn mark_incomplete(records: &mut RecordStore, id: BookId) -> Result<CmdResult> {
    set_completion(records, id, false)
}

fn set_completion(records: &mut RecordStore, id: BookId, is_complete: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Unknown ids are ignored: nothing changes, nothing is saved
    let Some(book) = records.find_by_id_mut(id) else {
        result.add_message(CmdMessage::info(format!("No book with id {}", id)));
        return Ok(result);
    };

    book.is_complete = is_complete;
    let verb = if is_complete { "read" } else { "unread" };
    result.add_message(CmdMessage::success(format!(
        "Marked as {} ({}): {}",
        verb, book.id, book.title
    )));
    let book = book.clone();
    Ok(result.mutated().with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, NewBook};

    fn shelf() -> RecordStore {
        RecordStore::from(vec![
            Book::new(BookId(1), NewBook::new("Dune", "Herbert", "1965", false)),
            Book::new(BookId(2), NewBook::new("Emma", "Austen", "1815", true)),
        ])
    }

    #[test]
    fn marks_book_complete() {
        let mut records = shelf();
        let result = mark_complete(&mut records, BookId(1)).unwrap();

        assert!(result.mutated);
        assert!(records.find_by_id(BookId(1)).unwrap().is_complete);
    }

    #[test]
    fn marks_book_incomplete() {
        let mut records = shelf();
        mark_incomplete(&mut records, BookId(2)).unwrap();
        assert!(!records.find_by_id(BookId(2)).unwrap().is_complete);
    }

    #[test]
    fn complete_then_incomplete_restores_the_book() {
        let mut records = shelf();
        let before = records.find_by_id(BookId(1)).unwrap().clone();

        mark_complete(&mut records, BookId(1)).unwrap();
        mark_incomplete(&mut records, BookId(1)).unwrap();

        assert_eq!(*records.find_by_id(BookId(1)).unwrap(), before);
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut records = shelf();
        let before = records.clone();

        let result = mark_complete(&mut records, BookId(404)).unwrap();

        assert!(!result.mutated);
        assert!(result.affected_books.is_empty());
        assert_eq!(records, before);
    }
}
