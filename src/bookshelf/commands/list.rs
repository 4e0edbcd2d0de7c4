use crate::commands::CmdResult;
use crate::error::Result;
use crate::records::RecordStore;
use crate::render::render;

pub fn run(records: &RecordStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_view(render(records.iter())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, completion, remove};
    use crate::id::{FixedClock, IdGenerator};
    use crate::model::{BookId, NewBook};

    // Walks through adding, finishing and removing a single book.
    #[test]
    fn dune_lifecycle() {
        let mut records = RecordStore::new();
        let mut ids = IdGenerator::with_clock(FixedClock(1_000));
        add::run(
            &mut records,
            &mut ids,
            NewBook::new("Dune", "Herbert", "1965", false),
        )
        .unwrap();

        let view = run(&records).unwrap().view.unwrap();
        assert_eq!(view.incomplete.len(), 1);
        assert!(view.complete.is_empty());

        completion::mark_complete(&mut records, BookId(1_000)).unwrap();
        let view = run(&records).unwrap().view.unwrap();
        assert!(view.incomplete.is_empty());
        assert_eq!(view.complete[0].title, "Dune");

        remove::run(&mut records, BookId(1_000)).unwrap();
        let view = run(&records).unwrap().view.unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn empty_shelf_lists_nothing() {
        let result = run(&RecordStore::new()).unwrap();
        assert!(result.view.unwrap().is_empty());
        assert!(!result.mutated);
    }
}
