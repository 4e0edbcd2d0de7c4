//! # Render Pipeline
//!
//! Turns a sequence of books into a [`ShelfView`]: two lists, unread and
//! read, each in shelf order. Every card carries the actions a UI should
//! offer for that book.
//!
//! Rendering only reads. The same input always produces an equal view, and each
//! call builds both lists from scratch.

use crate::model::{Book, BookId, Year};
use serde::Serialize;

/// An action a UI can offer on a rendered book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum BookAction {
    MarkComplete(BookId),
    MarkIncomplete(BookId),
    Remove(BookId),
}

impl BookAction {
    pub fn id(&self) -> BookId {
        match self {
            BookAction::MarkComplete(id)
            | BookAction::MarkIncomplete(id)
            | BookAction::Remove(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookAction::MarkComplete(_) => "Mark as read",
            BookAction::MarkIncomplete(_) => "Mark as unread",
            BookAction::Remove(_) => "Remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: Year,
    pub toggle: BookAction,
    pub remove: BookAction,
}

impl BookCard {
    fn from_book(book: &Book) -> Self {
        let toggle = if book.is_complete {
            BookAction::MarkIncomplete(book.id)
        } else {
            BookAction::MarkComplete(book.id)
        };

        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
            toggle,
            remove: BookAction::Remove(book.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShelfView {
    pub incomplete: Vec<BookCard>,
    pub complete: Vec<BookCard>,
}

impl ShelfView {
    pub fn is_empty(&self) -> bool {
        self.incomplete.is_empty() && self.complete.is_empty()
    }

    pub fn len(&self) -> usize {
        self.incomplete.len() + self.complete.len()
    }
}

pub fn render<'a, I>(books: I) -> ShelfView
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut view = ShelfView::default();
    for book in books {
        let card = BookCard::from_book(book);
        if book.is_complete {
            view.complete.push(card);
        } else {
            view.incomplete.push(card);
        }
    }
    view
}
