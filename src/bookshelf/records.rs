//! # Record Store
//!
//! The in-memory, ordered list of books. Order is insertion order and is
//! preserved through persistence and rendering.
//!
//! Lookups are linear scans; a shelf is small. The store does not enforce id
//! uniqueness: that is the job of [`crate::id::IdGenerator`].

use crate::model::{Book, BookId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    books: Vec<Book>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    /// First book with the given id.
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Position of the first book with the given id.
    pub fn find_index_by_id(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Removes the book at `index`, shifting later books down.
    /// Returns `None` without touching the store if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Book> {
        if index < self.books.len() {
            Some(self.books.remove(index))
        } else {
            None
        }
    }

    /// Books whose title contains `query` (case-sensitive). An empty query matches all.
    pub fn filter_by_title(&self, query: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.title.contains(query))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    pub fn into_vec(self) -> Vec<Book> {
        self.books
    }
}

impl From<Vec<Book>> for RecordStore {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}
