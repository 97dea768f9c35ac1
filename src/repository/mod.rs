//! Repository layer for the in-memory store

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the in-memory collections
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository seeded with the given records
    pub fn new(seed: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(seed),
        }
    }
}
