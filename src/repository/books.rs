//! In-memory book store.
//!
//! Holds the single ordered collection behind one lock; every operation
//! takes the lock once for its whole scan-then-mutate sequence, so the
//! mutating operations are atomic with respect to each other.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRequest},
};

fn book_not_found() -> AppError {
    AppError::NotFound("Book does not exist.".to_string())
}

/// Repository over the in-memory ordered book collection
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    /// Create a store holding the given records, in order
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Return the full collection in storage order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// Find the unique record with the given id
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(book_not_found)
    }

    /// All records with the given rating, in storage order
    pub async fn list_by_rating(&self, rating: i32) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.rating == rating)
            .cloned()
            .collect()
    }

    /// All records with the given published date, in storage order
    pub async fn list_by_published_date(&self, published_date: i32) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.published_date == published_date)
            .cloned()
            .collect()
    }

    /// Append a new record, assigning its id.
    ///
    /// The id is the id of the last record in storage order plus one, or 1
    /// when the collection is empty. This is the historical assignment rule;
    /// it is deliberately not max-plus-one or a counter.
    pub async fn insert(&self, request: BookRequest) -> Book {
        let mut books = self.books.write().await;
        let id = books.last().map_or(1, |last| last.id + 1);
        let book = request.into_book(id);
        books.push(book.clone());
        book
    }

    /// Replace every record whose id matches the target, keeping the
    /// target id on the replacement.
    ///
    /// Ids are unique so at most one record should match, but the scan
    /// covers the whole collection rather than stopping at the first hit.
    pub async fn replace(&self, id: i32, request: BookRequest) -> AppResult<()> {
        let mut books = self.books.write().await;
        let mut changed = false;

        for slot in books.iter_mut() {
            if slot.id == id {
                *slot = request.clone().into_book(id);
                changed = true;
            }
        }

        if changed {
            Ok(())
        } else {
            Err(book_not_found())
        }
    }

    /// Remove the first record with the given id, leaving any later
    /// duplicates in place.
    pub async fn remove(&self, id: i32) -> AppResult<()> {
        let mut books = self.books.write().await;

        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(())
            }
            None => Err(book_not_found()),
        }
    }
}

/// The fixed records present at process start
pub fn seed_books() -> Vec<Book> {
    fn book(
        id: i32,
        title: &str,
        author: &str,
        description: &str,
        rating: i32,
        published_date: i32,
    ) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        }
    }

    vec![
        book(1, "Computer Science Pro", "codingwithroby", "A very nice book", 5, 2015),
        book(2, "Be Fast with FastAPI", "codingwithroby", "A great book", 5, 2022),
        book(3, "Master Endpoints", "codingwithroby", "Good", 5, 1999),
        book(4, "React with Reactions", "codingwithroby", "Awesome", 3, 1998),
        book(5, "HP2", "JK Rowling", "Nothing special", 4, 2001),
        book(6, "Lord of the Rings", "Tolkien", "A very nice book", 5, 1823),
    ]
}
