//! Book catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Full collection in storage order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// All books with the given rating; empty on no match
    pub async fn books_by_rating(&self, rating: i32) -> Vec<Book> {
        self.repository.books.list_by_rating(rating).await
    }

    /// All books with the given published date; empty on no match
    pub async fn books_by_published_date(&self, published_date: i32) -> Vec<Book> {
        self.repository.books.list_by_published_date(published_date).await
    }

    /// Validate and store a new book; returns the record with its assigned id.
    /// Validation failure leaves the collection untouched.
    pub async fn create_book(&self, request: BookRequest) -> AppResult<Book> {
        request.validate()?;

        let created = self.repository.books.insert(request).await;
        tracing::info!("Created book id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    /// Validate and replace the book with the given id
    pub async fn update_book(&self, id: i32, request: BookRequest) -> AppResult<()> {
        request.validate()?;

        self.repository.books.replace(id, request).await?;
        tracing::info!("Updated book id={}", id);
        Ok(())
    }

    /// Delete the book with the given id
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.remove(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}
