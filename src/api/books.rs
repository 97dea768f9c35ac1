//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRequest, PublishedDateQuery, RatingQuery},
};

fn require_positive(book_id: i32) -> AppResult<()> {
    if book_id > 0 {
        Ok(())
    } else {
        Err(AppError::Validation(
            "book_id must be greater than 0".to_string(),
        ))
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Full book collection", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list_books().await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = i32, Path, description = "Book ID (must be > 0)")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid book ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Book>> {
    require_positive(book_id)?;

    let book = state.services.books.get_book(book_id).await?;
    Ok(Json(book))
}

/// List books with a given rating
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(RatingQuery),
    responses(
        (status = 200, description = "Books matching the rating", body = Vec<Book>),
        (status = 422, description = "Rating out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_by_rating(
    State(state): State<crate::AppState>,
    Query(query): Query<RatingQuery>,
) -> AppResult<Json<Vec<Book>>> {
    query.validate()?;

    let books = state.services.books.books_by_rating(query.book_rating).await;
    Ok(Json(books))
}

/// List books with a given published date
#[utoipa::path(
    get,
    path = "/books/publish/",
    tag = "books",
    params(PublishedDateQuery),
    responses(
        (status = 200, description = "Books matching the published date", body = Vec<Book>),
        (status = 422, description = "Published date out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_by_published_date(
    State(state): State<crate::AppState>,
    Query(query): Query<PublishedDateQuery>,
) -> AppResult<Json<Vec<Book>>> {
    query.validate()?;

    let books = state
        .services
        .books
        .books_by_published_date(query.published_date)
        .await;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create_book(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    request_body = BookRequest,
    responses(
        (status = 204, description = "Book updated"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
    Json(request): Json<BookRequest>,
) -> AppResult<StatusCode> {
    state.services.books.update_book(book_id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = i32, Path, description = "Book ID (must be > 0)")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid book ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<StatusCode> {
    require_positive(book_id)?;

    state.services.books.delete_book(book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
