//! Book model and request types.
//!
//! `Book` is the stored entity; `BookRequest` is the wire shape for create
//! and update, carrying the field constraints. The two are mapped through
//! [`BookRequest::into_book`] so the id always comes from the server side.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A catalog entry. Ids are unique, server-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i32,
    pub published_date: i32,
}

/// Incoming book payload for create and update operations.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "Computer Science Pro",
    "author": "codingwithroby",
    "description": "A very nice book",
    "rating": 5,
    "published_date": 2022
}))]
pub struct BookRequest {
    /// Accepted on the wire but never honored; ids are server-assigned.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 3))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1, max = 100))]
    pub description: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(range(min = 2000, max = 2999))]
    pub published_date: i32,
}

impl BookRequest {
    /// Build the stored entity with the given id, discarding any
    /// client-supplied id.
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
            published_date: self.published_date,
        }
    }
}

/// Query parameters for `GET /books/`
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct RatingQuery {
    #[validate(range(min = 1, max = 5))]
    pub book_rating: i32,
}

/// Query parameters for `GET /books/publish/`
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PublishedDateQuery {
    #[validate(range(min = 2000, max = 2999))]
    pub published_date: i32,
}
