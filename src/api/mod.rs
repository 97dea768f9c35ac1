//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
