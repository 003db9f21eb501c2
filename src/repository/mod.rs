//! Storage layer for book records

pub mod books;

use async_trait::async_trait;

use crate::{error::AppResult, models::book::Book};

/// Storage collaborator contract consumed by the book service.
///
/// A capability set rather than a concrete store: any backing implementation
/// (PostgreSQL, an in-memory map) satisfies the handlers by providing these
/// five operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All stored books, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Look up one book by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// Persist a book: insert when the id is unassigned, replace the row
    /// otherwise. Fails with [`crate::AppError::Duplicate`] when the isbn
    /// collides with another record.
    async fn save(&self, book: Book) -> AppResult<Book>;

    /// Whether a record exists for the given id
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Remove the record for the given id
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
