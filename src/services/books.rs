//! Book catalog service
//!
//! The CRUD core: validates payloads before any storage call, delegates to
//! the [`BookStore`] collaborator and classifies storage outcomes into the
//! client-facing error kinds with catalog-resolved messages.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    messages::MessageCatalog,
    models::book::{Book, BookInput, UNASSIGNED_ID},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    messages: Arc<MessageCatalog>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, messages: Arc<MessageCatalog>) -> Self {
        Self { store, messages }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        tracing::info!("fetching all books");
        let books = self
            .store
            .find_all()
            .await
            .map_err(|e| self.storage_failure(e, "book.retrieval_failed"))?;
        tracing::info!(count = books.len(), "retrieved books");
        Ok(books)
    }

    /// Get one book by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        tracing::info!(id, "fetching book");
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_failure(e, "book.retrieval_failed"))?
            .ok_or_else(|| self.not_found(id))
    }

    /// Create a book; the store assigns the id
    pub async fn create(&self, input: &BookInput) -> AppResult<Book> {
        tracing::info!(isbn = %input.isbn, "creating book");
        self.check_input(input)?;
        let saved = self
            .store
            .save(Book::from_input(UNASSIGNED_ID, input))
            .await
            .map_err(|e| self.save_failure(e, "book.creation_failed"))?;
        tracing::info!(id = saved.id, "book created");
        Ok(saved)
    }

    /// Replace all mutable fields of an existing book, preserving its id
    pub async fn update(&self, id: i64, input: &BookInput) -> AppResult<Book> {
        tracing::info!(id, "updating book");
        self.check_input(input)?;
        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_failure(e, "book.update_failed"))?
            .ok_or_else(|| self.not_found(id))?;
        let saved = self
            .store
            .save(Book::from_input(existing.id, input))
            .await
            .map_err(|e| self.save_failure(e, "book.update_failed"))?;
        tracing::info!(id = saved.id, "book updated");
        Ok(saved)
    }

    /// Delete a book by id
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        tracing::info!(id, "deleting book");
        let exists = self
            .store
            .exists_by_id(id)
            .await
            .map_err(|e| self.storage_failure(e, "book.deletion_failed"))?;
        if !exists {
            return Err(self.not_found(id));
        }
        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| self.storage_failure(e, "book.deletion_failed"))?;
        tracing::info!(id, "book deleted");
        Ok(())
    }

    /// Reject the payload before it reaches storage when field rules fail
    fn check_input(&self, input: &BookInput) -> AppResult<()> {
        let violations = input.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::warn!(?violations, "book payload rejected");
            Err(AppError::Validation(violations.join("; ")))
        }
    }

    fn not_found(&self, id: i64) -> AppError {
        tracing::warn!(id, "book not found");
        AppError::NotFound(
            self.messages
                .resolve("book.not_found", &[&id.to_string()], None),
        )
    }

    /// Duplicate keys keep their kind with the fixed catalog message; other
    /// storage failures turn opaque.
    fn save_failure(&self, err: AppError, key: &str) -> AppError {
        match err {
            AppError::Duplicate(_) => {
                tracing::warn!("isbn is not unique");
                AppError::Duplicate(self.messages.resolve("book.isbn_unique", &[], None))
            }
            other => self.storage_failure(other, key),
        }
    }

    fn storage_failure(&self, err: AppError, key: &str) -> AppError {
        match err {
            AppError::Database(e) => {
                tracing::error!(error = %e, "database failure");
                AppError::Storage(self.messages.resolve(key, &[], None))
            }
            other => other,
        }
    }
}
