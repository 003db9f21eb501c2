//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::{messages::MessageCatalog, repository::BookStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
}

impl Services {
    /// Create all services over the given store and message catalog
    pub fn new(store: Arc<dyn BookStore>, messages: Arc<MessageCatalog>) -> Self {
        Self {
            books: books::BookService::new(store, messages),
        }
    }
}
