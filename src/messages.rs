//! Message catalog for client-facing strings
//!
//! Resolves symbolic keys with positional arguments to human-readable
//! messages. Only the `en` catalog ships; unknown locales fall back to it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_LOCALE: &str = "en";

static CATALOG: Lazy<HashMap<(&'static str, &'static str), &'static str>> = Lazy::new(|| {
    HashMap::from([
        (("en", "book.not_found"), "Book not found with id {0}"),
        (("en", "book.isbn_unique"), "A book with this ISBN already exists"),
        (("en", "book.retrieval_failed"), "Failed to retrieve books"),
        (("en", "book.creation_failed"), "Failed to create book"),
        (("en", "book.update_failed"), "Failed to update book"),
        (("en", "book.deletion_failed"), "Failed to delete book"),
    ])
});

/// Catalog collaborator resolving keys + args + locale to display strings
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog;

impl MessageCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a message key, substituting `{0}`-style positional arguments.
    /// An unknown key resolves to the key itself.
    pub fn resolve(&self, key: &str, args: &[&str], locale: Option<&str>) -> String {
        let locale = locale.unwrap_or(DEFAULT_LOCALE);
        let template = CATALOG
            .get(&(locale, key))
            .or_else(|| CATALOG.get(&(DEFAULT_LOCALE, key)))
            .copied()
            .unwrap_or(key);

        let mut message = template.to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), arg);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_fixed_message() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.resolve("book.isbn_unique", &[], None),
            "A book with this ISBN already exists"
        );
    }

    #[test]
    fn substitutes_positional_arguments() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.resolve("book.not_found", &["42"], None),
            "Book not found with id 42"
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.resolve("book.creation_failed", &[], Some("fr")),
            "Failed to create book"
        );
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let catalog = MessageCatalog::new();
        assert_eq!(catalog.resolve("book.unknown", &[], None), "book.unknown");
    }
}
