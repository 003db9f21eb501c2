//! Book model and field validation

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Sentinel for a record the storage layer has not assigned an id to yet
pub const UNASSIGNED_ID: i64 = 0;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// ISBN-10 or ISBN-13, unique across the catalog
    pub isbn: String,
    pub publication_year: i32,
    pub publisher: Option<String>,
}

/// Create/update book payload (id is assigned by storage, never by the caller)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[validate(length(max = 255, message = "Title must be less than 255 characters"))]
    pub title: String,
    #[validate(length(max = 255, message = "Author must be less than 255 characters"))]
    pub author: String,
    #[validate(length(min = 10, max = 13, message = "ISBN must be 10 or 13 characters"))]
    pub isbn: String,
    #[validate(range(min = 1, message = "Publication year must be a positive number"))]
    pub publication_year: i32,
    #[validate(length(max = 1000, message = "Publisher must be less than 1000 characters"))]
    pub publisher: Option<String>,
}

impl BookInput {
    /// Field-level validation, independent of the HTTP layer.
    ///
    /// Returns one `field: message` entry per violation, sorted for stable
    /// output. ISBN uniqueness is deliberately not checked here; the storage
    /// layer enforces it and reports it as a duplicate-key error.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for (field, value, label) in [
            ("title", &self.title, "Title"),
            ("author", &self.author, "Author"),
            ("isbn", &self.isbn, "ISBN"),
        ] {
            if value.trim().is_empty() {
                violations.push(format!("{}: {} is required", field, label));
            }
        }

        if let Err(errors) = self.validate() {
            for (field, field_errors) in errors.field_errors() {
                for error in field_errors {
                    let message = error
                        .message
                        .as_deref()
                        .unwrap_or("invalid value")
                        .to_string();
                    violations.push(format!("{}: {}", field, message));
                }
            }
        }

        violations.sort();
        violations.dedup();
        violations
    }
}

impl Book {
    /// Build a record from a validated payload, keeping the given id
    pub fn from_input(id: i64, input: &BookInput) -> Self {
        Self {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            isbn: input.isbn.clone(),
            publication_year: input.publication_year,
            publisher: input.publisher.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BookInput {
        BookInput {
            title: "Title 1".to_string(),
            author: "Author 1".to_string(),
            isbn: "1234567890".to_string(),
            publication_year: 2020,
            publisher: None,
        }
    }

    #[test]
    fn valid_input_has_no_violations() {
        assert!(valid_input().violations().is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        let input = BookInput {
            title: "   ".to_string(),
            ..valid_input()
        };
        let violations = input.violations();
        assert_eq!(violations, vec!["title: Title is required"]);
    }

    #[test]
    fn overlong_author_is_rejected() {
        let input = BookInput {
            author: "a".repeat(256),
            ..valid_input()
        };
        let violations = input.violations();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].starts_with("author:"));
    }

    #[test]
    fn isbn_length_must_be_10_to_13() {
        for isbn in ["123456789", "12345678901234"] {
            let input = BookInput {
                isbn: isbn.to_string(),
                ..valid_input()
            };
            let violations = input.violations();
            assert_eq!(
                violations,
                vec!["isbn: ISBN must be 10 or 13 characters"],
                "isbn of length {} should be rejected",
                isbn.len()
            );
        }

        for isbn in ["1234567890", "123456789012", "1234567890123"] {
            let input = BookInput {
                isbn: isbn.to_string(),
                ..valid_input()
            };
            assert!(input.violations().is_empty());
        }
    }

    #[test]
    fn publication_year_must_be_positive() {
        for year in [0, -1, -2020] {
            let input = BookInput {
                publication_year: year,
                ..valid_input()
            };
            let violations = input.violations();
            assert_eq!(
                violations,
                vec!["publication_year: Publication year must be a positive number"]
            );
        }
    }

    #[test]
    fn publisher_is_optional_but_bounded() {
        let input = BookInput {
            publisher: Some("p".repeat(1001)),
            ..valid_input()
        };
        let violations = input.violations();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].starts_with("publisher:"));

        let input = BookInput {
            publisher: Some("Publisher 1".to_string()),
            ..valid_input()
        };
        assert!(input.violations().is_empty());
    }

    #[test]
    fn multiple_violations_are_all_reported() {
        let input = BookInput {
            title: "".to_string(),
            author: "".to_string(),
            isbn: "123".to_string(),
            publication_year: 0,
            publisher: None,
        };
        let violations = input.violations();
        assert!(violations.iter().any(|v| v.starts_with("title:")));
        assert!(violations.iter().any(|v| v.starts_with("author:")));
        assert!(violations.iter().any(|v| v.starts_with("isbn:")));
        assert!(violations.iter().any(|v| v.starts_with("publication_year:")));
    }

    #[test]
    fn from_input_preserves_id_and_fields() {
        let input = valid_input();
        let book = Book::from_input(42, &input);
        assert_eq!(book.id, 42);
        assert_eq!(book.title, input.title);
        assert_eq!(book.author, input.author);
        assert_eq!(book.isbn, input.isbn);
        assert_eq!(book.publication_year, input.publication_year);
        assert_eq!(book.publisher, input.publisher);
    }

    #[test]
    fn book_serializes_with_camel_case_year() {
        let book = Book::from_input(1, &valid_input());
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["publicationYear"], 2020);
        assert!(json["publisher"].is_null());
    }
}
