//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
