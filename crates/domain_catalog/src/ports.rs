//! Catalog Domain Ports
//!
//! The `CatalogPort` trait defines the operations the catalog domain needs
//! from its data source. The surrounding persistence layer provides the
//! production adapter; tests use in-memory implementations.
//!
//! Soft-deleted entries are filtered by an explicit query predicate
//! ([`BookQuery::include_deleted`]), applied by the adapter - filtering is
//! not a hidden behavior of the entity type.

use async_trait::async_trait;

use core_kernel::{AuthorId, BookId, CategoryId, DomainPort, PortError};

use crate::book::{Book, BookStatus};

/// Query parameters for finding catalog entries
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    /// Filter by ISBN
    pub isbn: Option<String>,
    /// Filter by category
    pub category_id: Option<CategoryId>,
    /// Filter by author
    pub author_id: Option<AuthorId>,
    /// Filter by availability status
    pub status: Option<BookStatus>,
    /// Include soft-deleted entries (the `WHERE deleted = false` predicate
    /// is applied unless this is set)
    pub include_deleted: bool,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl BookQuery {
    /// Creates a query to find by ISBN
    pub fn by_isbn(isbn: impl Into<String>) -> Self {
        Self {
            isbn: Some(isbn.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by category
    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Default::default()
        }
    }

    /// Creates a query to find by author
    pub fn by_author(author_id: AuthorId) -> Self {
        Self {
            author_id: Some(author_id),
            ..Default::default()
        }
    }

    /// Restricts to a single availability status
    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Includes soft-deleted entries in the result
    pub fn with_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// The main port trait for catalog operations
#[async_trait]
pub trait CatalogPort: DomainPort {
    /// Retrieves a catalog entry by ID
    ///
    /// # Returns
    ///
    /// The book if found, or `PortError::NotFound`
    async fn get_book(&self, id: BookId) -> Result<Book, PortError>;

    /// Finds catalog entries matching the query criteria
    async fn find_books(&self, query: BookQuery) -> Result<Vec<Book>, PortError>;

    /// Persists a catalog entry (insert or update)
    async fn save_book(&self, book: &Book) -> Result<(), PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builders() {
        let q = BookQuery::by_isbn("978-0-13-468599-1").paginate(10, 0);
        assert_eq!(q.isbn.as_deref(), Some("978-0-13-468599-1"));
        assert_eq!(q.limit, Some(10));
        assert!(!q.include_deleted);
    }

    #[test]
    fn test_with_deleted_flips_predicate() {
        let q = BookQuery::default().with_deleted();
        assert!(q.include_deleted);
    }
}
