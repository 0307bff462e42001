//! In-Memory Catalog
//!
//! A `HashMap`-backed [`CatalogPort`] adapter for tests and single-node use.
//! It applies the same query predicates the production adapter would,
//! including the `WHERE deleted = false` soft-delete filter, so callers see
//! the same row visibility either way.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{BookId, DomainPort, PortError};

use crate::book::Book;
use crate::ports::{BookQuery, CatalogPort};

/// In-memory [`CatalogPort`] implementation
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    books: RwLock<HashMap<BookId, Book>>,
}

impl MemoryCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of catalog entries held, soft-deleted rows included
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Returns true if no catalog entries are held
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

impl DomainPort for MemoryCatalog {}

#[async_trait]
impl CatalogPort for MemoryCatalog {
    async fn get_book(&self, id: BookId) -> Result<Book, PortError> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Book", id))
    }

    async fn find_books(&self, query: BookQuery) -> Result<Vec<Book>, PortError> {
        let books = self.books.read().await;

        let mut matches: Vec<Book> = books
            .values()
            .filter(|book| query.include_deleted || !book.deleted)
            .filter(|book| query.isbn.as_deref().map_or(true, |i| book.isbn == i))
            .filter(|book| query.category_id.map_or(true, |c| book.category_id == Some(c)))
            .filter(|book| {
                query
                    .author_id
                    .map_or(true, |a| book.authors.contains(&a))
            })
            .filter(|book| query.status.map_or(true, |s| book.status == s))
            .cloned()
            .collect();

        // Stable order for pagination
        matches.sort_by(|a, b| (&a.title, a.id.to_string()).cmp(&(&b.title, b.id.to_string())));

        let offset = query.offset.unwrap_or(0) as usize;
        let matches: Vec<Book> = match query.limit {
            Some(limit) => matches.into_iter().skip(offset).take(limit as usize).collect(),
            None => matches.into_iter().skip(offset).collect(),
        };

        Ok(matches)
    }

    async fn save_book(&self, book: &Book) -> Result<(), PortError> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookStatus;
    use crate::category::Category;

    fn book(isbn: &str, title: &str) -> Book {
        Book::new(isbn, title, 2).unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let catalog = MemoryCatalog::new();
        let err = catalog.get_book(BookId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let catalog = MemoryCatalog::new();
        let b = book("978-604-1-11111-1", "Đất rừng phương Nam");

        catalog.save_book(&b).await.unwrap();
        let fetched = catalog.get_book(b.id).await.unwrap();
        assert_eq!(fetched.isbn, b.isbn);
    }

    #[tokio::test]
    async fn test_soft_deleted_rows_hidden_by_default() {
        let catalog = MemoryCatalog::new();
        let live = book("978-604-1-11111-1", "A");
        let mut gone = book("978-604-1-22222-2", "B");
        gone.soft_delete();

        catalog.save_book(&live).await.unwrap();
        catalog.save_book(&gone).await.unwrap();

        let visible = catalog.find_books(BookQuery::default()).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, live.id);

        // The row still exists; only the predicate hides it
        assert_eq!(catalog.len().await, 2);
        let all = catalog.find_books(BookQuery::default().with_deleted()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_isbn() {
        let catalog = MemoryCatalog::new();
        let b = book("978-604-1-33333-3", "Lão Hạc");
        catalog.save_book(&b).await.unwrap();
        catalog.save_book(&book("978-604-1-44444-4", "Chí Phèo")).await.unwrap();

        let found = catalog
            .find_books(BookQuery::by_isbn("978-604-1-33333-3"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Lão Hạc");
    }

    #[tokio::test]
    async fn test_find_by_category_and_status() {
        let catalog = MemoryCatalog::new();
        let fiction = Category::new("Fiction");

        let mut shelved = book("978-604-1-55555-5", "Shelved");
        shelved.category_id = Some(fiction.id);
        // A title with no copies is created in Borrowed status
        let mut out = Book::new("978-604-1-66666-6", "All Out", 0).unwrap();
        out.category_id = Some(fiction.id);

        catalog.save_book(&shelved).await.unwrap();
        catalog.save_book(&out).await.unwrap();

        let in_category = catalog.find_books(BookQuery::in_category(fiction.id)).await.unwrap();
        assert_eq!(in_category.len(), 2);

        let available = catalog
            .find_books(BookQuery::in_category(fiction.id).with_status(BookStatus::Available))
            .await
            .unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, shelved.id);
    }

    #[tokio::test]
    async fn test_pagination_is_stable() {
        let catalog = MemoryCatalog::new();
        for i in 0..5 {
            catalog
                .save_book(&book(&format!("978-604-1-0000{i}-0"), &format!("Title {i}")))
                .await
                .unwrap();
        }

        let first = catalog.find_books(BookQuery::default().paginate(2, 0)).await.unwrap();
        let second = catalog.find_books(BookQuery::default().paginate(2, 2)).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_ne!(first[0].id, second[0].id);
    }
}
