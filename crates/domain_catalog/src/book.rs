//! Book catalog entry
//!
//! A `Book` is one title's inventory record: copy counts, availability
//! status, bibliographic details, and the soft-delete flag. Authors and the
//! category are held as identifier references; lookups go through the
//! catalog ports rather than an embedded object graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AuthorId, BookId, CategoryId};
use crate::error::CatalogError;

/// Availability status of a catalog entry
///
/// `Available` and `Borrowed` are derived from the copy counters;
/// `Maintenance` takes the title out of circulation regardless of counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    /// At least one copy is on the shelf
    Available,
    /// Every copy is out on loan
    Borrowed,
    /// Withdrawn from circulation for repair or review
    Maintenance,
}

/// A book title and its copy-count state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: BookId,
    /// ISBN, the natural key (uniqueness enforced by the persistence layer)
    pub isbn: String,
    /// Title
    pub title: String,
    /// Description
    pub description: Option<String>,
    /// Year of publication
    pub publication_year: Option<i32>,
    /// Publisher
    pub publisher: Option<String>,
    /// Copies owned by the library
    pub total_copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
    /// Availability status
    pub status: BookStatus,
    /// Cover image URL
    pub image_url: Option<String>,
    /// Author references
    pub authors: Vec<AuthorId>,
    /// Category reference
    pub category_id: Option<CategoryId>,
    /// Soft-delete flag; deleted entries are filtered by the query layer
    pub deleted: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Creates a new catalog entry with all copies on the shelf
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the ISBN or title is empty.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        total_copies: u32,
    ) -> Result<Self, CatalogError> {
        let isbn = isbn.into();
        let title = title.into();

        if isbn.trim().is_empty() {
            return Err(CatalogError::Validation("ISBN must not be empty".to_string()));
        }
        if title.trim().is_empty() {
            return Err(CatalogError::Validation("Title must not be empty".to_string()));
        }

        let now = Utc::now();
        let mut book = Self {
            id: BookId::new_v7(),
            isbn,
            title,
            description: None,
            publication_year: None,
            publisher: None,
            total_copies,
            available_copies: total_copies,
            status: BookStatus::Available,
            image_url: None,
            authors: Vec::new(),
            category_id: None,
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        book.update_status();
        Ok(book)
    }

    /// Takes one copy off the shelf for a checkout
    ///
    /// Silent no-op when no copies are on the shelf; the counter never goes
    /// negative. Status is not recomputed here - the borrow flow that
    /// emptied the shelf owns the status it wants to show.
    pub fn decrease_available(&mut self) {
        if self.available_copies > 0 {
            self.available_copies -= 1;
            self.updated_at = Utc::now();
        }
    }

    /// Puts one copy back on the shelf after a return
    ///
    /// No-op when every copy is already on the shelf. On success the status
    /// is recomputed from the counters.
    pub fn increase_available(&mut self) {
        if self.available_copies < self.total_copies {
            self.available_copies += 1;
            self.update_status();
            self.updated_at = Utc::now();
        }
    }

    /// Removes one copy from the collection after a loss
    ///
    /// Clamped at zero; the available counter is untouched (a lost copy was
    /// out on loan, not on the shelf).
    pub fn reduce_total_on_loss(&mut self) {
        self.total_copies = self.total_copies.saturating_sub(1);
        self.updated_at = Utc::now();
    }

    /// Recomputes status from the copy counters
    fn update_status(&mut self) {
        if self.available_copies == 0 {
            self.status = BookStatus::Borrowed;
        } else {
            self.status = BookStatus::Available;
        }
    }

    /// Marks the entry as deleted
    ///
    /// The row stays behind for existing loan references; queries filter it
    /// out via [`crate::ports::BookQuery::include_deleted`].
    pub fn soft_delete(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }

    /// Returns true if a checkout is currently permitted
    pub fn is_available_for_borrow(&self) -> bool {
        self.available_copies > 0 && self.status == BookStatus::Available && !self.deleted
    }
}
