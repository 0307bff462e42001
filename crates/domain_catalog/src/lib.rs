//! Catalog Domain
//!
//! This crate owns the book inventory model: each catalog entry tracks how
//! many copies exist, how many are on the shelf, and whether the title can be
//! borrowed at all.
//!
//! # Copy-count invariant
//!
//! ```text
//! 0 <= available_copies <= total_copies
//! ```
//!
//! Copy counters are mutated only through the [`Book`] operations
//! ([`Book::decrease_available`], [`Book::increase_available`],
//! [`Book::reduce_total_on_loss`]) - never directly by the lending ledger.

pub mod book;
pub mod author;
pub mod category;
pub mod ports;
pub mod adapters;
pub mod error;

pub use book::{Book, BookStatus};
pub use author::Author;
pub use category::Category;
pub use ports::{CatalogPort, BookQuery};
pub use error::CatalogError;
