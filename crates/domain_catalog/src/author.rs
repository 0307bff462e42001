//! Author reference entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AuthorId;

/// An author referenced by catalog entries
///
/// Books hold [`AuthorId`]s; the author row itself carries only
/// bibliographic detail. Email is a natural key whose uniqueness is enforced
/// by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub biography: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub website_url: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Creates a new author with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: AuthorId::new_v7(),
            name: name.into(),
            biography: None,
            date_of_birth: None,
            nationality: None,
            website_url: None,
            email: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_author() {
        let author = Author::new("Nguyễn Nhật Ánh");
        assert_eq!(author.name, "Nguyễn Nhật Ánh");
        assert!(author.biography.is_none());
    }
}
