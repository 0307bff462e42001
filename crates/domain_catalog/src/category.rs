//! Category reference entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::CategoryId;

/// A shelving category referenced by catalog entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Unique display name (uniqueness enforced by the persistence layer)
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new category with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new_v7(),
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}
