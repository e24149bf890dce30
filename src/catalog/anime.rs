//! Anime catalog.
//!
//! Deliberately exposes the records only. Filtering and sorting belong to
//! whoever displays them.

use serde::{Deserialize, Serialize};

use crate::domain::AnimeRecord;

/// Ordered, read-only list of anime records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimeCatalog {
    items: Vec<AnimeRecord>,
}

impl AnimeCatalog {
    pub fn new(items: Vec<AnimeRecord>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[AnimeRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<AnimeRecord>> for AnimeCatalog {
    fn from(items: Vec<AnimeRecord>) -> Self {
        Self::new(items)
    }
}
