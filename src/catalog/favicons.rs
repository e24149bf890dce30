//! Favicon table.

use serde::{Deserialize, Serialize};

use crate::domain::{Favicon, Theme};

/// Ordered, read-only list of favicon entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaviconTable {
    items: Vec<Favicon>,
}

impl FaviconTable {
    pub fn new(items: Vec<Favicon>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Favicon] {
        &self.items
    }

    /// Entries for one theme, in table order
    pub fn for_theme(&self, theme: Theme) -> Vec<&Favicon> {
        self.items.iter().filter(|f| f.theme == theme).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Favicon>> for FaviconTable {
    fn from(items: Vec<Favicon>) -> Self {
        Self::new(items)
    }
}
