//! Project catalog and its derived views.
//!
//! Every query borrows from the catalog and preserves the original order;
//! none of them can fail.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Project, ProjectStatus};

/// Category filter value that selects every project
pub const ALL_CATEGORIES: &str = "all";

/// Ordered, read-only list of projects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    items: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(items: Vec<Project>) -> Self {
        Self { items }
    }

    /// All projects in catalog order
    pub fn items(&self) -> &[Project] {
        &self.items
    }

    /// Get a project by ID (first match wins if IDs repeat)
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Total and per-status project counts
    pub fn stats(&self) -> ProjectStats {
        let mut by_status = StatusCounts::default();

        for project in &self.items {
            match project.status {
                ProjectStatus::Completed => by_status.completed += 1,
                ProjectStatus::InProgress => by_status.in_progress += 1,
                ProjectStatus::Planned => by_status.planned += 1,
            }
        }

        ProjectStats {
            total: self.items.len(),
            by_status,
        }
    }

    /// Projects in a category.
    ///
    /// `None`, `""` and `"all"` select everything. Any other value is compared
    /// against the category spelling exactly, so unknown values match nothing.
    pub fn by_category(&self, category: Option<&str>) -> Vec<&Project> {
        match category {
            None | Some("") | Some(ALL_CATEGORIES) => self.items.iter().collect(),
            Some(category) => self
                .items
                .iter()
                .filter(|p| p.category.as_str() == category)
                .collect(),
        }
    }

    /// Projects flagged as featured
    pub fn featured(&self) -> Vec<&Project> {
        self.items.iter().filter(|p| p.featured).collect()
    }

    /// Every technology used across the catalog, deduplicated and sorted
    pub fn all_tech_stack(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|p| p.tech_stack.iter())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Project>> for ProjectCatalog {
    fn from(items: Vec<Project>) -> Self {
        Self::new(items)
    }
}

/// Project counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub by_status: StatusCounts,
}

/// Project counts partitioned by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl StatusCounts {
    pub fn sum(&self) -> usize {
        self.completed + self.in_progress + self.planned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectCategory;

    fn project(id: &str, category: ProjectCategory, status: ProjectStatus) -> Project {
        Project::new(id, id, category, status, "2025-01-01")
    }

    fn sample() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            project("a", ProjectCategory::Web, ProjectStatus::Completed)
                .with_tech(["Rust", "Svelte"])
                .featured(),
            project("b", ProjectCategory::Desktop, ProjectStatus::InProgress)
                .with_tech(["Rust", "Tauri"]),
            project("c", ProjectCategory::Web, ProjectStatus::Planned).with_tech(["Astro"]),
            project("d", ProjectCategory::Web, ProjectStatus::Planned),
        ])
    }

    #[test]
    fn test_stats_partition_total() {
        let stats = sample().stats();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_status.completed, 1);
        assert_eq!(stats.by_status.in_progress, 1);
        assert_eq!(stats.by_status.planned, 2);
        assert_eq!(stats.by_status.sum(), stats.total);
    }

    #[test]
    fn test_stats_on_empty_catalog() {
        let stats = ProjectCatalog::default().stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_status, StatusCounts::default());
    }

    #[test]
    fn test_stats_serialize_like_the_site_expects() {
        let json = serde_json::to_value(sample().stats()).unwrap();
        assert_eq!(json["total"], 4);
        assert_eq!(json["byStatus"]["inProgress"], 1);
    }

    #[test]
    fn test_by_category_all_and_none() {
        let catalog = sample();
        let ids = |v: Vec<&Project>| v.iter().map(|p| p.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(catalog.by_category(None)), vec!["a", "b", "c", "d"]);
        assert_eq!(ids(catalog.by_category(Some("all"))), vec!["a", "b", "c", "d"]);
        // An empty filter means no filter
        assert_eq!(ids(catalog.by_category(Some(""))), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_by_category_preserves_order() {
        let catalog = sample();
        let web: Vec<_> = catalog
            .by_category(Some("web"))
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(web, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_by_category_unknown_is_empty() {
        let catalog = sample();

        assert!(catalog.by_category(Some("mobile")).is_empty());
        assert!(catalog.by_category(Some("games")).is_empty());
        // Matching is exact, like the stored spelling
        assert!(catalog.by_category(Some("WEB")).is_empty());
    }

    #[test]
    fn test_featured() {
        let catalog = sample();
        let featured = catalog.featured();

        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "a");
    }

    #[test]
    fn test_all_tech_stack_sorted_and_unique() {
        let tech = sample().all_tech_stack();
        assert_eq!(tech, vec!["Astro", "Rust", "Svelte", "Tauri"]);
    }

    #[test]
    fn test_get() {
        let catalog = sample();
        assert_eq!(catalog.get("b").map(|p| p.status), Some(ProjectStatus::InProgress));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_is_a_plain_sequence_on_the_wire() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(4));
    }
}
