//! site-content - Static content catalogs for a personal website
//!
//! Three independent, read-only catalogs that the site's front end renders:
//! favicon descriptors, an anime watch list, and portfolio projects with a
//! few derived views.
//!
//! # Modules
//!
//! - `domain`: Record types (Favicon, AnimeRecord, Project)
//! - `catalog`: Ordered catalogs and the project queries
//! - `content`: Builtin records, content-file loading, JSON export
//! - `check`: Data-entry convention checks
//! - `config`: Path configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Graphics projects
//! site-content projects --category graphics
//!
//! # Counts by status
//! site-content stats --json
//!
//! # Write JSON for the site build
//! site-content export --out public/data
//! ```

pub mod catalog;
pub mod check;
pub mod cli;
pub mod config;
pub mod content;
pub mod domain;

// Re-export main types at crate root for convenience
pub use catalog::{AnimeCatalog, FaviconTable, ProjectCatalog, ProjectStats, StatusCounts};
pub use check::ContentIssue;
pub use content::{
    all_tech_stack, featured_projects, project_stats, projects_by_category, SiteContent,
};
pub use domain::{
    AnimeRecord, AnimeStatus, Favicon, Project, ProjectCategory, ProjectStatus, Theme,
};
