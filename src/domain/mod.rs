//! Domain types for the site content catalogs.
//!
//! This module contains the record shapes:
//! - Favicon: icon descriptor per theme
//! - AnimeRecord: watch-status entry
//! - Project: portfolio entry

pub mod anime;
pub mod favicon;
pub mod project;

// Re-export commonly used types
pub use anime::{AnimeRecord, AnimeStatus};
pub use favicon::{Favicon, Theme};
pub use project::{Project, ProjectCategory, ProjectStatus};
