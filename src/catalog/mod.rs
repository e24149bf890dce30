//! Read-only catalogs over the content records.
//!
//! Each catalog wraps an ordered sequence and serializes as a bare list,
//! so YAML content files and JSON exports share one shape.

pub mod anime;
pub mod favicons;
pub mod projects;

pub use anime::AnimeCatalog;
pub use favicons::FaviconTable;
pub use projects::{ProjectCatalog, ProjectStats, StatusCounts, ALL_CATEGORIES};
