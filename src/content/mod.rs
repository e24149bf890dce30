//! Site content snapshot.
//!
//! A [`SiteContent`] bundles the three catalogs. It is built either from the
//! records compiled into the binary or from YAML files in a content
//! directory, and never changes afterwards.
//!
//! # Content Directory Layout
//!
//! ```text
//! <content_dir>/
//! ├── favicons.yaml     # sequence of favicon entries
//! ├── anime.yaml        # sequence of anime records
//! └── projects.yaml     # sequence of projects
//! ```
//!
//! Missing files fall back to the builtin catalog, one file at a time.
//!
//! # Export Layout
//!
//! ```text
//! <export_dir>/
//! ├── favicons.json
//! ├── anime.json
//! ├── projects.json
//! ├── project-stats.json
//! └── tech-stack.json
//! ```

pub mod records;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

use crate::catalog::{AnimeCatalog, FaviconTable, ProjectCatalog, ProjectStats};
use crate::domain::Project;

pub const FAVICONS_FILE: &str = "favicons.yaml";
pub const ANIME_FILE: &str = "anime.yaml";
pub const PROJECTS_FILE: &str = "projects.yaml";

/// Process-wide builtin snapshot
static BUILTIN: OnceLock<SiteContent> = OnceLock::new();

/// Where a catalog's records came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Builtin => write!(f, "builtin"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The three content catalogs
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub favicons: FaviconTable,
    pub anime: AnimeCatalog,
    pub projects: ProjectCatalog,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteContent {
    /// Build the snapshot from the records compiled into the binary
    pub fn builtin() -> Self {
        Self {
            favicons: records::favicons().into(),
            anime: records::anime_list().into(),
            projects: records::projects().into(),
        }
    }

    /// Load content, preferring files in `dir` over builtin records.
    ///
    /// With no directory, or a directory that does not exist, the builtin
    /// snapshot is returned. A file that exists but does not parse is an error.
    pub async fn load(dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = dir.filter(|d| d.is_dir()) else {
            if let Some(dir) = dir {
                debug!(dir = %dir.display(), "Content directory missing, using builtin content");
            }
            return Ok(Self::builtin());
        };

        let (favicons, source) = load_or(dir.join(FAVICONS_FILE), records::favicons).await?;
        info!(%source, count = favicons.len(), "Loaded favicons");

        let (anime, source) = load_or(dir.join(ANIME_FILE), records::anime_list).await?;
        info!(%source, count = anime.len(), "Loaded anime catalog");

        let (projects, source) = load_or(dir.join(PROJECTS_FILE), records::projects).await?;
        info!(%source, count = projects.len(), "Loaded project catalog");

        Ok(Self {
            favicons: favicons.into(),
            anime: anime.into(),
            projects: projects.into(),
        })
    }

    /// Write every catalog and the derived project views as pretty JSON
    pub async fn export(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        let mut written = Vec::with_capacity(5);
        written.push(write_json(dir, "favicons.json", &self.favicons).await?);
        written.push(write_json(dir, "anime.json", &self.anime).await?);
        written.push(write_json(dir, "projects.json", &self.projects).await?);
        written.push(write_json(dir, "project-stats.json", &self.projects.stats()).await?);
        written.push(write_json(dir, "tech-stack.json", &self.projects.all_tech_stack()).await?);

        info!(dir = %dir.display(), files = written.len(), "Exported site content");
        Ok(written)
    }
}

/// Read a YAML sequence from `path`, or fall back to `default` when absent
async fn load_or<T, F>(path: PathBuf, default: F) -> Result<(Vec<T>, Source)>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    if !path.exists() {
        return Ok((default(), Source::Builtin));
    }

    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    let items = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))?;

    Ok((items, Source::File(path)))
}

async fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(value)?;

    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    debug!(path = %path.display(), "Wrote export file");
    Ok(path)
}

// ============================================================================
// Builtin snapshot accessors
// ============================================================================

/// Get the builtin snapshot (built once, then shared)
pub fn builtin() -> &'static SiteContent {
    BUILTIN.get_or_init(SiteContent::builtin)
}

/// Project counts over the builtin catalog
pub fn project_stats() -> ProjectStats {
    builtin().projects.stats()
}

/// Builtin projects in `category` (`None`, `""` or `"all"` for every project)
pub fn projects_by_category(category: Option<&str>) -> Vec<&'static Project> {
    builtin().projects.by_category(category)
}

/// Featured builtin projects
pub fn featured_projects() -> Vec<&'static Project> {
    builtin().projects.featured()
}

/// Sorted, deduplicated tech stack of the builtin projects
pub fn all_tech_stack() -> Vec<String> {
    builtin().projects.all_tech_stack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let a = builtin() as *const SiteContent;
        let b = builtin() as *const SiteContent;
        assert_eq!(a, b);
        assert_eq!(builtin(), &SiteContent::builtin());
    }

    #[test]
    fn test_builtin_sizes() {
        let content = SiteContent::builtin();
        assert_eq!(content.favicons.len(), 2);
        assert_eq!(content.anime.len(), 4);
        assert_eq!(content.projects.len(), 3);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Builtin.to_string(), "builtin");
        assert_eq!(
            Source::File(PathBuf::from("/tmp/anime.yaml")).to_string(),
            "/tmp/anime.yaml"
        );
    }

    #[tokio::test]
    async fn test_load_without_dir_is_builtin() {
        let content = SiteContent::load(None).await.unwrap();
        assert_eq!(content, SiteContent::builtin());
    }

    #[tokio::test]
    async fn test_load_missing_dir_is_builtin() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let content = SiteContent::load(Some(&missing)).await.unwrap();
        assert_eq!(content, SiteContent::builtin());
    }
}
