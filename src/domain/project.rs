//! Portfolio project records.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Other,
    Graphics,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Desktop,
        ProjectCategory::Other,
        ProjectCategory::Graphics,
    ];

    /// Canonical spelling, as used by category filters
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Desktop => "desktop",
            ProjectCategory::Other => "other",
            ProjectCategory::Graphics => "graphics",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| anyhow::anyhow!("Unknown project category: {}", s))
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ProjectStatus::Completed),
            "in-progress" | "in_progress" => Ok(ProjectStatus::InProgress),
            "planned" => Ok(ProjectStatus::Planned),
            _ => anyhow::bail!("Unknown project status: {}", s),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier, unique within a catalog by convention
    pub id: String,

    pub title: String,

    pub description: String,

    /// Preview image path (may be empty)
    #[serde(default)]
    pub image: String,

    pub category: ProjectCategory,

    /// Technologies used, in display order
    #[serde(default)]
    pub tech_stack: Vec<String>,

    pub status: ProjectStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,

    /// "YYYY-MM-DD"
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Link to the running project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_url: Option<String>,
}

impl Project {
    /// Create a project with the required fields; optional fields start empty
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ProjectCategory,
        status: ProjectStatus,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            category,
            tech_stack: Vec::new(),
            status,
            live_demo: None,
            source_code: None,
            start_date: start_date.into(),
            end_date: None,
            featured: false,
            tags: Vec::new(),
            visit_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tech(mut self, tech: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tech_stack.extend(tech.into_iter().map(Into::into));
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_source_code(mut self, url: impl Into<String>) -> Self {
        self.source_code = Some(url.into());
        self
    }

    pub fn with_live_demo(mut self, url: impl Into<String>) -> Self {
        self.live_demo = Some(url.into());
        self
    }

    pub fn with_visit_url(mut self, url: impl Into<String>) -> Self {
        self.visit_url = Some(url.into());
        self
    }

    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}
