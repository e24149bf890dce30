//! Command-line interface for site-content.
//!
//! Prints the catalogs, runs the project queries, checks the data and
//! exports everything as JSON for the site build.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::warn;

use crate::check;
use crate::config;
use crate::content::SiteContent;
use crate::domain::{Project, ProjectCategory, Theme};

/// site-content - Static content catalogs for a personal website
#[derive(Parser, Debug)]
#[command(name = "site-content")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory with content YAML files (overrides configuration)
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Ignore content files and use the builtin records
    #[arg(long, global = true)]
    pub builtin: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects
    Projects {
        /// Category to filter by ("all" or empty for every project)
        #[arg(short, long)]
        category: Option<String>,

        /// Only featured projects
        #[arg(short, long)]
        featured: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show project counts by status
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// List every technology used across projects
    Tech {
        #[arg(long)]
        json: bool,
    },

    /// List anime records
    Anime {
        #[arg(long)]
        json: bool,
    },

    /// List favicon entries
    Favicons {
        /// Only entries for this theme
        #[arg(short, long, value_enum)]
        theme: Option<ThemeArg>,

        #[arg(long)]
        json: bool,
    },

    /// Report records that break content conventions
    Check,

    /// Write catalogs and derived views as JSON files
    Export {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Theme for CLI (maps to Theme)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        if let Commands::Config = self.command {
            return show_config();
        }

        let content = self.load_content().await?;

        match self.command {
            Commands::Projects {
                category,
                featured,
                json,
            } => list_projects(&content, category.as_deref(), featured, json),
            Commands::Stats { json } => show_stats(&content, json),
            Commands::Tech { json } => list_tech(&content, json),
            Commands::Anime { json } => list_anime(&content, json),
            Commands::Favicons { theme, json } => list_favicons(&content, theme, json),
            Commands::Check => check_content(&content),
            Commands::Export { out } => export_content(&content, out).await,
            Commands::Config => show_config(),
        }
    }

    async fn load_content(&self) -> Result<SiteContent> {
        if self.builtin {
            return Ok(SiteContent::builtin());
        }

        let dir = match &self.content_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    anyhow::bail!("Content directory not found: {}", dir.display());
                }
                dir.clone()
            }
            None => config::content_dir()?,
        };

        SiteContent::load(Some(&dir)).await
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// List projects, optionally filtered
fn list_projects(
    content: &SiteContent,
    category: Option<&str>,
    featured_only: bool,
    json: bool,
) -> Result<()> {
    if let Some(category) = category {
        if !category.is_empty()
            && category != crate::catalog::ALL_CATEGORIES
            && category.parse::<ProjectCategory>().is_err()
        {
            warn!(category, "Unknown category, nothing will match");
        }
    }

    let projects: Vec<&Project> = content
        .projects
        .by_category(category)
        .into_iter()
        .filter(|p| !featured_only || p.featured)
        .collect();

    if json {
        return print_json(&projects);
    }

    if projects.is_empty() {
        println!("No projects found");
        return Ok(());
    }

    println!(
        "{:<16} {:<10} {:<12} {:<3} {:<40}",
        "ID", "CATEGORY", "STATUS", "★", "TITLE"
    );
    println!("{}", "-".repeat(85));

    for project in &projects {
        println!(
            "{:<16} {:<10} {:<12} {:<3} {:<40}",
            truncate(&project.id, 16),
            project.category.as_str(),
            project.status.as_str(),
            if project.featured { "★" } else { "" },
            truncate(&project.title, 40)
        );
    }

    println!("\nTotal: {} projects", projects.len());

    Ok(())
}

/// Show project counts by status
fn show_stats(content: &SiteContent, json: bool) -> Result<()> {
    let stats = content.projects.stats();

    if json {
        return print_json(&stats);
    }

    println!("Projects:      {}", stats.total);
    println!("  Completed:   {}", stats.by_status.completed);
    println!("  In progress: {}", stats.by_status.in_progress);
    println!("  Planned:     {}", stats.by_status.planned);

    Ok(())
}

/// List the deduplicated tech stack
fn list_tech(content: &SiteContent, json: bool) -> Result<()> {
    let tech = content.projects.all_tech_stack();

    if json {
        return print_json(&tech);
    }

    for name in &tech {
        println!("{}", name);
    }

    Ok(())
}

/// List anime records in catalog order
fn list_anime(content: &SiteContent, json: bool) -> Result<()> {
    if json {
        return print_json(&content.anime);
    }

    if content.anime.is_empty() {
        println!("No anime records");
        return Ok(());
    }

    println!(
        "{:<36} {:<10} {:>6} {:>9} {:<17}",
        "TITLE", "STATUS", "RATING", "PROGRESS", "AIRED"
    );
    println!("{}", "-".repeat(82));

    for record in content.anime.items() {
        println!(
            "{:<36} {:<10} {:>6.1} {:>9} {:<17}",
            truncate(&record.title, 36),
            record.status.as_str(),
            record.rating,
            format!("{}/{}", record.progress, record.total_episodes),
            format!("{} → {}", record.start_date, record.end_date)
        );
    }

    println!("\nTotal: {} records", content.anime.len());

    Ok(())
}

/// List favicon entries
fn list_favicons(content: &SiteContent, theme: Option<ThemeArg>, json: bool) -> Result<()> {
    let favicons = match theme {
        Some(theme) => content.favicons.for_theme(theme.into()),
        None => content.favicons.items().iter().collect(),
    };

    if json {
        return print_json(&favicons);
    }

    println!("{:<6} {:<8} {:<40}", "THEME", "SIZES", "SRC");
    println!("{}", "-".repeat(56));

    for icon in favicons {
        println!("{:<6} {:<8} {:<40}", icon.theme.as_str(), icon.sizes, icon.src);
    }

    Ok(())
}

/// Run the content check; fails when any issue is found
fn check_content(content: &SiteContent) -> Result<()> {
    let issues = check::check(content);

    if issues.is_empty() {
        println!(
            "✅ Content OK ({} favicons, {} anime, {} projects)",
            content.favicons.len(),
            content.anime.len(),
            content.projects.len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("❌ {}", issue);
    }

    anyhow::bail!("{} content issue(s) found", issues.len())
}

/// Export the content as JSON
async fn export_content(content: &SiteContent, out: Option<PathBuf>) -> Result<()> {
    let dir = match out {
        Some(dir) => dir,
        None => config::export_dir()?,
    };

    let written = content.export(&dir).await?;

    eprintln!("📦 Exported {} files to {}", written.len(), dir.display());
    for path in &written {
        eprintln!("   {}", path.display());
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Config file: {}", cfg.config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "(none - using defaults)".to_string()));
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!(
        "  Content: {}{}",
        cfg.content_dir.display(),
        if cfg.content_dir.is_dir() { "" } else { " (missing - builtin records)" }
    );
    println!("  Export:  {}", cfg.export_dir.display());

    Ok(())
}
