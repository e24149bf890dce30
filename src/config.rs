//! Configuration for site-content paths.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SITE_CONTENT_HOME, SITE_CONTENT_DIR, SITE_CONTENT_EXPORT)
//! 2. Config file (.site-content/config.yaml)
//! 3. Defaults (~/.site-content)
//!
//! Config file discovery:
//! - Searches current directory and parents for .site-content/config.yaml
//! - `home` is relative to the .site-content/ directory; `content` and
//!   `export` are relative to the project root (its parent)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_DIR: &str = ".site-content";
pub const CONFIG_FILE: &str = "config.yaml";

pub const ENV_HOME: &str = "SITE_CONTENT_HOME";
pub const ENV_CONTENT_DIR: &str = "SITE_CONTENT_DIR";
pub const ENV_EXPORT_DIR: &str = "SITE_CONTENT_EXPORT";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .site-content/)
    pub home: Option<String>,
    /// Directory holding YAML content files (relative to project root)
    pub content: Option<String>,
    /// Directory for JSON exports (relative to project root)
    pub export: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Base directory for defaults
    pub home: PathBuf,
    /// Directory searched for content files; builtin records fill the gaps
    pub content_dir: PathBuf,
    /// Where `export` writes JSON by default
    pub export_dir: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Environment overrides, captured once so resolution stays testable
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    home: Option<PathBuf>,
    content_dir: Option<PathBuf>,
    export_dir: Option<PathBuf>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            home: std::env::var(ENV_HOME).ok().map(PathBuf::from),
            content_dir: std::env::var(ENV_CONTENT_DIR).ok().map(PathBuf::from),
            export_dir: std::env::var(ENV_EXPORT_DIR).ok().map(PathBuf::from),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Combine config file, env overrides and defaults
fn resolve(
    config_path: Option<PathBuf>,
    env: EnvOverrides,
    default_home: PathBuf,
) -> Result<ResolvedConfig> {
    let file = match config_path {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };
    let paths = file.map(|f| f.paths).unwrap_or_default();

    // .site-content/ and the project root above it
    let config_dir = config_path.as_deref().and_then(Path::parent);
    let base_dir = config_dir.and_then(Path::parent).unwrap_or(Path::new("."));

    let home = env
        .home
        .or_else(|| {
            let dir = config_dir?;
            paths.home.as_deref().map(|h| resolve_path(dir, h))
        })
        .unwrap_or(default_home);

    let content_dir = env
        .content_dir
        .or_else(|| paths.content.as_deref().map(|c| resolve_path(base_dir, c)))
        .unwrap_or_else(|| home.join("content"));

    let export_dir = env
        .export_dir
        .or_else(|| paths.export.as_deref().map(|e| resolve_path(base_dir, e)))
        .unwrap_or_else(|| home.join("export"));

    Ok(ResolvedConfig {
        home,
        content_dir,
        export_dir,
        config_file: config_path,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    resolve(find_config_file(), EnvOverrides::from_env(), default_home)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the content directory
pub fn content_dir() -> Result<PathBuf> {
    Ok(config()?.content_dir.clone())
}

/// Get the default export directory
pub fn export_dir() -> Result<PathBuf> {
    Ok(config()?.export_dir.clone())
}
