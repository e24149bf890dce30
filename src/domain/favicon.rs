//! Favicon descriptors.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Color theme a favicon is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => anyhow::bail!("Unknown theme: {}", s),
        }
    }
}

/// A single favicon entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favicon {
    /// Public path of the icon file
    pub src: String,

    /// Theme the icon targets
    pub theme: Theme,

    /// Icon dimensions, e.g. "64x64"
    pub sizes: String,
}

impl Favicon {
    pub fn new(src: impl Into<String>, theme: Theme, sizes: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            theme,
            sizes: sizes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_favicon_serializes_lowercase_theme() {
        let icon = Favicon::new("/favicon/favicon.png", Theme::Dark, "64x64");
        let json = serde_json::to_value(&icon).unwrap();

        assert_eq!(json["theme"], "dark");
        assert_eq!(json["src"], "/favicon/favicon.png");
        assert_eq!(json["sizes"], "64x64");
    }
}
