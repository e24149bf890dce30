//! Anime watch-status records.
//!
//! Records carry `progress` and `total_episodes` side by side; nothing here
//! enforces `progress <= total_episodes`. See [`crate::check`] for reporting.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Viewing status of an anime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimeStatus {
    Watching,
    Completed,
    Planned,
}

impl AnimeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimeStatus::Watching => "watching",
            AnimeStatus::Completed => "completed",
            AnimeStatus::Planned => "planned",
        }
    }
}

impl std::fmt::Display for AnimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnimeStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "watching" => Ok(AnimeStatus::Watching),
            "completed" => Ok(AnimeStatus::Completed),
            "planned" => Ok(AnimeStatus::Planned),
            _ => anyhow::bail!("Unknown anime status: {}", s),
        }
    }
}

/// A single anime entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRecord {
    pub title: String,

    pub status: AnimeStatus,

    /// Personal rating on a 0-10 scale
    pub rating: f32,

    /// Cover image path
    pub cover: String,

    /// Human-readable episode summary, e.g. "28 episodes"
    pub episodes: String,

    pub year: String,

    pub season: String,

    /// Genres in display order
    #[serde(default)]
    pub genre: Vec<String>,

    pub studio: String,

    /// External page for the series
    pub link: String,

    /// Episodes watched so far
    pub progress: u32,

    pub total_episodes: u32,

    /// Year-month the series started airing ("YYYY-MM")
    pub start_date: String,

    /// Year-month the series finished airing ("YYYY-MM")
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anime_status_round_trips_through_display() {
        for status in [
            AnimeStatus::Watching,
            AnimeStatus::Completed,
            AnimeStatus::Planned,
        ] {
            assert_eq!(status.to_string().parse::<AnimeStatus>().unwrap(), status);
        }
        assert!("dropped".parse::<AnimeStatus>().is_err());
    }

    #[test]
    fn test_anime_record_uses_camel_case_fields() {
        let yaml = r#"
title: Test Show
status: watching
rating: 8.5
cover: /assets/anime/test.webp
episodes: 12 episodes
year: "2024"
season: "1"
genre: [Comedy]
studio: Studio
link: https://example.com/show
progress: 3
totalEpisodes: 12
startDate: "2024-01"
endDate: "2024-03"
"#;
        let record: AnimeRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.status, AnimeStatus::Watching);
        assert_eq!(record.total_episodes, 12);
        assert_eq!(record.start_date, "2024-01");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["totalEpisodes"], 12);
        assert_eq!(json["endDate"], "2024-03");
    }
}
