//! Data-entry checks for content catalogs.
//!
//! The catalogs accept whatever they are given. This module only reports
//! records that break the conventions the site relies on:
//! - anime progress must not exceed the episode count
//! - anime ratings stay within 0-10
//! - project IDs are unique
//! - dates parse (anime "YYYY-MM", projects "YYYY-MM-DD") and end on or after they start

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::content::SiteContent;
use crate::domain::{AnimeRecord, Project};

pub const MAX_RATING: f32 = 10.0;

const ANIME_DATE_FORMAT: &str = "%Y-%m";
const PROJECT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A record that breaks a content convention
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentIssue {
    #[error("Anime '{title}': progress {progress} exceeds {total} episodes")]
    ProgressExceedsTotal {
        title: String,
        progress: u32,
        total: u32,
    },

    #[error("Anime '{title}': rating {rating} outside 0-10")]
    RatingOutOfRange { title: String, rating: f32 },

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    #[error("'{record}': {field} '{value}' is not a valid date (expected {expected})")]
    InvalidDate {
        record: String,
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("'{record}': end date {end} is before start date {start}")]
    EndBeforeStart {
        record: String,
        start: String,
        end: String,
    },
}

/// Check every catalog in `content`
pub fn check(content: &SiteContent) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    for record in content.anime.items() {
        check_anime(record, &mut issues);
    }

    let mut seen = HashSet::new();
    for project in content.projects.items() {
        if !seen.insert(project.id.as_str()) {
            issues.push(ContentIssue::DuplicateProjectId(project.id.clone()));
        }
        check_project(project, &mut issues);
    }

    issues
}

fn check_anime(record: &AnimeRecord, issues: &mut Vec<ContentIssue>) {
    if record.progress > record.total_episodes {
        issues.push(ContentIssue::ProgressExceedsTotal {
            title: record.title.clone(),
            progress: record.progress,
            total: record.total_episodes,
        });
    }

    // NaN fails the range check too
    if !(0.0..=MAX_RATING).contains(&record.rating) {
        issues.push(ContentIssue::RatingOutOfRange {
            title: record.title.clone(),
            rating: record.rating,
        });
    }

    let start = parse_year_month(&record.title, "startDate", &record.start_date, issues);
    let end = parse_year_month(&record.title, "endDate", &record.end_date, issues);
    check_order(&record.title, start, end, issues);
}

fn check_project(project: &Project, issues: &mut Vec<ContentIssue>) {
    let start = parse_date(&project.id, "startDate", &project.start_date, issues);
    let end = project
        .end_date
        .as_deref()
        .and_then(|end| parse_date(&project.id, "endDate", end, issues));
    check_order(&project.id, start, end, issues);
}

fn parse_year_month(
    record: &str,
    field: &'static str,
    value: &str,
    issues: &mut Vec<ContentIssue>,
) -> Option<(NaiveDate, String)> {
    // chrono needs a day to build a date, and accepts unpadded months
    let parsed = NaiveDate::parse_from_str(&format!("{value}-01"), PROJECT_DATE_FORMAT)
        .ok()
        .filter(|_| value.len() == "YYYY-MM".len());
    match parsed {
        Some(date) => Some((date, value.to_string())),
        None => {
            issues.push(invalid_date(record, field, value, ANIME_DATE_FORMAT));
            None
        }
    }
}

fn parse_date(
    record: &str,
    field: &'static str,
    value: &str,
    issues: &mut Vec<ContentIssue>,
) -> Option<(NaiveDate, String)> {
    let parsed = NaiveDate::parse_from_str(value, PROJECT_DATE_FORMAT)
        .ok()
        .filter(|_| value.len() == "YYYY-MM-DD".len());
    match parsed {
        Some(date) => Some((date, value.to_string())),
        None => {
            issues.push(invalid_date(record, field, value, PROJECT_DATE_FORMAT));
            None
        }
    }
}

fn invalid_date(
    record: &str,
    field: &'static str,
    value: &str,
    expected: &'static str,
) -> ContentIssue {
    ContentIssue::InvalidDate {
        record: record.to_string(),
        field,
        value: value.to_string(),
        expected,
    }
}

fn check_order(
    record: &str,
    start: Option<(NaiveDate, String)>,
    end: Option<(NaiveDate, String)>,
    issues: &mut Vec<ContentIssue>,
) {
    if let (Some((start, start_raw)), Some((end, end_raw))) = (start, end) {
        if end < start {
            issues.push(ContentIssue::EndBeforeStart {
                record: record.to_string(),
                start: start_raw,
                end: end_raw,
            });
        }
    }
}
