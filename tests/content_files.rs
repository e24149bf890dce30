//! Content File Integration Tests
//!
//! Tests for loading catalogs from YAML files and exporting JSON.

use std::path::Path;

use site_content::check::check;
use site_content::{ContentIssue, ProjectStatus, SiteContent, Theme};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

const PROJECTS_YAML: &str = r#"
- id: site
  title: Personal Site
  description: The site itself
  category: web
  techStack: [Astro, Rust]
  status: completed
  startDate: "2024-01-01"
  endDate: "2024-06-30"
  featured: true
- id: shader-lab
  title: Shader Lab
  description: Experiments
  category: graphics
  techStack: [HLSL, Rust]
  status: in-progress
  startDate: "2025-02-01"
  tags: [Shader]
"#;

#[tokio::test]
async fn test_load_falls_back_per_file() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "projects.yaml", PROJECTS_YAML);

    let content = SiteContent::load(Some(temp.path())).await.unwrap();
    let builtin = SiteContent::builtin();

    // Projects come from the file, the rest is builtin
    assert_eq!(content.projects.len(), 2);
    assert_eq!(content.favicons, builtin.favicons);
    assert_eq!(content.anime, builtin.anime);

    let stats = content.projects.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_status.completed, 1);
    assert_eq!(stats.by_status.in_progress, 1);
    assert_eq!(stats.by_status.planned, 0);

    assert_eq!(content.projects.all_tech_stack(), vec!["Astro", "HLSL", "Rust"]);
    assert_eq!(content.projects.featured().len(), 1);
    assert_eq!(
        content.projects.get("shader-lab").map(|p| p.status),
        Some(ProjectStatus::InProgress)
    );
}

#[tokio::test]
async fn test_load_favicons_file() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "favicons.yaml",
        r#"
- src: /favicon/light-32.png
  theme: light
  sizes: 32x32
- src: /favicon/dark-32.png
  theme: dark
  sizes: 32x32
- src: /favicon/light-128.png
  theme: light
  sizes: 128x128
"#,
    );

    let content = SiteContent::load(Some(temp.path())).await.unwrap();

    let light: Vec<_> = content
        .favicons
        .for_theme(Theme::Light)
        .into_iter()
        .map(|f| f.sizes.as_str())
        .collect();
    assert_eq!(light, vec!["32x32", "128x128"]);
}

#[tokio::test]
async fn test_malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "anime.yaml",
        "- title: Missing fields\n  status: binge\n",
    );

    let err = SiteContent::load(Some(temp.path())).await.unwrap_err();
    assert!(err.to_string().contains("anime.yaml"));
}

#[tokio::test]
async fn test_loaded_data_is_checked_not_rejected() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "anime.yaml",
        r#"
- title: Overwatched
  status: watching
  rating: 7.5
  cover: /assets/anime/x.webp
  episodes: 12 episodes
  year: "2024"
  season: "1"
  genre: [Drama]
  studio: Studio
  link: https://example.com/x
  progress: 15
  totalEpisodes: 12
  startDate: "2024-04"
  endDate: "2024-06"
"#,
    );

    // Loading tolerates the bad entry
    let content = SiteContent::load(Some(temp.path())).await.unwrap();
    assert_eq!(content.anime.len(), 1);

    assert_eq!(
        check(&content),
        vec![ContentIssue::ProgressExceedsTotal {
            title: "Overwatched".to_string(),
            progress: 15,
            total: 12,
        }]
    );
}

#[tokio::test]
async fn test_export_writes_all_views() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("public").join("data");

    let written = SiteContent::builtin().export(&out).await.unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "favicons.json",
            "anime.json",
            "projects.json",
            "project-stats.json",
            "tech-stack.json",
        ]
    );

    let stats: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("project-stats.json")).unwrap())
            .unwrap();
    assert_eq!(
        stats,
        serde_json::json!({
            "total": 3,
            "byStatus": { "completed": 0, "inProgress": 1, "planned": 2 }
        })
    );

    let projects: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("projects.json")).unwrap())
            .unwrap();
    assert_eq!(projects[0]["id"], "PsyGoose-blog");
    assert_eq!(projects[0]["status"], "in-progress");
    assert_eq!(projects[0]["featured"], true);
    assert_eq!(projects[0]["visitUrl"], "https://psygooseblog.vercel.app/");
    assert!(projects[1].get("featured").is_none());
}

#[tokio::test]
async fn test_exported_catalogs_load_back() {
    let temp = TempDir::new().unwrap();
    let original = SiteContent::builtin();
    original.export(temp.path()).await.unwrap();

    // JSON is valid YAML, so an export can seed a content directory
    for (from, to) in [
        ("favicons.json", "favicons.yaml"),
        ("anime.json", "anime.yaml"),
        ("projects.json", "projects.yaml"),
    ] {
        std::fs::rename(temp.path().join(from), temp.path().join(to)).unwrap();
    }

    let loaded = SiteContent::load(Some(temp.path())).await.unwrap();
    assert_eq!(loaded, original);
}
