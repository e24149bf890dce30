//! Records compiled into the binary.

use crate::domain::{
    AnimeRecord, AnimeStatus, Favicon, Project, ProjectCategory, ProjectStatus, Theme,
};

pub fn favicons() -> Vec<Favicon> {
    vec![
        Favicon::new("/favicon/favicon.png", Theme::Light, "64x64"),
        Favicon::new("/favicon/favicon.png", Theme::Dark, "64x64"),
    ]
}

const SPY_FAMILY_STUDIO: &str = "WIT STUDIO × CloverWorks";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn anime_list() -> Vec<AnimeRecord> {
    vec![
        AnimeRecord {
            title: "Frieren: Beyond Journey's End".into(),
            status: AnimeStatus::Completed,
            rating: 9.9,
            cover: "/assets/anime/zsdfll.webp".into(),
            episodes: "28 episodes".into(),
            year: "2023".into(),
            season: "1".into(),
            genre: strings(&["Adventure", "Fantasy", "Magic"]),
            studio: "MADHOUSE".into(),
            link: "https://www.bilibili.com/bangumi/media/md21087073".into(),
            progress: 28,
            total_episodes: 28,
            start_date: "2023-10".into(),
            end_date: "2024-03".into(),
        },
        AnimeRecord {
            title: "Spy × Family Season 1".into(),
            status: AnimeStatus::Completed,
            rating: 9.7,
            cover: "/assets/anime/jdgjj1.webp".into(),
            episodes: "25 episodes".into(),
            year: "2022".into(),
            season: "1".into(),
            genre: strings(&["Adventure", "Battle", "Daily", "Funny"]),
            studio: SPY_FAMILY_STUDIO.into(),
            link: "https://www.bilibili.com/bangumi/media/md27709925".into(),
            progress: 25,
            total_episodes: 25,
            start_date: "2022-05".into(),
            end_date: "2022-12".into(),
        },
        AnimeRecord {
            title: "Spy × Family Season 2".into(),
            status: AnimeStatus::Completed,
            rating: 9.7,
            cover: "/assets/anime/jdgjj2.webp".into(),
            episodes: "37 episodes".into(),
            year: "2023".into(),
            season: "2".into(),
            genre: strings(&["Adventure", "Battle", "Daily", "Funny"]),
            studio: SPY_FAMILY_STUDIO.into(),
            link: "https://www.bilibili.com/bangumi/media/md21086686".into(),
            progress: 37,
            total_episodes: 37,
            start_date: "2023-10".into(),
            end_date: "2023-12".into(),
        },
        // Summary says 14 while the total says 13; kept as entered.
        AnimeRecord {
            title: "Spy × Family Season 3".into(),
            status: AnimeStatus::Watching,
            rating: 8.8,
            cover: "/assets/anime/jdgjj3.webp".into(),
            episodes: "14 episodes".into(),
            year: "2025".into(),
            season: "3".into(),
            genre: strings(&["Adventure", "Action", "Daily", "Funny"]),
            studio: SPY_FAMILY_STUDIO.into(),
            link: "https://www.bilibili.com/bangumi/media/md27709925".into(),
            progress: 1,
            total_episodes: 13,
            start_date: "2025-10".into(),
            end_date: "2025-12".into(),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "PsyGoose-blog",
            "PsyGoose Blog",
            ProjectCategory::Web,
            ProjectStatus::InProgress,
            "2025-12-25",
        )
        .with_description(
            "一个基于Astro框架，Mizuki主题的现代化静态博客，主要记录作为TA技术美术的道路上所学习的技能与分享。",
        )
        .with_tech(["Astro", "TypeScript", "Tailwind CSS", "Svelte"])
        .with_source_code("https://github.com/LewisZhao97/Mizuki_PsyGoose_Blog")
        .with_visit_url("https://psygooseblog.vercel.app/")
        .featured()
        .with_tags(["Blog", "Technical Artist", "Sharing"]),
        Project::new(
            "Unity GooseRP",
            "Unity Goose Render Pipeline",
            ProjectCategory::Graphics,
            ProjectStatus::Planned,
            "2026-03-01",
        )
        .with_description("基于Unity Universal Render Pipeline的自定义卡通渲染管线")
        .with_tech(["Unity", "C#", "HLSL", "Shader"])
        .with_tags(["Universal RP", "Custom RP", "Toon Rendering", "Shader"]),
        Project::new(
            "UE5 Toon RP",
            "UE5 Custom Render Pipeline",
            ProjectCategory::Graphics,
            ProjectStatus::Planned,
            "2026-05-01",
        )
        .with_description("基于Unreal Engine 5.7源码的自定义卡通光照模型渲染管线的开发")
        .with_tech(["Unreal Engine", "C++", "HLSL", "Shader"])
        .with_tags(["Unreal Engine", "Source Code", "Toon Rendering", "Shader"]),
    ]
}
