// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Site content data structures.
//!
//! This module defines the descriptive records shown on the site (projects,
//! stats, social links) and the page layout they are arranged in. The
//! built-in content is returned by `SiteContent::default()`; a content file
//! can replace it at startup.

use super::section::Section;
use crate::config::InteractionConfig;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A headline metric, e.g. "Followers: 120K".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A portfolio project shown as a carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Local path of the cover image. Missing or unreadable media falls back
    /// to a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Stat>,
}

/// A link to a social profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Top level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Work,
    About,
    Resources,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Work, Page::About, Page::Resources];

    /// Route path of the page.
    pub fn route(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Work => "/work",
            Page::About => "/about",
            Page::Resources => "/resources",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Work => "Work",
            Page::About => "About",
            Page::Resources => "Resources",
        }
    }
}

/// Section layout of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub page: Page,
    pub sections: Vec<Section>,
}

impl PageContent {
    /// Build a page from `(id, label)` pairs in document order.
    pub fn from_pairs(page: Page, pairs: &[(&str, &str)]) -> Self {
        let sections = pairs
            .iter()
            .enumerate()
            .map(|(ordinal, (id, label))| Section::new(*id, ordinal, *label))
            .collect();
        Self { page, sections }
    }
}

/// Everything the site displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub pages: Vec<PageContent>,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl SiteContent {
    /// Layout of `page`, if the content defines it.
    pub fn page(&self, page: Page) -> Option<&PageContent> {
        self.pages.iter().find(|p| p.page == page)
    }

    /// Check that every page lists its sections in ordinal order with unique
    /// ids, and that no page is defined twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen_pages = HashSet::new();
        for page in &self.pages {
            ensure!(
                seen_pages.insert(page.page),
                "page {} is defined more than once",
                page.page.route()
            );

            let mut seen_ids = HashSet::new();
            for (position, section) in page.sections.iter().enumerate() {
                ensure!(
                    section.ordinal == position,
                    "section '{}' on {} has ordinal {} but is at position {}",
                    section.id,
                    page.page.route(),
                    section.ordinal,
                    position
                );
                ensure!(
                    seen_ids.insert(section.id.as_str()),
                    "duplicate section id '{}' on {}",
                    section.id,
                    page.page.route()
                );
            }
        }
        Ok(())
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: "Maya Lindqvist".to_string(),
            tagline: "Content creation & digital marketing".to_string(),
            projects: vec![
                Project {
                    title: "Launch Week Campaign".to_string(),
                    description: "Short-form video series for a product launch across three platforms."
                        .to_string(),
                    media: None,
                    metrics: vec![Stat::new("Views", "2.4M"), Stat::new("Engagement", "8.1%")],
                },
                Project {
                    title: "Creator Studio Rebrand".to_string(),
                    description: "Visual identity refresh and content pillars for a studio channel."
                        .to_string(),
                    media: None,
                    metrics: vec![Stat::new("Subscribers", "+38%")],
                },
                Project {
                    title: "Evergreen Newsletter".to_string(),
                    description: "Weekly newsletter grown from zero with repurposed long-form content."
                        .to_string(),
                    media: None,
                    metrics: vec![Stat::new("Readers", "41K"), Stat::new("Open rate", "52%")],
                },
                Project {
                    title: "Brand Partnerships".to_string(),
                    description: "Sponsored integrations negotiated and produced end to end."
                        .to_string(),
                    media: None,
                    metrics: vec![Stat::new("Partners", "27")],
                },
            ],
            stats: vec![
                Stat::new("Followers", "350K+"),
                Stat::new("Videos produced", "600+"),
                Stat::new("Years creating", "7"),
            ],
            socials: vec![
                SocialLink {
                    platform: "YouTube".to_string(),
                    url: "https://youtube.com/@example".to_string(),
                },
                SocialLink {
                    platform: "Instagram".to_string(),
                    url: "https://instagram.com/example".to_string(),
                },
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/example".to_string(),
                },
            ],
            pages: vec![
                PageContent::from_pairs(
                    Page::Home,
                    &[
                        ("hero", "Intro"),
                        ("work", "Selected work"),
                        ("stats", "By the numbers"),
                        ("contact", "Contact"),
                    ],
                ),
                PageContent::from_pairs(
                    Page::Work,
                    &[("intro", "Work"), ("projects", "Projects"), ("process", "Process")],
                ),
                PageContent::from_pairs(
                    Page::About,
                    &[
                        ("story", "Story"),
                        ("services", "Services"),
                        ("stats", "Highlights"),
                        ("contact", "Contact"),
                    ],
                ),
                PageContent::from_pairs(Page::Resources, &[("coming-soon", "Resources")]),
            ],
            interaction: InteractionConfig::default(),
        }
    }
}
