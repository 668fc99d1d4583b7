// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Site content serialization and deserialization.
//!
//! This module handles loading and exporting site content in YAML and JSON
//! formats. The format is picked from the file extension.

use crate::models::content::SiteContent;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export site content to YAML format.
pub fn export_yaml(data: &SiteContent, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export site content to JSON format.
pub fn export_json(data: &SiteContent, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Import site content from YAML format.
pub fn import_yaml(path: &Path) -> Result<SiteContent> {
    let yaml = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let data = serde_yaml::from_str(&yaml)
        .with_context(|| format!("parsing YAML content {}", path.display()))?;
    Ok(data)
}

/// Import site content from JSON format.
pub fn import_json(path: &Path) -> Result<SiteContent> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let data = serde_json::from_str(&json)
        .with_context(|| format!("parsing JSON content {}", path.display()))?;
    Ok(data)
}

/// Load and validate a content file, choosing the format by extension.
pub fn load_content(path: &Path) -> Result<SiteContent> {
    let extension = path.extension().and_then(|s| s.to_str());
    let content = match extension {
        Some("yaml") | Some("yml") => import_yaml(path)?,
        Some("json") => import_json(path)?,
        _ => bail!("Unsupported file extension: {:?}", extension),
    };
    content
        .validate()
        .with_context(|| format!("invalid content in {}", path.display()))?;
    log::info!(
        "Loaded content from {}: {} projects, {} pages",
        path.display(),
        content.projects.len(),
        content.pages.len()
    );
    Ok(content)
}

/// Export content, choosing the format by extension.
pub fn export_content(data: &SiteContent, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}
