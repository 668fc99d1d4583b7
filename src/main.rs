// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a desktop portfolio showcase
//!
//! Presents a content creator's work, stats and contact details as a set of
//! scrollable pages with section nav dots and drag-to-scroll project
//! carousels.

mod app;
mod config;
mod interaction;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::FolioApp;
use models::content::SiteContent;
use std::path::PathBuf;

/// Environment variable naming a content file when no argument is given.
const CONTENT_ENV: &str = "FOLIO_CONTENT";

/// Content file from the first argument or the environment, if any.
fn content_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONTENT_ENV).map(PathBuf::from))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let content = match content_path() {
        Some(path) => io::serialization::load_content(&path)
            .with_context(|| format!("loading content file {}", path.display()))?,
        None => {
            log::info!("No content file given, using built-in content");
            SiteContent::default()
        }
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title(format!("{} - Folio", content.owner)),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new(content)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
