// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the site content and the per-page
//! interaction state, and wires the page, nav dots and header together
//! each frame.

use crate::config::InteractionConfig;
use crate::interaction::{
    carousel::Carousel,
    nav_dots::{nav_dots, NavDotAction},
    navigation::{resolve_anchor, PendingNavigation, SmoothScroll},
    scroll_tracker::ScrollTracker,
};
use crate::io::media::LoadedImage;
use crate::models::content::{Page, SiteContent};
use crate::ui::{header, nav_dots as nav_dots_ui, page};
use crate::util::clock::{Clock, FrameClock};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Result of loading one project's media on the background thread.
type ThumbnailResult = (String, Result<LoadedImage, String>);

/// Per-page interaction state.
struct PageState {
    tracker: ScrollTracker,
    carousel: Carousel,
}

/// Main application state.
pub struct FolioApp {
    /// Site content being displayed
    content: SiteContent,

    /// Currently displayed page
    page: Page,

    /// Scroll tracking and carousel state of each page
    pages: HashMap<Page, PageState>,

    /// Programmatic scroll of the current page
    smooth_scroll: SmoothScroll,

    /// Cross-page link waiting for its page to settle
    pending: Option<PendingNavigation>,

    /// Measurements of the last rendered frame
    last_view: Option<page::PageView>,

    /// Uploaded project cover images, keyed by media path
    thumbnails: HashMap<String, egui::TextureHandle>,

    /// Receiver for background thumbnail loading
    thumbnail_loader: Option<Receiver<Vec<ThumbnailResult>>>,
}

impl Default for FolioApp {
    fn default() -> Self {
        Self::new(SiteContent::default())
    }
}

impl FolioApp {
    /// Create a new application instance showing `content`.
    pub fn new(content: SiteContent) -> Self {
        let mut app = Self {
            smooth_scroll: SmoothScroll::new(content.interaction.smooth_scroll_speed),
            content: SiteContent::default(),
            page: Page::Home,
            pages: HashMap::new(),
            pending: None,
            last_view: None,
            thumbnails: HashMap::new(),
            thumbnail_loader: None,
        };
        app.set_content(content);
        app
    }

    fn config(&self) -> &InteractionConfig {
        &self.content.interaction
    }

    /// Replace the displayed content and reset all interaction state.
    fn set_content(&mut self, content: SiteContent) {
        self.pages = content
            .pages
            .iter()
            .map(|layout| {
                let state = PageState {
                    tracker: ScrollTracker::new(layout.sections.clone(), &content.interaction),
                    carousel: Carousel::new(content.projects.len(), &content.interaction),
                };
                (layout.page, state)
            })
            .collect();
        self.smooth_scroll = SmoothScroll::new(content.interaction.smooth_scroll_speed);
        self.pending = None;
        self.last_view = None;
        self.thumbnails.clear();
        self.start_thumbnail_loading(&content);

        log::info!(
            "Showing content for {} ({} pages, {} projects)",
            content.owner,
            content.pages.len(),
            content.projects.len()
        );
        self.content = content;
    }

    /// Load a content file from disk, keeping the current content on failure.
    fn open_content_file(&mut self, path: PathBuf) {
        match crate::io::serialization::load_content(&path) {
            Ok(content) => self.set_content(content),
            Err(e) => log::error!("Failed to load content: {:#}", e),
        }
    }

    /// Export the current content to a file.
    fn export_content(&self, path: PathBuf) {
        match crate::io::serialization::export_content(&self.content, &path) {
            Ok(_) => log::info!("Exported content to {}", path.display()),
            Err(e) => log::error!("Failed to export content: {:#}", e),
        }
    }

    /// Decode every project's media on a background thread.
    fn start_thumbnail_loading(&mut self, content: &SiteContent) {
        let media: Vec<String> = content.projects.iter().filter_map(|p| p.media.clone()).collect();
        if media.is_empty() {
            self.thumbnail_loader = None;
            return;
        }

        let (sender, receiver) = channel();
        self.thumbnail_loader = Some(receiver);

        std::thread::spawn(move || {
            let results = media
                .into_iter()
                .map(|path| {
                    let loaded = crate::io::media::load_image(std::path::Path::new(&path))
                        .map_err(|e| format!("{:#}", e));
                    (path, loaded)
                })
                .collect();
            let _ = sender.send(results);
        });
    }

    /// Upload finished thumbnails. Failed ones keep their placeholder.
    fn poll_thumbnails(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.thumbnail_loader else {
            return;
        };
        let Ok(results) = receiver.try_recv() else {
            ctx.request_repaint();
            return;
        };
        self.thumbnail_loader = None;

        for (path, result) in results {
            match result {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(path.clone(), color_image, egui::TextureOptions::LINEAR);
                    self.thumbnails.insert(path, texture);
                }
                Err(e) => log::warn!("Using placeholder for {}: {}", path, e),
            }
        }
        log::info!("Loaded {} project thumbnails", self.thumbnails.len());
    }

    /// Switch to `page`, optionally scrolling to `anchor` once it has settled.
    fn navigate(&mut self, page: Page, anchor: Option<String>, clock: &dyn Clock) {
        if page != self.page {
            log::info!("Navigating to {}", page.route());
            self.page = page;
            self.smooth_scroll.cancel();
            self.last_view = None;
        }
        self.pending = anchor.map(|anchor| PendingNavigation::new(page, anchor, clock));
    }

    /// Start a smooth scroll to a section of the current page.
    fn scroll_to_section(&mut self, id: &str) {
        let Some(ref view) = self.last_view else {
            return;
        };
        let target = resolve_anchor(id, &view.anchors, view.content_height, view.viewport_height);
        let current = self
            .pages
            .get(&self.page)
            .map_or(view.offset, |state| state.tracker.state().offset);
        log::debug!("Scrolling to '{}' at {:.0} from {:.0}", id, target, current);
        // The tracker alone decides the active section as the page moves
        self.smooth_scroll.scroll_to(current, target);
    }

    /// Run a pending cross-page scroll once its delay has passed.
    fn poll_pending_navigation(&mut self, ctx: &egui::Context, clock: &dyn Clock) {
        let Some(pending) = self.pending.clone() else {
            return;
        };
        if pending.page != self.page {
            self.pending = None;
            return;
        }
        if pending.is_due(clock, self.config().navigation_delay) && self.last_view.is_some() {
            self.pending = None;
            self.scroll_to_section(&pending.anchor);
        } else {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let clock = FrameClock::from_context(ctx);

        self.poll_thumbnails(ctx);
        self.poll_pending_navigation(ctx, &clock);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Content...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Content", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_content_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Export Content", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("site.yaml")
                                .save_file()
                            {
                                self.export_content(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("site.json")
                                .save_file()
                            {
                                self.export_content(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Page tabs
        let selected_page = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| header::show(ui, &self.content.owner, self.page))
            .inner;
        if let Some(page) = selected_page {
            self.navigate(page, None, &clock);
        }

        let scroll_override = self.smooth_scroll.tick();
        if self.smooth_scroll.is_animating() {
            ctx.request_repaint();
        }

        // Page body
        let current = self.page;
        let (view, page_action, mobile) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let mobile = self.content.interaction.is_mobile(ui.available_width());
                let Some(layout) = self.content.page(current) else {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("No content for {}", current.route()));
                    });
                    return (None, page::PageAction::None, mobile);
                };
                let Some(state) = self.pages.get_mut(&current) else {
                    return (None, page::PageAction::None, mobile);
                };
                let (view, action) = page::show(
                    ui,
                    page::PageContext {
                        site: &self.content,
                        layout,
                        carousel: &mut state.carousel,
                        thumbnails: &self.thumbnails,
                        mobile,
                    },
                    scroll_override,
                );
                (Some(view), action, mobile)
            })
            .inner;

        let Some(view) = view else {
            return;
        };

        if view.user_scrolled && self.smooth_scroll.is_animating() {
            self.smooth_scroll.cancel();
        }

        // Track the active section and show the nav dots
        let mut dot_action = NavDotAction::None;
        if let Some(state) = self.pages.get_mut(&current) {
            state.tracker.update(view.offset, view.viewport_height, &view.bounds);
            if state.tracker.nav_visible() && !mobile {
                let dots = nav_dots(state.tracker.sections(), state.tracker.active());
                dot_action = nav_dots_ui::show(ctx, &dots);
            }
        }
        self.last_view = Some(view);

        if let NavDotAction::Select(id) = dot_action {
            self.scroll_to_section(&id);
        }

        match page_action {
            page::PageAction::ScrollTo(id) => self.scroll_to_section(&id),
            page::PageAction::NavigateTo { page, anchor } => self.navigate(page, Some(anchor), &clock),
            page::PageAction::None => {}
        }
    }
}
