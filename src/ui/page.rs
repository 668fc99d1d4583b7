// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scrollable page body.
//!
//! Renders a page's sections top to bottom inside a vertical scroll area and
//! measures where each one ended up, so the app can track the active
//! section and resolve scroll anchors on the next frame.

use crate::interaction::carousel::Carousel;
use crate::models::content::{Page, PageContent, SiteContent};
use crate::models::section::{Section, SectionBounds};
use crate::ui::carousel;
use crate::util::geometry::Span;
use std::collections::HashMap;

/// Fraction of the viewport each section fills at minimum.
const SECTION_MIN_HEIGHT: f32 = 0.85;

/// Measurements taken while rendering a page.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Vertical scroll offset after this frame
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
    /// Section bounds relative to the viewport top
    pub bounds: Vec<SectionBounds>,
    /// Section tops in content coordinates
    pub anchors: HashMap<String, f32>,
    /// Wheel, touchpad or drag scrolling by the user this frame
    pub user_scrolled: bool,
}

/// Result of page interaction.
pub enum PageAction {
    None,
    /// Scroll to a section of the current page.
    ScrollTo(String),
    /// Switch page, then scroll to a section once it has settled.
    NavigateTo { page: Page, anchor: String },
}

/// Everything a page needs to draw itself.
pub struct PageContext<'a> {
    pub site: &'a SiteContent,
    pub layout: &'a PageContent,
    pub carousel: &'a mut Carousel,
    pub thumbnails: &'a HashMap<String, egui::TextureHandle>,
    pub mobile: bool,
}

/// Display the page and measure its sections.
///
/// `scroll_to` forces the vertical offset this frame.
pub fn show(ui: &mut egui::Ui, page: PageContext<'_>, scroll_to: Option<f32>) -> (PageView, PageAction) {
    let PageContext {
        site,
        layout,
        carousel,
        thumbnails,
        mobile,
    } = page;

    let viewport_height = ui.available_height();
    let min_section_height = viewport_height * SECTION_MIN_HEIGHT;
    let mut action = PageAction::None;
    let mut spans: Vec<(String, f32, f32)> = Vec::with_capacity(layout.sections.len());

    let mut area = egui::ScrollArea::vertical()
        .id_source(layout.page.route())
        .auto_shrink([false, false]);
    if let Some(offset) = scroll_to {
        area = area.vertical_scroll_offset(offset);
    }

    let output = area.show(ui, |ui| {
        let origin = ui.min_rect().top();
        for section in &layout.sections {
            let response = egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(if mobile { 16.0 } else { 48.0 }, 24.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(min_section_height);
                    let section_action = show_section(ui, section, site, layout.page, carousel, thumbnails, mobile);
                    if !matches!(section_action, PageAction::None) {
                        action = section_action;
                    }
                })
                .response;
            spans.push((section.id.clone(), response.rect.top() - origin, response.rect.height()));
        }
    });

    let offset = output.state.offset.y;
    let (raw_delta, drag_origin) = ui.input(|i| {
        let origin = if i.pointer.is_decidedly_dragging() {
            i.pointer.press_origin()
        } else {
            None
        };
        (i.raw_scroll_delta.y, origin)
    });
    let view = PageView {
        offset,
        viewport_height: output.inner_rect.height(),
        content_height: output.content_size.y,
        bounds: spans
            .iter()
            .map(|(id, top, height)| SectionBounds::new(id.clone(), Span::from_start_height(top - offset, *height)))
            .collect(),
        anchors: spans.into_iter().map(|(id, top, _)| (id, top)).collect(),
        user_scrolled: is_user_scroll(raw_delta, drag_origin, output.inner_rect, carousel.is_dragging()),
    };

    (view, action)
}

/// Wheel input, or a drag that started on the page and is not moving a
/// carousel, means the user is scrolling.
fn is_user_scroll(
    raw_scroll_delta: f32,
    drag_origin: Option<egui::Pos2>,
    viewport: egui::Rect,
    carousel_dragging: bool,
) -> bool {
    if raw_scroll_delta != 0.0 {
        return true;
    }
    !carousel_dragging && drag_origin.map_or(false, |origin| viewport.contains(origin))
}

/// Render the body of one section.
fn show_section(
    ui: &mut egui::Ui,
    section: &Section,
    site: &SiteContent,
    page: Page,
    carousel: &mut Carousel,
    thumbnails: &HashMap<String, egui::TextureHandle>,
    mobile: bool,
) -> PageAction {
    let mut action = PageAction::None;

    match section.id.as_str() {
        "hero" => {
            let hero_text = |ui: &mut egui::Ui| {
                ui.heading(egui::RichText::new(&site.owner).size(if mobile { 32.0 } else { 48.0 }).strong());
                ui.label(egui::RichText::new(&site.tagline).size(18.0).weak());
            };
            let mut hero_buttons = |ui: &mut egui::Ui| {
                if ui.button("See my work").clicked() {
                    action = PageAction::ScrollTo("work".to_string());
                }
                if ui.button("Get in touch").clicked() {
                    action = PageAction::NavigateTo {
                        page: Page::About,
                        anchor: "contact".to_string(),
                    };
                }
            };

            if mobile {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    hero_text(ui);
                    ui.add_space(20.0);
                    hero_buttons(ui);
                });
            } else {
                ui.add_space(80.0);
                ui.columns(2, |columns| {
                    hero_text(&mut columns[0]);
                    columns[1].vertical(|ui| {
                        ui.add_space(24.0);
                        ui.horizontal(|ui| hero_buttons(ui));
                    });
                });
            }
        }
        "work" | "projects" => {
            ui.heading(section.label.as_str());
            ui.add_space(12.0);
            let height = if mobile { 360.0 } else { 320.0 };
            carousel::show(ui, &site.projects, carousel, thumbnails, mobile, height);
            if page == Page::Home {
                ui.add_space(12.0);
                if ui.link("All projects →").clicked() {
                    action = PageAction::NavigateTo {
                        page: Page::Work,
                        anchor: "projects".to_string(),
                    };
                }
            }
        }
        "stats" => {
            ui.heading(section.label.as_str());
            ui.add_space(12.0);
            let columns = if mobile { 1 } else { site.stats.len().max(1) };
            egui::Grid::new(("stats", page.route()))
                .num_columns(columns)
                .spacing([32.0, 16.0])
                .show(ui, |ui| {
                    for (i, stat) in site.stats.iter().enumerate() {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&stat.value).size(32.0).strong());
                            ui.label(egui::RichText::new(&stat.label).weak());
                        });
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
        "contact" => {
            ui.heading(section.label.as_str());
            ui.add_space(12.0);
            ui.label("Open to collaborations, sponsorships and consulting.");
            ui.add_space(8.0);
            for social in &site.socials {
                ui.hyperlink_to(social.platform.as_str(), social.url.as_str());
            }
        }
        "coming-soon" => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading(section.label.as_str());
                ui.label(egui::RichText::new("Templates and guides are on the way.").weak());
                ui.add_space(12.0);
                if ui.button("Ask for early access").clicked() {
                    // No form on this page; resolves to the bottom
                    action = PageAction::ScrollTo("contact-form".to_string());
                }
            });
        }
        _ => {
            ui.heading(section.label.as_str());
            ui.add_space(8.0);
            ui.label(egui::RichText::new(section_blurb(&section.id)).weak());
        }
    }

    action
}

/// Filler copy for text-only sections.
fn section_blurb(id: &str) -> &'static str {
    match id {
        "intro" => "Campaigns, channels and stories built for the feed.",
        "process" => "Research, script, shoot, edit, publish, measure. Then repeat with what we learned.",
        "story" => "Started on a phone camera, now running content for brands and creators alike.",
        "services" => "Short-form video, channel strategy, paid social and creator partnerships.",
        _ => "",
    }
}
