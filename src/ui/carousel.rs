// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card carousel.
//!
//! Paints the cards of a `Carousel` and feeds it pointer events. Cards
//! without a loaded cover image get a placeholder.

use crate::interaction::carousel::Carousel;
use crate::models::content::Project;
use std::collections::HashMap;

/// Horizontal gap between cards.
const CARD_GAP: f32 = 12.0;

/// Display the carousel and handle drag interaction.
pub fn show(
    ui: &mut egui::Ui,
    projects: &[Project],
    carousel: &mut Carousel,
    thumbnails: &HashMap<String, egui::TextureHandle>,
    mobile: bool,
    height: f32,
) {
    carousel.set_card_count(projects.len());
    let width = ui.available_width();
    carousel.set_container_width(width, mobile);

    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::drag());

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            carousel.pointer_down(pos.x);
        }
    }
    if carousel.is_dragging() {
        match ui.ctx().pointer_interact_pos() {
            Some(pos) if rect.contains(pos) => carousel.pointer_move(pos.x),
            _ => {
                let index = carousel.pointer_leave(mobile);
                log::debug!("Pointer left carousel, active card {}", index);
            }
        }
    }
    if response.drag_stopped() && carousel.is_dragging() {
        carousel.pointer_up(mobile);
    }

    if carousel.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    let painter = ui.painter_at(rect);
    let card_width = carousel.card_width();
    for (index, project) in projects.iter().enumerate() {
        let left = rect.left() + index as f32 * card_width - carousel.offset();
        let card_rect = egui::Rect::from_min_size(
            egui::pos2(left + CARD_GAP / 2.0, rect.top()),
            egui::vec2((card_width - CARD_GAP).max(0.0), height),
        );
        if !card_rect.intersects(rect) {
            continue;
        }
        let texture = project.media.as_ref().and_then(|m| thumbnails.get(m));
        draw_card(&painter, project, card_rect, texture);
    }

    // Card indicator on the mobile layout
    if mobile && projects.len() > 1 {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for index in 0..projects.len() {
                let is_active = index == carousel.active_index();
                let (dot_rect, dot) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
                let radius = if is_active { 5.0 } else { 3.5 };
                let color = if is_active {
                    ui.visuals().strong_text_color()
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.painter().circle_filled(dot_rect.center(), radius, color);
                if dot.clicked() {
                    carousel.select(index);
                }
            }
        });
    }
}

/// Draw one project card.
fn draw_card(
    painter: &egui::Painter,
    project: &Project,
    card_rect: egui::Rect,
    texture: Option<&egui::TextureHandle>,
) {
    painter.rect_filled(card_rect, 8.0, egui::Color32::from_gray(36));

    let media_rect = egui::Rect::from_min_size(
        card_rect.min,
        egui::vec2(card_rect.width(), card_rect.height() * 0.55),
    );
    match texture {
        Some(texture) => {
            painter.image(
                texture.id(),
                media_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            // Placeholder for missing media
            painter.rect_filled(media_rect, 8.0, egui::Color32::from_rgb(70, 52, 110));
            painter.text(
                media_rect.center(),
                egui::Align2::CENTER_CENTER,
                initials(&project.title),
                egui::FontId::proportional(36.0),
                egui::Color32::from_gray(220),
            );
        }
    }

    let text_width = (card_rect.width() - 24.0).max(0.0);
    let mut cursor = egui::pos2(card_rect.left() + 12.0, media_rect.bottom() + 10.0);

    let title = painter.layout(
        project.title.clone(),
        egui::FontId::proportional(18.0),
        egui::Color32::WHITE,
        text_width,
    );
    let title_height = title.size().y;
    painter.galley(cursor, title, egui::Color32::WHITE);
    cursor.y += title_height + 6.0;

    let description = painter.layout(
        project.description.clone(),
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(180),
        text_width,
    );
    let description_height = description.size().y;
    painter.galley(cursor, description, egui::Color32::from_gray(180));
    cursor.y += description_height + 8.0;

    let metrics = project
        .metrics
        .iter()
        .map(|m| format!("{} {}", m.value, m.label))
        .collect::<Vec<_>>()
        .join("  ·  ");
    painter.text(
        cursor,
        egui::Align2::LEFT_TOP,
        metrics,
        egui::FontId::proportional(13.0),
        egui::Color32::from_rgb(190, 160, 255),
    );
}

/// Up to two initials for the placeholder, e.g. "Launch Week" -> "LW".
fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InteractionConfig;
    use crate::models::content::SiteContent;

    fn moved(x: f32, y: f32) -> egui::Event {
        egui::Event::PointerMoved(egui::pos2(x, y))
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Render one 400x600 frame with the carousel at the top left.
    fn run_frame(ctx: &egui::Context, carousel: &mut Carousel, mobile: bool, events: Vec<egui::Event>) {
        let projects = SiteContent::default().projects;
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 600.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    show(ui, &projects, carousel, &HashMap::new(), mobile, 300.0);
                });
        });
    }

    fn drag_to_left_edge(ctx: &egui::Context, carousel: &mut Carousel, mobile: bool) {
        run_frame(ctx, carousel, mobile, vec![moved(380.0, 150.0)]);
        run_frame(ctx, carousel, mobile, vec![moved(380.0, 150.0), button(380.0, 150.0, true)]);
        run_frame(ctx, carousel, mobile, vec![moved(370.0, 150.0)]);
        run_frame(ctx, carousel, mobile, vec![moved(20.0, 150.0)]);
    }

    #[test]
    fn test_mobile_release_snaps_to_card() {
        let ctx = egui::Context::default();
        let mut carousel = Carousel::new(4, &InteractionConfig::default());

        drag_to_left_edge(&ctx, &mut carousel, true);
        assert!(carousel.is_dragging());
        assert!(carousel.offset() > 500.0);

        run_frame(&ctx, &mut carousel, true, vec![button(20.0, 150.0, false)]);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.offset(), 640.0);
    }

    #[test]
    fn test_leaving_the_strip_ends_the_drag() {
        let ctx = egui::Context::default();
        let mut carousel = Carousel::new(4, &InteractionConfig::default());

        drag_to_left_edge(&ctx, &mut carousel, true);
        run_frame(&ctx, &mut carousel, true, vec![moved(20.0, 500.0)]);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.offset(), 640.0);

        // Coming back with the button still held does not resume the drag
        run_frame(&ctx, &mut carousel, true, vec![moved(300.0, 150.0)]);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.offset(), 640.0);
        run_frame(&ctx, &mut carousel, true, vec![button(300.0, 150.0, false)]);
        assert_eq!(carousel.offset(), 640.0);
    }

    #[test]
    fn test_desktop_release_keeps_offset() {
        let ctx = egui::Context::default();
        let mut carousel = Carousel::new(4, &InteractionConfig::default());

        drag_to_left_edge(&ctx, &mut carousel, false);
        let dragged = carousel.offset();
        run_frame(&ctx, &mut carousel, false, vec![button(20.0, 150.0, false)]);
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.offset(), dragged);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Launch Week Campaign"), "LW");
        assert_eq!(initials("evergreen"), "E");
        assert_eq!(initials(""), "");
    }
}
