// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Section nav dots, floating over the right edge of the page.

use crate::interaction::nav_dots::{NavDot, NavDotAction};

/// Display the dots and report clicks.
pub fn show(ctx: &egui::Context, dots: &[NavDot]) -> NavDotAction {
    let mut action = NavDotAction::None;

    egui::Area::new(egui::Id::new("section_nav_dots"))
        .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-16.0, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            for dot in dots {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::click());

                let hovered = response.hovered();
                let radius = match (dot.is_active, hovered) {
                    (true, _) => 6.0,
                    (false, true) => 5.0,
                    (false, false) => 4.0,
                };
                let color = if dot.is_active {
                    egui::Color32::from_rgb(190, 160, 255)
                } else if hovered {
                    egui::Color32::from_gray(200)
                } else {
                    egui::Color32::from_gray(120)
                };
                ui.painter().circle_filled(rect.center(), radius, color);

                if response.on_hover_text(dot.label.as_str()).clicked() {
                    log::info!("Nav dot selected: {}", dot.id);
                    action = NavDotAction::Select(dot.id.clone());
                }
            }
        });

    action
}
