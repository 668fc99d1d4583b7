// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Site header with page tabs.

use crate::models::content::Page;

/// Display the header. Returns the page picked this frame, if any.
pub fn show(ui: &mut egui::Ui, owner: &str, current_page: Page) -> Option<Page> {
    let mut selected = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(egui::RichText::new(owner).strong().size(16.0));

        ui.separator();

        for page in Page::ALL {
            if ui.selectable_label(current_page == page, page.title()).clicked() && page != current_page {
                selected = Some(page);
            }
        }

        ui.separator();

        ui.label(egui::RichText::new(current_page.route()).italics().weak());
    });

    selected
}
