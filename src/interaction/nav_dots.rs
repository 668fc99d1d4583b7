// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Nav dot indicator state.

use crate::models::section::Section;

/// Render state of one dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDot {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Result of nav dot interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDotAction {
    None,
    /// A dot was clicked; the caller scrolls to this section.
    Select(String),
}

/// One dot per section, in document order, with only the active one flagged.
pub fn nav_dots(sections: &[Section], active: Option<&str>) -> Vec<NavDot> {
    sections
        .iter()
        .map(|section| NavDot {
            id: section.id.clone(),
            label: section.label.clone(),
            is_active: active == Some(section.id.as_str()),
        })
        .collect()
}
