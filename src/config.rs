// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interaction tuning.
//!
//! Read from the optional `interaction` block of the content file. Every
//! field has a default so a partial block is accepted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Scroll offset (px) the page must pass before the nav dots show.
    pub nav_visibility_threshold: f32,
    /// Scroll pixels per pointer pixel while dragging a carousel.
    pub drag_multiplier: f32,
    /// Card width as a fraction of the carousel container width.
    pub card_width_fraction: f32,
    /// Viewports narrower than this (px) use the mobile layout.
    pub mobile_breakpoint: f32,
    /// Seconds to wait after switching pages before scrolling to an anchor.
    pub navigation_delay: f64,
    /// Height of the viewport centre band used for active-section tracking,
    /// as a fraction of the viewport height.
    pub center_band: f32,
    /// Fraction of the remaining distance covered per frame by smooth scroll.
    pub smooth_scroll_speed: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            nav_visibility_threshold: 100.0,
            drag_multiplier: 1.5,
            card_width_fraction: 0.8,
            mobile_breakpoint: 768.0,
            navigation_delay: 0.3,
            center_band: 0.5,
            smooth_scroll_speed: 0.2,
        }
    }
}

impl InteractionConfig {
    pub fn is_mobile(&self, viewport_width: f32) -> bool {
        viewport_width < self.mobile_breakpoint
    }
}
