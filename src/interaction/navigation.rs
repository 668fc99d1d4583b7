// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Programmatic scrolling.
//!
//! Covers smooth scrolling to a section anchor and the "switch page, wait
//! for it to settle, then scroll" sequence used by cross-page links.

use crate::models::content::Page;
use crate::util::clock::Clock;
use std::collections::HashMap;

/// Below this distance (px) the animation jumps to the target.
const SNAP_DISTANCE: f32 = 0.5;

/// Eases a vertical scroll offset toward a target, one step per frame.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current: f32,
    target: Option<f32>,
    speed: f32,
}

impl SmoothScroll {
    pub fn new(speed: f32) -> Self {
        Self {
            current: 0.0,
            target: None,
            speed: speed.clamp(0.05, 1.0),
        }
    }

    pub fn scroll_to(&mut self, current: f32, target: f32) {
        self.current = current;
        self.target = Some(target.max(0.0));
    }

    /// The user scrolled by hand; drop any animation in progress.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advance one frame. Returns the offset to apply, or `None` when idle.
    pub fn tick(&mut self) -> Option<f32> {
        let target = self.target?;
        self.current += (target - self.current) * self.speed;
        if (target - self.current).abs() < SNAP_DISTANCE {
            self.current = target;
            self.target = None;
        }
        Some(self.current)
    }
}

/// A cross-page request waiting for the new page to settle.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingNavigation {
    pub page: Page,
    pub anchor: String,
    pub requested_at: f64,
}

impl PendingNavigation {
    pub fn new(page: Page, anchor: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            page,
            anchor: anchor.into(),
            requested_at: clock.now(),
        }
    }

    /// Whether `delay` seconds have passed since the request.
    pub fn is_due(&self, clock: &dyn Clock, delay: f64) -> bool {
        clock.now() - self.requested_at >= delay
    }
}

/// Scroll offset for `anchor`, or the bottom of the document when the page
/// has no such anchor.
///
/// `anchors` maps section ids to their top edge in content coordinates.
pub fn resolve_anchor(
    anchor: &str,
    anchors: &HashMap<String, f32>,
    content_height: f32,
    viewport_height: f32,
) -> f32 {
    let bottom = (content_height - viewport_height).max(0.0);
    match anchors.get(anchor) {
        Some(top) => top.clamp(0.0, bottom),
        None => {
            log::warn!("Anchor '{}' not found, scrolling to bottom", anchor);
            bottom
        }
    }
}
