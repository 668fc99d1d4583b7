// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll-linked active section tracking.
//!
//! Each frame the page reports its scroll offset and the measured bounds of
//! its sections. The tracker picks the section with the largest overlap with
//! the viewport centre band and decides whether the nav dots are shown.

use crate::config::InteractionConfig;
use crate::models::section::{Section, SectionBounds};
use crate::util::geometry::Span;

/// Per-page scroll state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    /// Current vertical scroll offset in pixels
    pub offset: f32,
    /// Whether the offset is past the nav visibility threshold
    pub past_threshold: bool,
    /// Id of the active section
    pub active: Option<String>,
}

/// Derives the active section of one page.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    state: ScrollState,
    threshold: f32,
    center_band: f32,
}

impl ScrollTracker {
    pub fn new(sections: Vec<Section>, config: &InteractionConfig) -> Self {
        Self {
            sections,
            state: ScrollState::default(),
            threshold: config.nav_visibility_threshold,
            center_band: config.center_band,
        }
    }

    /// Recompute the state from the latest scroll offset and section bounds.
    ///
    /// `bounds` are relative to the viewport top. Returns true when the
    /// active section changed.
    pub fn update(&mut self, offset: f32, viewport_height: f32, bounds: &[SectionBounds]) -> bool {
        self.state.offset = offset;
        self.state.past_threshold = offset > self.threshold;

        let band = Span::center_band(viewport_height, self.center_band);
        let Some(best) = self.most_visible(&band, bounds) else {
            // Nothing in the band, keep the previous section
            return false;
        };

        if self.state.active.as_deref() == Some(best.as_str()) {
            return false;
        }

        log::debug!(
            "Active section {:?} -> {} at offset {:.0}",
            self.state.active,
            best,
            offset
        );
        self.state.active = Some(best);
        true
    }

    /// Section with the largest band overlap. Sections are walked in document
    /// order and only a strictly larger overlap replaces the current best, so
    /// ties go to the earlier section.
    fn most_visible(&self, band: &Span, bounds: &[SectionBounds]) -> Option<String> {
        let mut best: Option<(&Section, f32)> = None;

        for section in &self.sections {
            let Some(measured) = bounds.iter().find(|b| b.id == section.id) else {
                continue;
            };
            let overlap = measured.span.overlap(band);
            if overlap <= 0.0 {
                continue;
            }
            match best {
                Some((_, best_overlap)) if overlap <= best_overlap => {}
                _ => best = Some((section, overlap)),
            }
        }

        best.map(|(section, _)| section.id.clone())
    }

    pub fn nav_visible(&self) -> bool {
        self.state.past_threshold
    }

    pub fn active(&self) -> Option<&str> {
        self.state.active.as_deref()
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("hero", 0, "Intro"),
            Section::new("work", 1, "Work"),
            Section::new("contact", 2, "Contact"),
        ]
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(sections(), &InteractionConfig::default())
    }

    /// Stack sections of the given heights, shifted up by `offset`.
    fn stacked(heights: &[(&str, f32)], offset: f32) -> Vec<SectionBounds> {
        let mut top = -offset;
        heights
            .iter()
            .map(|(id, h)| {
                let bounds = SectionBounds::new(*id, Span::from_start_height(top, *h));
                top += h;
                bounds
            })
            .collect()
    }

    #[test]
    fn test_visibility_threshold() {
        let mut tracker = tracker();
        let bounds = stacked(&[("hero", 800.0), ("work", 800.0), ("contact", 800.0)], 0.0);

        for offset in [0.0, 50.0, 99.0, 100.0] {
            tracker.update(offset, 800.0, &bounds);
            assert!(!tracker.nav_visible(), "visible at {}", offset);
        }
        for offset in [100.5, 101.0, 500.0, 5000.0] {
            tracker.update(offset, 800.0, &bounds);
            assert!(tracker.nav_visible(), "hidden at {}", offset);
        }
    }

    #[test]
    fn test_max_overlap_wins() {
        let mut tracker = tracker();
        let layout = [("hero", 800.0), ("work", 800.0), ("contact", 800.0)];

        // Band is 200..600 of an 800px viewport
        assert!(tracker.update(0.0, 800.0, &stacked(&layout, 0.0)));
        assert_eq!(tracker.active(), Some("hero"));

        // hero covers 200..300 of the band, work 300..600
        assert!(tracker.update(500.0, 800.0, &stacked(&layout, 500.0)));
        assert_eq!(tracker.active(), Some("work"));

        assert!(tracker.update(1600.0, 800.0, &stacked(&layout, 1600.0)));
        assert_eq!(tracker.active(), Some("contact"));
    }

    #[test]
    fn test_exactly_one_active_for_disjoint_sections() {
        let mut tracker = tracker();
        let layout = [("hero", 300.0), ("work", 300.0), ("contact", 300.0)];

        for offset in (0..=600).step_by(25) {
            let bounds = stacked(&layout, offset as f32);
            tracker.update(offset as f32, 800.0, &bounds);

            let band = Span::center_band(800.0, 0.5);
            let expected = bounds
                .iter()
                .map(|b| b.span.overlap(&band))
                .fold(0.0_f32, f32::max);
            let active = tracker.active().expect("a section is active");
            let active_overlap = bounds
                .iter()
                .find(|b| b.id == active)
                .map(|b| b.span.overlap(&band))
                .unwrap();
            assert_eq!(active_overlap, expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_tie_goes_to_earlier_section() {
        let mut tracker = tracker();
        // Band 200..600 split evenly between hero and work
        let bounds = vec![
            SectionBounds::new("hero", Span::new(-100.0, 400.0)),
            SectionBounds::new("work", Span::new(400.0, 900.0)),
        ];
        tracker.update(300.0, 800.0, &bounds);
        assert_eq!(tracker.active(), Some("hero"));
    }

    #[test]
    fn test_nothing_visible_keeps_previous() {
        let mut tracker = tracker();
        let layout = [("hero", 800.0), ("work", 800.0), ("contact", 800.0)];
        tracker.update(900.0, 800.0, &stacked(&layout, 900.0));
        assert_eq!(tracker.active(), Some("work"));

        // Sections not measured this frame
        assert!(!tracker.update(950.0, 800.0, &[]));
        assert_eq!(tracker.active(), Some("work"));

        // Only bounds far outside the band
        let far = vec![SectionBounds::new("contact", Span::new(5000.0, 5800.0))];
        assert!(!tracker.update(950.0, 800.0, &far));
        assert_eq!(tracker.active(), Some("work"));
    }

    #[test]
    fn test_unknown_bounds_ignored() {
        let mut tracker = tracker();
        let bounds = vec![SectionBounds::new("footer", Span::new(0.0, 800.0))];
        tracker.update(0.0, 800.0, &bounds);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_unchanged_active_reports_no_change() {
        let mut tracker = tracker();
        let layout = [("hero", 800.0), ("work", 800.0)];
        assert!(tracker.update(0.0, 800.0, &stacked(&layout, 0.0)));
        assert!(!tracker.update(10.0, 800.0, &stacked(&layout, 10.0)));
        assert_eq!(tracker.state().offset, 10.0);
    }
}
