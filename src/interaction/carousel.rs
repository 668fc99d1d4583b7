// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drag-to-scroll carousel.
//!
//! Pointer drags over the card strip move its horizontal scroll offset
//! faster than the pointer. On mobile layouts the strip snaps to the nearest
//! card when the drag ends.
//!
//! Every transition is total: events that make no sense in the current
//! phase are ignored and offsets are clamped to the scrollable range.

use crate::config::InteractionConfig;

/// Captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_coord: f32,
    pub start_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Dragging(DragState),
}

/// Scroll state of a horizontal strip of equally sized cards.
#[derive(Debug, Clone)]
pub struct Carousel {
    card_count: usize,
    container_width: f32,
    card_width_fraction: f32,
    multiplier: f32,
    offset: f32,
    active_index: usize,
    phase: CarouselPhase,
}

impl Carousel {
    pub fn new(card_count: usize, config: &InteractionConfig) -> Self {
        Self {
            card_count,
            container_width: 0.0,
            card_width_fraction: config.card_width_fraction,
            multiplier: config.drag_multiplier,
            offset: 0.0,
            active_index: 0,
            phase: CarouselPhase::Idle,
        }
    }

    /// Update the measured container width, keeping the offset in range.
    /// With `snap` set, an idle strip is realigned to the active card.
    pub fn set_container_width(&mut self, width: f32, snap: bool) {
        let width = width.max(0.0);
        if (width - self.container_width).abs() < f32::EPSILON {
            return;
        }
        self.container_width = width;
        self.offset = if snap && !self.is_dragging() {
            self.clamp_offset(self.active_index as f32 * self.card_width())
        } else {
            self.clamp_offset(self.offset)
        };
    }

    pub fn set_card_count(&mut self, count: usize) {
        self.card_count = count;
        self.active_index = self.clamp_index(self.active_index);
        self.offset = self.clamp_offset(self.offset);
    }

    pub fn card_width(&self) -> f32 {
        self.container_width * self.card_width_fraction
    }

    /// Largest offset that still keeps the strip covering the container.
    pub fn max_offset(&self) -> f32 {
        (self.card_count as f32 * self.card_width() - self.container_width).max(0.0)
    }

    /// Idle -> Dragging.
    pub fn pointer_down(&mut self, coord: f32) {
        if let CarouselPhase::Idle = self.phase {
            self.phase = CarouselPhase::Dragging(DragState {
                start_coord: coord,
                start_offset: self.offset,
            });
            log::debug!("Carousel drag started at {:.1}, offset {:.1}", coord, self.offset);
        }
    }

    /// Dragging -> Dragging with the offset moved against the pointer.
    pub fn pointer_move(&mut self, coord: f32) {
        if let CarouselPhase::Dragging(drag) = self.phase {
            let requested = drag.start_offset - (coord - drag.start_coord) * self.multiplier;
            self.offset = self.clamp_offset(requested);
        }
    }

    /// Dragging -> Idle. Snaps to the nearest card when `snap` is set.
    /// Returns the active card index.
    pub fn pointer_up(&mut self, snap: bool) -> usize {
        if let CarouselPhase::Dragging(_) = self.phase {
            self.phase = CarouselPhase::Idle;
            if snap {
                let (index, offset) = self.snap_offset(self.offset);
                self.active_index = index;
                self.offset = offset;
                log::debug!("Carousel snapped to card {} (offset {:.1})", index, offset);
            }
        }
        self.active_index
    }

    /// Pointer left the container; ends the drag like a release.
    pub fn pointer_leave(&mut self, snap: bool) -> usize {
        self.pointer_up(snap)
    }

    /// Nearest card index to `offset` and the offset that aligns it.
    pub fn snap_offset(&self, offset: f32) -> (usize, f32) {
        let card_width = self.card_width();
        if card_width <= 0.0 || self.card_count == 0 {
            return (0, 0.0);
        }
        let raw = (offset / card_width).round().max(0.0) as usize;
        let index = self.clamp_index(raw);
        (index, self.clamp_offset(index as f32 * card_width))
    }

    /// Jump straight to a card, e.g. from an indicator click.
    pub fn select(&mut self, index: usize) {
        let index = self.clamp_index(index);
        self.active_index = index;
        self.offset = self.clamp_offset(index as f32 * self.card_width());
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.card_count.saturating_sub(1))
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(cards: usize, width: f32) -> Carousel {
        let mut carousel = Carousel::new(cards, &InteractionConfig::default());
        carousel.set_container_width(width, false);
        carousel
    }

    #[test]
    fn test_four_card_scenario() {
        let mut carousel = carousel(4, 400.0);
        assert_eq!(carousel.card_width(), 320.0);

        carousel.pointer_down(500.0);
        carousel.pointer_move(100.0);
        assert_eq!(carousel.offset(), 600.0);

        let index = carousel.pointer_up(true);
        assert_eq!(index, 2);
        assert_eq!(carousel.offset(), 640.0);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn test_drag_delta_is_linear() {
        let mut carousel = carousel(10, 400.0);
        carousel.select(4);
        let before = carousel.offset();

        carousel.pointer_down(200.0);
        for delta in [-60.0_f32, -10.0, 0.0, 25.0, 80.0] {
            carousel.pointer_move(200.0 + delta);
            let moved = carousel.offset() - before;
            assert!((moved - (-delta * 1.5)).abs() < 1e-3, "delta {}", delta);
        }

        // Moving back to the start restores the original offset
        carousel.pointer_move(200.0);
        assert_eq!(carousel.offset(), before);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let carousel = carousel(4, 400.0);
        for offset in [0.0, 100.0, 161.0, 600.0, 870.0, 880.0] {
            let (index, snapped) = carousel.snap_offset(offset);
            assert_eq!(carousel.snap_offset(snapped), (index, snapped), "offset {}", offset);
        }
    }

    #[test]
    fn test_overshoot_clamps_index_and_offset() {
        let mut carousel = carousel(4, 400.0);

        carousel.pointer_down(1000.0);
        carousel.pointer_move(-5000.0);
        assert_eq!(carousel.offset(), carousel.max_offset());
        assert_eq!(carousel.pointer_up(true), 3);

        carousel.pointer_down(0.0);
        carousel.pointer_move(9000.0);
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.pointer_up(true), 0);

        assert_eq!(carousel.snap_offset(1e9).0, 3);
        assert_eq!(carousel.snap_offset(-1e9).0, 0);
    }

    #[test]
    fn test_desktop_release_does_not_snap() {
        let mut carousel = carousel(4, 400.0);
        carousel.pointer_down(300.0);
        carousel.pointer_move(200.0);
        assert_eq!(carousel.pointer_up(false), 0);
        assert_eq!(carousel.offset(), 150.0);
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let mut carousel = carousel(4, 400.0);
        carousel.select(1);
        carousel.pointer_down(300.0);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.pointer_leave(true), 1);
        assert!(!carousel.is_dragging());

        // Moves while idle are ignored
        carousel.pointer_move(0.0);
        assert_eq!(carousel.offset(), 320.0);
    }

    #[test]
    fn test_second_pointer_down_keeps_first_drag() {
        let mut carousel = carousel(4, 400.0);
        carousel.pointer_down(300.0);
        carousel.pointer_down(50.0);
        // Offset is measured from the first press
        carousel.pointer_move(250.0);
        assert_eq!(carousel.offset(), 75.0);
    }

    #[test]
    fn test_empty_and_unmeasured_carousel() {
        let mut empty = carousel(0, 400.0);
        empty.pointer_down(0.0);
        empty.pointer_move(-100.0);
        assert_eq!(empty.pointer_up(true), 0);
        assert_eq!(empty.offset(), 0.0);

        let unmeasured = Carousel::new(4, &InteractionConfig::default());
        assert_eq!(unmeasured.snap_offset(500.0), (0, 0.0));
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut carousel = carousel(4, 400.0);
        carousel.select(3);
        assert_eq!(carousel.offset(), 880.0);

        // Wider container, larger cards and range
        carousel.set_container_width(1000.0, false);
        assert_eq!(carousel.max_offset(), 2200.0);
        assert_eq!(carousel.offset(), 880.0);

        carousel.set_card_count(1);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_mobile_resize_realigns_to_active_card() {
        let mut carousel = carousel(6, 400.0);
        carousel.pointer_down(400.0);
        carousel.pointer_move(0.0);
        assert_eq!(carousel.pointer_up(true), 2);
        assert_eq!(carousel.offset(), 640.0);

        // Cards shrink to 240px; the strip stays on card 2
        carousel.set_container_width(300.0, true);
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.offset(), 480.0);
        assert_eq!(carousel.snap_offset(carousel.offset()), (2, 480.0));

        // Desktop keeps the raw offset, only clamped
        carousel.set_container_width(400.0, false);
        assert_eq!(carousel.offset(), 480.0);
    }

    #[test]
    fn test_resize_during_drag_does_not_snap() {
        let mut carousel = carousel(6, 400.0);
        carousel.pointer_down(300.0);
        carousel.pointer_move(200.0);
        carousel.set_container_width(500.0, true);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.offset(), 150.0);
    }
}
