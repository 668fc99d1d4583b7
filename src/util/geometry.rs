// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Sections and viewports are compared along the vertical axis only, so
//! everything here works on one-dimensional pixel intervals.

/// A vertical pixel interval, `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    /// Create a span, swapping the bounds if they are reversed.
    pub fn new(start: f32, end: f32) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Span of `height` pixels starting at `start`.
    pub fn from_start_height(start: f32, height: f32) -> Self {
        Self::new(start, start + height.max(0.0))
    }

    /// Length of the intersection with `other`, zero when disjoint.
    pub fn overlap(&self, other: &Span) -> f32 {
        (self.end.min(other.end) - self.start.max(other.start)).max(0.0)
    }

    /// The band of `fraction × viewport_height` centred in a viewport whose
    /// top is at zero.
    pub fn center_band(viewport_height: f32, fraction: f32) -> Self {
        let viewport_height = viewport_height.max(0.0);
        let band = viewport_height * fraction.clamp(0.0, 1.0);
        let start = (viewport_height - band) / 2.0;
        Self::new(start, start + band)
    }
}
