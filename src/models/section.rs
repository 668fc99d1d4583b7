// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page section data structures.
//!
//! A page is a vertical stack of named sections. Sections are fixed once a
//! page is loaded; their on-screen bounds are re-measured every frame.

use crate::util::geometry::Span;
use serde::{Deserialize, Serialize};

/// A named, vertically stacked region of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub ordinal: usize,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, ordinal: usize, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ordinal,
            label: label.into(),
        }
    }
}

/// Measured vertical extent of a section, relative to the viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub span: Span,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, span: Span) -> Self {
        Self { id: id.into(), span }
    }
}
