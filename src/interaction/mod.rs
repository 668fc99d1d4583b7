// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interaction logic, independent of rendering.

pub mod carousel;
pub mod nav_dots;
pub mod navigation;
pub mod scroll_tracker;
