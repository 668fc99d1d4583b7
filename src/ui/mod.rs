// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Folio application.

pub mod carousel;
pub mod header;
pub mod nav_dots;
pub mod page;
