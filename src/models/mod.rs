// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for site content and page layout.

pub mod content;
pub mod section;
