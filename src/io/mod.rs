// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for content files and project media.

pub mod media;
pub mod serialization;
