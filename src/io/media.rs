// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project media loading.
//!
//! This module loads cover images for project cards and converts them to
//! RGBA pixels suitable for egui textures. Callers substitute a placeholder
//! when loading fails.

use anyhow::{Context, Result};
use std::path::Path;

/// Largest edge (px) kept for card thumbnails.
const MAX_THUMBNAIL_EDGE: u32 = 640;

/// Decoded image ready for upload as a texture.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file and downscale it to thumbnail size.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("opening image {}", path.display()))?;
    let img = if img.width() > MAX_THUMBNAIL_EDGE || img.height() > MAX_THUMBNAIL_EDGE {
        img.thumbnail(MAX_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_downscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        image::RgbaImage::from_pixel(1280, 640, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (640, 320));
        assert_eq!(loaded.pixels.len(), 640 * 320 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_image(&dir.path().join("nope.png")).is_err());
    }
}
