// SPDX-License-Identifier: MPL-2.0
//! Image loading and presentation scaling.
//!
//! The decoded original is kept in memory so the display bitmap can be
//! recomputed from full quality whenever the window changes size.

pub mod fit;

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded image plus its dimensions.
#[derive(Debug, Clone)]
pub struct ImageData {
    original: image_rs::DynamicImage,
    width: u32,
    height: u32,
}

/// A display-ready bitmap produced from an [`ImageData`] for a given area.
#[derive(Debug, Clone)]
pub struct ScaledImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Loads and decodes the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`]
    /// if the bytes do not decode as a supported format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
        let original =
            image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;
        let (width, height) = original.dimensions();

        Ok(Self {
            original,
            width,
            height,
        })
    }

    /// Original width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Original height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Produces a bitmap scaled to fit `area` with [`fit::PADDING`] on each
    /// side, preserving aspect ratio and resampling with Lanczos3.
    pub fn scaled_to_fit(&self, area: iced::Size) -> ScaledImage {
        let max_width = (area.width - 2.0 * fit::PADDING).max(1.0);
        let max_height = (area.height - 2.0 * fit::PADDING).max(1.0);
        let (width, height) = fit::fit_within(self.width, self.height, max_width, max_height);

        let resized = fit::resize(&self.original, width, height);
        let pixels = resized.to_rgba8().into_vec();

        ScaledImage {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = ImageData::load(&image_path).expect("png should load successfully");
        assert_eq!(data.width(), 4);
        assert_eq!(data.height(), 2);
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");

        match ImageData::load(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match ImageData::load(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn scaled_to_fit_respects_area_bounds() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");
        let image = RgbaImage::from_pixel(200, 100, Rgba([0, 255, 0, 255]));
        image.save(&image_path).expect("failed to write png");

        let data = ImageData::load(&image_path).expect("png should load");
        let scaled = data.scaled_to_fit(iced::Size::new(140.0, 140.0));

        assert!(scaled.width as f32 <= 140.0 - 2.0 * fit::PADDING);
        assert!(scaled.height as f32 <= 140.0 - 2.0 * fit::PADDING);
    }
}
