// SPDX-License-Identifier: MPL-2.0
//! Fit-to-area arithmetic and the high-quality resize used for display.

use image_rs::{imageops::FilterType, DynamicImage};

/// Margin kept free on each side of the displayed image, in logical pixels.
pub const PADDING: f32 = 20.0;

/// Computes the largest dimensions with the same aspect ratio as
/// `orig_w`×`orig_h` that fit inside `max_w`×`max_h`.
///
/// The scale factor may exceed 1, so small images are enlarged to fill the
/// available area. Results are rounded, clamped back under the bounds, and
/// never smaller than 1×1.
pub fn fit_within(orig_w: u32, orig_h: u32, max_w: f32, max_h: f32) -> (u32, u32) {
    if orig_w == 0 || orig_h == 0 {
        return (1, 1);
    }

    let max_w = f64::from(max_w.max(1.0));
    let max_h = f64::from(max_h.max(1.0));

    let scale = (max_w / f64::from(orig_w)).min(max_h / f64::from(orig_h));

    let width = (f64::from(orig_w) * scale).round().min(max_w.floor()) as u32;
    let height = (f64::from(orig_h) * scale).round().min(max_h.floor()) as u32;

    (width.max(1), height.max(1))
}

/// Resize the image to the provided dimensions using a high-quality filter.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::ImageBuffer;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, image_rs::Rgba([0, 0, 0, 0]));
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn fit_within_shrinks_wide_image_to_width_bound() {
        let (w, h) = fit_within(200, 100, 100.0, 100.0);
        assert_eq!((w, h), (100, 50));
    }

    #[test]
    fn fit_within_shrinks_tall_image_to_height_bound() {
        let (w, h) = fit_within(100, 200, 100.0, 100.0);
        assert_eq!((w, h), (50, 100));
    }

    #[test]
    fn fit_within_enlarges_small_images() {
        let (w, h) = fit_within(10, 10, 100.0, 80.0);
        assert_eq!((w, h), (80, 80));
    }

    #[test]
    fn fit_within_preserves_aspect_ratio_within_rounding() {
        let cases = [
            (1920_u32, 1080_u32, 760.0_f32, 410.0_f32),
            (640, 480, 333.0, 777.0),
            (3, 7, 500.0, 500.0),
            (4032, 3024, 1234.0, 567.0),
        ];

        for (orig_w, orig_h, max_w, max_h) in cases {
            let (w, h) = fit_within(orig_w, orig_h, max_w, max_h);

            let original_ratio = f64::from(orig_w) / f64::from(orig_h);
            let fitted_ratio = f64::from(w) / f64::from(h);
            // One pixel of rounding slack on either axis.
            let tolerance = original_ratio * (1.0 / f64::from(w.min(h)) + 1.0 / f64::from(h));
            assert!(
                (original_ratio - fitted_ratio).abs() <= tolerance,
                "ratio drifted for {orig_w}x{orig_h} in {max_w}x{max_h}: {fitted_ratio} vs {original_ratio}"
            );
        }
    }

    #[test]
    fn fit_within_never_exceeds_bounds() {
        let cases = [
            (1920_u32, 1080_u32, 760.0_f32, 410.0_f32),
            (100, 100, 50.7, 50.7),
            (7, 3, 999.0, 10.0),
            (1, 1, 3.0, 3.0),
        ];

        for (orig_w, orig_h, max_w, max_h) in cases {
            let (w, h) = fit_within(orig_w, orig_h, max_w, max_h);
            assert!(w as f32 <= max_w, "{w} exceeds {max_w}");
            assert!(h as f32 <= max_h, "{h} exceeds {max_h}");
        }
    }

    #[test]
    fn fit_within_guards_degenerate_inputs() {
        assert_eq!(fit_within(0, 100, 50.0, 50.0), (1, 1));
        assert_eq!(fit_within(100, 0, 50.0, 50.0), (1, 1));
        // A window smaller than the padding still yields a drawable size.
        let (w, h) = fit_within(100, 100, -5.0, 0.5);
        assert!(w >= 1 && h >= 1);
    }

    #[test]
    fn resize_changes_dimensions() {
        let img = create_test_image(8, 4);
        let resized = resize(&img, 4, 2);
        assert_eq!(resized.width(), 4);
        assert_eq!(resized.height(), 2);
    }

    #[test]
    fn resize_clamps_zero_dimensions() {
        let img = create_test_image(8, 4);
        let resized = resize(&img, 0, 0);
        assert_eq!(resized.width(), 1);
        assert_eq!(resized.height(), 1);
    }
}
