//! Transparent padding around raster icons.
//!
//! The source is pasted unchanged at `(floor(w * ratio), floor(h * ratio))`
//! on a canvas filled with a [`Background`].

use std::fs;
use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};
use thiserror::Error;

use super::color::Background;

/// Fraction of each dimension added on every side when none is given.
pub const DEFAULT_RATIO: f64 = 0.2;

/// Padding-related errors
#[derive(Debug, Error)]
pub enum PadError {
    #[error("padding ratio must be a finite, non-negative number, got {0}")]
    InvalidRatio(f64),

    #[error("padding {width}x{height} by {ratio} exceeds the maximum canvas size")]
    TooLarge { width: u32, height: u32, ratio: f64 },

    #[error("failed to open image `{0}`")]
    Open(PathBuf, #[source] image::ImageError),

    #[error("failed to create output directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to save image `{0}`")]
    Save(PathBuf, #[source] image::ImageError),
}

/// Padding amounts for one image.
///
/// Each side gets `floor(dim * ratio)` pixels, computed independently for
/// width and height, so odd sizes may round asymmetrically relative to the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Pixels added on the left and right.
    pub horizontal: u32,
    /// Pixels added on the top and bottom.
    pub vertical: u32,
    /// Source image size.
    pub source: (u32, u32),
    canvas: (u32, u32),
}

impl Padding {
    /// Fails when the ratio is negative or non-finite, or when the padded
    /// canvas would not fit in `u32` on either axis.
    pub fn compute((width, height): (u32, u32), ratio: f64) -> Result<Self, PadError> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(PadError::InvalidRatio(ratio));
        }
        let too_large = || PadError::TooLarge {
            width,
            height,
            ratio,
        };

        let horizontal = pad_amount(width, ratio).ok_or_else(too_large)?;
        let vertical = pad_amount(height, ratio).ok_or_else(too_large)?;
        let canvas_width = grow(width, horizontal).ok_or_else(too_large)?;
        let canvas_height = grow(height, vertical).ok_or_else(too_large)?;

        Ok(Self {
            horizontal,
            vertical,
            source: (width, height),
            canvas: (canvas_width, canvas_height),
        })
    }

    /// Size of the padded canvas.
    pub const fn canvas(&self) -> (u32, u32) {
        self.canvas
    }
}

/// `floor(dim * ratio)`, or `None` when it does not fit in `u32`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pad_amount(dim: u32, ratio: f64) -> Option<u32> {
    let pad = (f64::from(dim) * ratio).floor();
    (pad <= f64::from(u32::MAX)).then_some(pad as u32)
}

/// `dim + 2 * pad` with overflow checks.
#[inline]
fn grow(dim: u32, pad: u32) -> Option<u32> {
    pad.checked_mul(2)?.checked_add(dim)
}

/// Center `img` on a canvas grown by `ratio` on every side.
///
/// Source pixels replace the canvas pixels outright, so a translucent source
/// keeps its own alpha instead of being blended with the background.
pub fn pad_image(
    img: &RgbaImage,
    ratio: f64,
    background: Background,
) -> Result<RgbaImage, PadError> {
    let padding = Padding::compute(img.dimensions(), ratio)?;
    Ok(compose(img, &padding, background))
}

fn compose(img: &RgbaImage, padding: &Padding, background: Background) -> RgbaImage {
    let (width, height) = padding.canvas();
    let mut canvas = RgbaImage::from_pixel(width, height, background.0);
    imageops::replace(
        &mut canvas,
        img,
        i64::from(padding.horizontal),
        i64::from(padding.vertical),
    );
    canvas
}

/// Pad an image file and write the result, inferring the format from `output`'s extension.
pub fn pad_file(
    input: &Path,
    output: &Path,
    ratio: f64,
    background: Background,
) -> Result<Padding, PadError> {
    let img = image::open(input)
        .map_err(|e| PadError::Open(input.to_path_buf(), e))?
        .to_rgba8();
    let padding = Padding::compute(img.dimensions(), ratio)?;
    let canvas = compose(&img, &padding, background);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PadError::CreateDir(parent.to_path_buf(), e))?;
    }

    canvas
        .save(output)
        .map_err(|e| PadError::Save(output.to_path_buf(), e))?;
    Ok(padding)
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::TempDir;

    use super::*;

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 17) as u8, (y * 31) as u8, ((x + y) * 7) as u8, 255])
        })
    }

    #[test]
    fn test_dimensions_follow_floor_formula() {
        for (w, h, r) in [(100, 50, 0.2), (7, 13, 0.2), (1, 1, 0.5), (33, 9, 0.25), (10, 10, 0.0)] {
            let out = pad_image(&checker(w, h), r, Background::TRANSPARENT).unwrap();
            let pad_w = (f64::from(w) * r).floor() as u32;
            let pad_h = (f64::from(h) * r).floor() as u32;
            assert_eq!(out.dimensions(), (w + 2 * pad_w, h + 2 * pad_h));
        }
    }

    #[test]
    fn test_odd_sizes_round_each_axis_independently() {
        let padding = Padding::compute((7, 12), 0.2).unwrap();
        assert_eq!(padding.horizontal, 1);
        assert_eq!(padding.vertical, 2);
        assert_eq!(padding.canvas(), (9, 16));
    }

    #[test]
    fn test_preserves_source_pixels_at_offset() {
        let src = checker(10, 6);
        let out = pad_image(&src, 0.3, Background::TRANSPARENT).unwrap();
        let (ox, oy) = (3, 1);
        for (x, y, px) in src.enumerate_pixels() {
            assert_eq!(out.get_pixel(x + ox, y + oy), px);
        }
    }

    #[test]
    fn test_border_is_transparent_by_default() {
        let src = checker(10, 10);
        let out = pad_image(&src, 0.2, Background::default()).unwrap();
        for (x, y, px) in out.enumerate_pixels() {
            let inside = (2..12).contains(&x) && (2..12).contains(&y);
            if !inside {
                assert_eq!(px[3], 0, "pixel ({x}, {y}) should be transparent");
            }
        }
    }

    #[test]
    fn test_border_uses_custom_background() {
        let bg = Background::parse("#112233").unwrap();
        let out = pad_image(&checker(4, 4), 0.5, bg).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgba([0x11, 0x22, 0x33, 255]));
        assert_eq!(*out.get_pixel(7, 7), Rgba([0x11, 0x22, 0x33, 255]));
    }

    #[test]
    fn test_translucent_source_replaces_background() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 0]));
        let bg = Background::parse("#FFFFFF").unwrap();
        let out = pad_image(&src, 0.5, bg).unwrap();
        assert_eq!(*out.get_pixel(1, 1), Rgba([200, 100, 50, 0]));
    }

    #[test]
    fn test_zero_ratio_is_identity() {
        let once = pad_image(&checker(9, 5), 0.2, Background::TRANSPARENT).unwrap();
        let twice = pad_image(&once, 0.0, Background::TRANSPARENT).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_negative_and_nan_ratio() {
        assert!(matches!(
            Padding::compute((10, 10), -0.1),
            Err(PadError::InvalidRatio(_))
        ));
        assert!(matches!(
            Padding::compute((10, 10), f64::NAN),
            Err(PadError::InvalidRatio(_))
        ));
    }

    #[test]
    fn test_rejects_canvas_overflow() {
        let err = Padding::compute((1000, 10), 3_000_000.0).unwrap_err();
        assert!(matches!(
            err,
            PadError::TooLarge {
                width: 1000,
                height: 10,
                ..
            }
        ));

        // Pad and its double fit, adding the source does not
        let err = Padding::compute((u32::MAX / 2, 1), 1.0).unwrap_err();
        assert!(matches!(err, PadError::TooLarge { .. }));

        // Pad itself exceeds u32
        let err = Padding::compute((u32::MAX, 1), 2.0).unwrap_err();
        assert!(matches!(err, PadError::TooLarge { .. }));
    }

    #[test]
    fn test_largest_canvas_that_fits() {
        let padding = Padding::compute((1, 1), f64::from(u32::MAX / 2)).unwrap();
        assert_eq!(padding.canvas(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_pad_file_writes_png() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("icon.png");
        let output = dir.path().join("out/padded.png");
        checker(20, 10).save(&input).unwrap();

        let padding = pad_file(&input, &output, DEFAULT_RATIO, Background::TRANSPARENT).unwrap();
        assert_eq!(padding.canvas(), (28, 14));

        let written = image::open(&output).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (28, 14));
        assert_eq!(written.get_pixel(0, 0)[3], 0);
        assert_eq!(written.get_pixel(4, 2), checker(20, 10).get_pixel(0, 0));
    }

    #[test]
    fn test_pad_file_missing_input() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");
        let err = pad_file(
            &dir.path().join("missing.png"),
            &output,
            DEFAULT_RATIO,
            Background::TRANSPARENT,
        )
        .unwrap_err();
        assert!(matches!(err, PadError::Open(..)));
        assert!(!output.exists());
    }

    #[test]
    fn test_pad_file_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("icon.png");
        checker(4, 4).save(&input).unwrap();
        let err = pad_file(
            &input,
            &dir.path().join("out.unknownext"),
            DEFAULT_RATIO,
            Background::TRANSPARENT,
        )
        .unwrap_err();
        assert!(matches!(err, PadError::Save(..)));
    }
}
