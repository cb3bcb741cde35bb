// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use image_rs::{GenericImageView, Rgba, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::{IntSize, Pixmap};

/// Width of the built-in placeholder image.
pub const PLACEHOLDER_WIDTH: u32 = 960;
/// Height of the built-in placeholder image.
pub const PLACEHOLDER_HEIGHT: u32 = 640;

/// Extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp", "ico", "svg",
];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// Straight (non-premultiplied) RGBA bytes.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from straight RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba_bytes: Arc::new(pixels),
        }
    }

    /// Returns a reference to the RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Converts to a premultiplied `tiny-skia` pixmap for compositing.
    ///
    /// Returns `None` for zero-sized images or if the byte count does not
    /// match the dimensions.
    #[must_use]
    pub fn to_pixmap(&self) -> Option<Pixmap> {
        let size = IntSize::from_wh(self.width, self.height)?;
        Pixmap::from_vec(premultiply(&self.rgba_bytes), size)
    }
}

fn premultiply(rgba: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(4) {
        let alpha = u16::from(px[3]);
        let mul = |channel: u8| ((u16::from(channel) * alpha + 127) / 255) as u8;
        out.extend_from_slice(&[mul(px[0]), mul(px[1]), mul(px[2]), px[3]]);
    }
    out
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let mut pixels = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let color = px.demultiply();
            pixels.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }

        Ok(ImageData::from_rgba(width, height, pixels))
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Image("image has empty dimensions".into()));
        }

        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

/// Decodes `path` on the blocking thread pool.
///
/// # Errors
///
/// Same as [`load_image`]; a panicked decoder is reported as [`Error::Image`].
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

/// Built-in image shown when no path is given: a color gradient with a
/// grid and concentric rings, so magnification and rotation are visible.
#[must_use]
pub fn placeholder() -> ImageData {
    let (w, h) = (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);

    let image = RgbaImage::from_fn(w, h, |x, y| {
        let fx = x as f32 / w as f32;
        let fy = y as f32 / h as f32;

        let on_grid = x % 40 == 0 || y % 40 == 0;
        let distance = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        let on_ring = (distance % 60.0) < 3.0;

        if on_grid {
            Rgba([245, 245, 245, 255])
        } else if on_ring {
            Rgba([30, 30, 30, 255])
        } else {
            Rgba([
                (40.0 + 200.0 * fx) as u8,
                (60.0 + 150.0 * fy) as u8,
                (220.0 - 160.0 * fx * fy) as u8,
                255,
            ])
        }
    });

    ImageData::from_rgba(w, h, image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(&data.rgba_bytes()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
        assert_eq!(&data.rgba_bytes()[..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_has_expected_size() {
        let data = placeholder();
        assert_eq!(data.width, PLACEHOLDER_WIDTH);
        assert_eq!(data.height, PLACEHOLDER_HEIGHT);
        assert_eq!(
            data.rgba_bytes().len(),
            (PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize
        );
    }

    #[test]
    fn to_pixmap_premultiplies_alpha() {
        let data = ImageData::from_rgba(1, 1, vec![200, 100, 50, 128]);
        let pixmap = data.to_pixmap().expect("pixmap");
        let px = pixmap.pixel(0, 0).expect("pixel");
        assert_eq!(px.alpha(), 128);
        assert_eq!(px.red(), 100);
        assert_eq!(px.green(), 50);
        assert_eq!(px.blue(), 25);
    }

    #[test]
    fn to_pixmap_rejects_mismatched_length() {
        let data = ImageData::from_rgba(2, 2, vec![0; 4]);
        assert!(data.to_pixmap().is_none());
    }
}
