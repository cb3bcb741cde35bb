// SPDX-License-Identifier: MPL-2.0
//! Image sources and lens compositing.
//!
//! - [`image`]: decoding files and the built-in placeholder
//! - [`compositor`]: base layer, lens layer and glyph rendered into one frame
//! - [`glyph`]: the magnifying glass glyph

pub mod compositor;
pub mod glyph;
pub mod image;

pub use compositor::{Compositor, LensGeometry};
pub use image::{load_image, load_image_async, placeholder, ImageData, IMAGE_EXTENSIONS};
