// SPDX-License-Identifier: MPL-2.0
//! Magnifying glass glyph drawn on the lens.
//! The SVG is embedded and rasterized once per tint.

use crate::domain::lens::LensTint;
use crate::error::{Error, Result};
use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

const GLYPH_SOURCE: &str = include_str!("../../assets/icons/magnifying_glass.svg");

/// Edge length of the rasterized glyph, in pixels.
pub const GLYPH_RASTER_SIZE: u32 = 256;

/// Rasterize the glyph in the given tint.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the embedded SVG fails to parse or the pixmap
/// cannot be allocated.
pub fn rasterize(tint: LensTint) -> Result<Pixmap> {
    let rgb = LensTint { a: 255, ..tint }.to_hex();
    let source = GLYPH_SOURCE
        .replace("{color}", &rgb)
        .replace("{opacity}", &format!("{:.3}", tint.opacity()));

    let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let orig_size = tree.size();
    let scale_x = GLYPH_RASTER_SIZE as f32 / orig_size.width();
    let scale_y = GLYPH_RASTER_SIZE as f32 / orig_size.height();

    let mut pixmap = Pixmap::new(GLYPH_RASTER_SIZE, GLYPH_RASTER_SIZE)
        .ok_or_else(|| Error::Svg("Failed to allocate glyph pixmap".into()))?;
    resvg::render(
        &tree,
        Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap)
}

/// Keeps the last rasterized glyph and re-renders only when the tint changes.
#[derive(Default)]
pub struct GlyphCache {
    cached: Option<(LensTint, Pixmap)>,
}

impl GlyphCache {
    /// Returns the glyph for `tint`, rasterizing it on first use.
    ///
    /// Returns `None` if rasterization fails; the failure is logged and the
    /// lens is drawn without its glyph.
    pub fn get(&mut self, tint: LensTint) -> Option<&Pixmap> {
        let stale = !matches!(&self.cached, Some((cached_tint, _)) if *cached_tint == tint);
        if stale {
            self.cached = match rasterize(tint) {
                Ok(pixmap) => Some((tint, pixmap)),
                Err(err) => {
                    tracing::warn!("failed to rasterize lens glyph: {err}");
                    None
                }
            };
        }
        self.cached.as_ref().map(|(_, pixmap)| pixmap)
    }
}

impl std::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphCache")
            .field("tint", &self.cached.as_ref().map(|(tint, _)| *tint))
            .finish()
    }
}
