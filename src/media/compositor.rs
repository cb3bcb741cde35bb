// SPDX-License-Identifier: MPL-2.0
//! Two-pass lens compositing on the CPU.
//!
//! A frame is built in three steps on an opaque background:
//!
//! 1. **Base layer**: the image fitted into the viewport with a circular
//!    hole punched at the lens position (destination-out), so the
//!    background shows through.
//! 2. **Lens layer**: the image drawn again through the lens transform
//!    `T(L) · R(θ) · S(1 + scale) · T(-L)`, where `L` is the lens center,
//!    clipped by a circular alpha mask of the lens diameter.
//! 3. **Glyph**: the magnifying glass anchored at the lens' top-left corner,
//!    rotated about `L` together with the glass.
//!
//! Both layers use the same offset, so the hole and the magnified disc
//! always line up within one frame.

use super::glyph::{GlyphCache, GLYPH_RASTER_SIZE};
use super::image::ImageData;
use crate::domain::lens::LensParams;
use crate::error::{Error, Result};
use iced::Vector;
use tiny_skia::{
    BlendMode, Color, FillRule, FilterQuality, Mask, Paint, PathBuilder, Pixmap, PixmapPaint,
    Point, Transform,
};

/// The glyph box is scaled by this factor from its top-left corner.
pub const GLYPH_SCALE: f32 = 1.4;
/// Shift applied to the glyph box after scaling.
pub const GLYPH_OFFSET: (f32, f32) = (-10.0, -5.0);

/// Where the lens sits in a viewport of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    pub center: Point,
    pub radius: f32,
}

impl LensGeometry {
    /// Lens centered at `viewport center + offset`.
    #[must_use]
    pub fn new(width: u32, height: u32, offset: Vector, params: &LensParams) -> Self {
        Self {
            center: Point::from_xy(
                width as f32 / 2.0 + offset.x,
                height as f32 / 2.0 + offset.y,
            ),
            radius: params.diameter().radius(),
        }
    }

    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    /// Rotation by `degrees` about the lens center.
    #[must_use]
    pub fn rotation(&self, degrees: f32) -> Transform {
        Transform::from_translate(self.center.x, self.center.y)
            .pre_concat(Transform::from_rotate(degrees))
            .pre_translate(-self.center.x, -self.center.y)
    }

    /// Magnification then rotation, both about the lens center.
    #[must_use]
    pub fn lens_transform(&self, factor: f32, degrees: f32) -> Transform {
        self.rotation(degrees)
            .pre_translate(self.center.x, self.center.y)
            .pre_scale(factor, factor)
            .pre_translate(-self.center.x, -self.center.y)
    }

    /// Maps the rasterized glyph onto the lens' top-left corner.
    #[must_use]
    pub fn glyph_transform(&self, degrees: f32) -> Transform {
        let corner_x = self.center.x - self.radius + GLYPH_OFFSET.0;
        let corner_y = self.center.y - self.radius + GLYPH_OFFSET.1;
        let scale = self.diameter() * GLYPH_SCALE / GLYPH_RASTER_SIZE as f32;

        self.rotation(degrees)
            .pre_translate(corner_x, corner_y)
            .pre_scale(scale, scale)
    }
}

/// Transform fitting an image into a viewport, centered, aspect ratio kept.
#[must_use]
pub fn fit_transform(image_width: u32, image_height: u32, width: u32, height: u32) -> Transform {
    let scale = (width as f32 / image_width as f32).min(height as f32 / image_height as f32);
    let dx = (width as f32 - image_width as f32 * scale) / 2.0;
    let dy = (height as f32 - image_height as f32 * scale) / 2.0;
    Transform::from_translate(dx, dy).pre_scale(scale, scale)
}

struct FittedBase {
    width: u32,
    height: u32,
    pixmap: Pixmap,
}

/// Renders lens frames for one source image.
///
/// The image fitted to the current viewport is cached and rebuilt only
/// when the viewport size changes.
pub struct Compositor {
    source: Pixmap,
    background: Color,
    fitted: Option<FittedBase>,
    glyph: GlyphCache,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("source_width", &self.source.width())
            .field("source_height", &self.source.height())
            .field("glyph", &self.glyph)
            .finish()
    }
}

impl Compositor {
    /// Creates a compositor for `image` over an opaque `background`.
    ///
    /// The background alpha is ignored; frames are always opaque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the image has no pixels or its byte count
    /// does not match its dimensions.
    pub fn new(image: &ImageData, background: Color) -> Result<Self> {
        let source = image
            .to_pixmap()
            .ok_or_else(|| Error::Image("image has no usable pixels".into()))?;

        let mut opaque = background;
        opaque.set_alpha(1.0);

        Ok(Self {
            source,
            background: opaque,
            fitted: None,
            glyph: GlyphCache::default(),
        })
    }

    /// Renders one frame. Returns `None` for a zero-sized viewport.
    pub fn render(
        &mut self,
        width: u32,
        height: u32,
        offset: Vector,
        params: &LensParams,
    ) -> Option<Pixmap> {
        let mut frame = Pixmap::new(width, height)?;
        frame.fill(self.background);

        let geometry = LensGeometry::new(width, height, offset, params);
        let lens_circle = if geometry.is_empty() {
            None
        } else {
            PathBuilder::from_circle(geometry.center.x, geometry.center.y, geometry.radius)
        };

        // Base layer with the hole punched out
        let mut base = self.fitted_base(width, height)?.clone();
        if let Some(circle) = &lens_circle {
            let paint = Paint {
                blend_mode: BlendMode::Clear,
                anti_alias: true,
                ..Paint::default()
            };
            base.fill_path(circle, &paint, FillRule::Winding, Transform::identity(), None);
        }
        frame.draw_pixmap(
            0,
            0,
            base.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        let Some(circle) = lens_circle else {
            return Some(frame);
        };

        // Lens layer
        let factor = params.scale_factor();
        if factor > 0.0 {
            let mut mask = Mask::new(width, height)?;
            mask.fill_path(&circle, FillRule::Winding, true, Transform::identity());

            let transform = geometry
                .lens_transform(factor, params.content_rotation_degrees())
                .pre_concat(fit_transform(
                    self.source.width(),
                    self.source.height(),
                    width,
                    height,
                ));
            frame.draw_pixmap(
                0,
                0,
                self.source.as_ref(),
                &Self::sampling_paint(),
                transform,
                Some(&mask),
            );
        }

        // Glyph
        if let Some(glyph) = self.glyph.get(params.tint) {
            frame.draw_pixmap(
                0,
                0,
                glyph.as_ref(),
                &Self::sampling_paint(),
                geometry.glyph_transform(params.rotation_degrees()),
                None,
            );
        }

        Some(frame)
    }

    fn sampling_paint() -> PixmapPaint {
        PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        }
    }

    fn fitted_base(&mut self, width: u32, height: u32) -> Option<&Pixmap> {
        let stale = !matches!(
            &self.fitted,
            Some(fitted) if fitted.width == width && fitted.height == height
        );
        if stale {
            let mut pixmap = Pixmap::new(width, height)?;
            pixmap.draw_pixmap(
                0,
                0,
                self.source.as_ref(),
                &Self::sampling_paint(),
                fit_transform(self.source.width(), self.source.height(), width, height),
                None,
            );
            self.fitted = Some(FittedBase {
                width,
                height,
                pixmap,
            });
        }
        self.fitted.as_ref().map(|fitted| &fitted.pixmap)
    }
}
