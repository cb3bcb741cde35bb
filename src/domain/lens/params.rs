// SPDX-License-Identifier: MPL-2.0
//! The parameter bundle driving one lens render.

use super::{LensDiameter, LensScale, LensTint, RotationFraction, SizeDelta};

/// User-adjustable lens parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensParams {
    pub scale: LensScale,
    pub rotation: RotationFraction,
    pub size: SizeDelta,
    pub tint: LensTint,
    /// Whether the magnified image turns with the glass, or only the glyph does.
    pub rotate_content: bool,
}

impl LensParams {
    #[must_use]
    pub fn diameter(&self) -> LensDiameter {
        self.size.diameter()
    }

    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.scale.factor()
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.degrees()
    }

    /// Rotation applied to the magnified content, zero when content rotation is off.
    #[must_use]
    pub fn content_rotation_degrees(&self) -> f32 {
        if self.rotate_content {
            self.rotation.degrees()
        } else {
            0.0
        }
    }
}

impl Default for LensParams {
    fn default() -> Self {
        Self {
            scale: LensScale::default(),
            rotation: RotationFraction::default(),
            size: SizeDelta::default(),
            tint: LensTint::default(),
            rotate_content: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_neutral() {
        let params = LensParams::default();
        assert!((params.scale_factor() - 1.0).abs() < f32::EPSILON);
        assert!(params.rotation_degrees().abs() < f32::EPSILON);
        assert!((params.diameter().value() - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn content_rotation_follows_flag() {
        let mut params = LensParams {
            rotation: RotationFraction::new(0.5),
            ..LensParams::default()
        };
        assert!((params.content_rotation_degrees() - 180.0).abs() < f32::EPSILON);

        params.rotate_content = false;
        assert!(params.content_rotation_degrees().abs() < f32::EPSILON);
        assert!((params.rotation_degrees() - 180.0).abs() < f32::EPSILON);
    }
}
