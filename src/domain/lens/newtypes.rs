// SPDX-License-Identifier: MPL-2.0
//! Lens newtypes.
//!
//! This module provides type-safe wrappers for the three user-adjustable
//! lens parameters and the values derived from them, ensuring they are
//! always within valid ranges.

use std::fmt;

// =============================================================================
// Scale Bounds
// =============================================================================

/// Lens scale bounds. The lens magnifies by `1 + scale`.
pub mod scale_bounds {
    /// Minimum scale (factor 0, the duplicate collapses to a point).
    pub const MIN: f32 = -1.0;
    /// Maximum scale (factor 2).
    pub const MAX: f32 = 1.0;
    /// Lower end of the scale slider.
    pub const SLIDER_MIN: f32 = 0.0;
    /// Upper end of the scale slider.
    pub const SLIDER_MAX: f32 = 1.0;
    /// Default scale (no magnification).
    pub const DEFAULT: f32 = 0.0;
}

// =============================================================================
// LensScale
// =============================================================================

/// Lens scale, guaranteed to be within `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensScale(f32);

impl LensScale {
    /// Creates a new scale, clamping the value to the valid range.
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw slider value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the magnification factor applied to the lens duplicate.
    #[must_use]
    pub fn factor(self) -> f32 {
        1.0 + self.0
    }
}

impl Default for LensScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// Rotation Bounds
// =============================================================================

/// Rotation fraction bounds (one full turn maps to `1.0`).
pub mod rotation_bounds {
    /// Minimum fraction (0°).
    pub const MIN: f32 = 0.0;
    /// Maximum fraction (360°).
    pub const MAX: f32 = 1.0;
    /// Default fraction.
    pub const DEFAULT: f32 = 0.0;
    /// Degrees in one full turn.
    pub const FULL_TURN_DEGREES: f32 = 360.0;
}

// =============================================================================
// RotationFraction
// =============================================================================

/// Fraction of a full turn, guaranteed to be within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationFraction(f32);

impl RotationFraction {
    /// Creates a new rotation fraction, clamping the value to the valid range.
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(rotation_bounds::MIN, rotation_bounds::MAX))
    }

    /// Returns the raw slider value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0 * rotation_bounds::FULL_TURN_DEGREES
    }
}

impl Default for RotationFraction {
    fn default() -> Self {
        Self(rotation_bounds::DEFAULT)
    }
}

// =============================================================================
// Size Bounds
// =============================================================================

/// Lens size delta bounds, added to the base diameter.
pub mod size_bounds {
    /// Minimum size delta.
    pub const MIN: f32 = -20.0;
    /// Maximum size delta.
    pub const MAX: f32 = 100.0;
    /// Default size delta.
    pub const DEFAULT: f32 = 0.0;
}

/// Lens diameter constants.
pub mod diameter_bounds {
    /// Diameter of the lens when the size delta is zero.
    pub const BASE: f32 = 150.0;
}

// =============================================================================
// SizeDelta
// =============================================================================

/// Lens size delta, guaranteed to be within `[-20, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDelta(f32);

impl SizeDelta {
    /// Creates a new size delta, clamping the value to the valid range.
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(size_bounds::MIN, size_bounds::MAX))
    }

    /// Returns the raw slider value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the lens diameter for this delta.
    #[must_use]
    pub fn diameter(self) -> LensDiameter {
        LensDiameter::from_size_delta(self.0)
    }
}

impl Default for SizeDelta {
    fn default() -> Self {
        Self(size_bounds::DEFAULT)
    }
}

// =============================================================================
// LensDiameter
// =============================================================================

/// Diameter of the lens circle in logical pixels, never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensDiameter(f32);

impl LensDiameter {
    /// Computes `max(0, 150 + delta)`.
    ///
    /// Accepts any delta, not only the slider range, so a raw value below
    /// `-150` still yields an empty lens rather than a negative size.
    #[must_use]
    pub fn from_size_delta(delta: f32) -> Self {
        Self((diameter_bounds::BASE + delta).max(0.0))
    }

    /// Returns the diameter.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns half the diameter.
    #[must_use]
    pub fn radius(self) -> f32 {
        self.0 / 2.0
    }

    /// Returns true if the lens covers no area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for LensDiameter {
    fn default() -> Self {
        SizeDelta::default().diameter()
    }
}

// =============================================================================
// LensTint
// =============================================================================

/// Color of the magnifying glass glyph, as straight RGBA bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LensTint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a tint string is not `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTintError(String);

impl fmt::Display for ParseTintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tint color: {}", self.0)
    }
}

impl std::error::Error for ParseTintError {}

impl LensTint {
    /// Neutral gray used by default.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Creates an opaque tint.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ParseTintError`] if the string has the wrong length or
    /// contains non-hexadecimal digits.
    pub fn from_hex(value: &str) -> Result<Self, ParseTintError> {
        let digits = value.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ParseTintError(value.to_string()));
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ParseTintError(value.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Returns the alpha channel as a fraction in `[0, 1]`.
    #[must_use]
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

impl Default for LensTint {
    fn default() -> Self {
        Self::GRAY
    }
}

// =============================================================================
// Tests
// =============================================================================
