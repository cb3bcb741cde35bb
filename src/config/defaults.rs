// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. The lens bounds themselves live in
//! [`crate::domain::lens`]; this module re-exposes the ones the settings
//! file and the sliders need.

use crate::domain::lens::{rotation_bounds, scale_bounds, size_bounds};

// ==========================================================================
// Lens Defaults
// ==========================================================================

/// Default lens scale (no magnification).
pub const DEFAULT_LENS_SCALE: f32 = scale_bounds::DEFAULT;

/// Default rotation fraction.
pub const DEFAULT_LENS_ROTATION: f32 = rotation_bounds::DEFAULT;

/// Default lens size delta.
pub const DEFAULT_LENS_SIZE: f32 = size_bounds::DEFAULT;

/// Default glyph tint.
pub const DEFAULT_LENS_TINT: &str = "#808080";

/// Whether the magnified image rotates with the glass by default.
pub const DEFAULT_ROTATE_CONTENT: bool = true;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Slider step for scale and rotation.
pub const FRACTION_SLIDER_STEP: f32 = 0.01;

/// Slider step for lens size.
pub const SIZE_SLIDER_STEP: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_LENS_SCALE >= scale_bounds::SLIDER_MIN);
    assert!(DEFAULT_LENS_SCALE <= scale_bounds::SLIDER_MAX);
    assert!(scale_bounds::SLIDER_MIN >= scale_bounds::MIN);
    assert!(scale_bounds::SLIDER_MAX <= scale_bounds::MAX);

    assert!(DEFAULT_LENS_ROTATION >= rotation_bounds::MIN);
    assert!(DEFAULT_LENS_ROTATION <= rotation_bounds::MAX);

    assert!(DEFAULT_LENS_SIZE >= size_bounds::MIN);
    assert!(DEFAULT_LENS_SIZE <= size_bounds::MAX);

    assert!(FRACTION_SLIDER_STEP > 0.0);
    assert!(SIZE_SLIDER_STEP > 0.0);
};
