// SPDX-License-Identifier: MPL-2.0
//! Magnifier lens domain types.

mod newtypes;
mod params;

pub use newtypes::{
    diameter_bounds, rotation_bounds, scale_bounds, size_bounds, LensDiameter, LensScale,
    LensTint, ParseTintError, RotationFraction, SizeDelta,
};
pub use params::LensParams;
