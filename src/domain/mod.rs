// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core lens rules with ZERO external dependencies.
//!
//! This module contains pure value objects and the geometric rules of the
//! magnifier lens. It has no dependencies on external crates (except `std`)
//! to ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`lens`]: Lens value objects ([`LensScale`](lens::LensScale),
//!   [`RotationFraction`](lens::RotationFraction), [`SizeDelta`](lens::SizeDelta),
//!   [`LensDiameter`](lens::LensDiameter), [`LensTint`](lens::LensTint)) and
//!   the [`LensParams`](lens::LensParams) bundle.

pub mod lens;
