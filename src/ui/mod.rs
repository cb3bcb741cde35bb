// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, exposes a `Message` enum, and reports side effects
//! to the application instead of performing them.
//!
//! - [`magnifier`] - Lens area, gesture surface and customization panel
//! - [`state`] - Reusable state (drag tracking)
//! - [`styles`] - Centralized container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod magnifier;
pub mod state;
pub mod styles;
pub mod theming;
