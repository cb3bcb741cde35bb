// SPDX-License-Identifier: MPL-2.0
//! `iced_magnifier` shows a draggable magnifier lens over an image, built
//! with the Iced GUI framework.
//!
//! The lens cuts a circular hole in the fitted image and fills it with a
//! magnified, rotated copy clipped to the same circle, topped with a
//! magnifying glass glyph. Scale, rotation and size are adjusted from a side
//! panel and persisted in `settings.toml`.
//!
//! - [`domain`]: lens parameter newtypes, free of UI dependencies
//! - [`media`]: image decoding and CPU compositing with `tiny-skia`
//! - [`ui`]: the magnifier component and shared styling
//! - [`app`]: the Iced application shell

#![doc(html_root_url = "https://docs.rs/iced_magnifier/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
