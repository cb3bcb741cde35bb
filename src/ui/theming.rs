// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the magnifier view draws with directly.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,

    /// Dimmed surface behind the fitted image and inside the lens hole.
    pub lens_backdrop: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub error: Color,
    pub warning: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            lens_backdrop: dimmed(palette::WHITE),
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            lens_backdrop: dimmed(palette::GRAY_900),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
        }
    }

    /// Returns the scheme for `mode`, detecting the OS preference for `System`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// `surface` seen through a black veil of [`opacity::BACKDROP_DIM`].
fn dimmed(surface: Color) -> Color {
    let keep = 1.0 - opacity::BACKDROP_DIM;
    Color::from_rgb(surface.r * keep, surface.g * keep, surface.b * keep)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Iced theme matching the effective mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
