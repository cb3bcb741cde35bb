// SPDX-License-Identifier: MPL-2.0
//! Panel shown in place of the lens when an image cannot be loaded.

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Text};
use iced::{Background, Element, Length, Theme};
use std::path::{Path, PathBuf};

/// A failed load, kept until another image loads successfully.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: Option<PathBuf>,
    pub error: Error,
}

impl LoadFailure {
    #[must_use]
    pub fn new(path: Option<PathBuf>, error: Error) -> Self {
        Self { path, error }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

pub fn view<'a>(i18n: &I18n, colors: &ColorScheme, failure: &LoadFailure) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("error-load-image-title"))
                .size(typography::TITLE_SM)
                .color(colors.error),
        )
        .push(Text::new(i18n.tr(failure.error.i18n_key())).size(typography::BODY));

    if let Some(path) = failure.path() {
        let path = path.display().to_string();
        content = content.push(
            Text::new(i18n.tr_with_args("error-load-image-path", &[("path", path.as_str())]))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }

    let details = failure.error.to_string();
    content = content
        .push(
            Text::new(i18n.tr_with_args("error-details", &[("details", details.as_str())]))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        )
        .push(button(Text::new(i18n.tr("controls-open-image"))).on_press(Message::OpenImage));

    let surface = colors.surface_primary;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(surface)),
            ..Default::default()
        })
        .into()
}
