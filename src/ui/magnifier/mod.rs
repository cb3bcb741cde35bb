// SPDX-License-Identifier: MPL-2.0
//! Magnifier lens component.
//!
//! Owns the lens state (offset, parameters), the compositor for the current
//! image and the last composited frame. Every change to the offset, the
//! parameters, the viewport size or the image re-renders the frame
//! synchronously, so the base hole and the magnified content always agree
//! on the lens position.
//!
//! Side effects the component cannot perform itself (saving preferences,
//! opening a file dialog) are returned to the application as [`Effect`]s.

pub mod controls;
pub mod gesture;
pub mod load_error;

pub use load_error::LoadFailure;

use crate::domain::lens::{LensParams, LensScale, RotationFraction, SizeDelta};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{Compositor, ImageData};
use crate::ui::state::DragTracker;
use crate::ui::theming::ColorScheme;
use gesture::GestureSurface;
use iced::widget::image::Handle;
use iced::widget::{canvas, container, image, Row, Stack};
use iced::{Background, Color, ContentFit, Element, Length, Size, Theme, Vector};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved while pressed; translation from the press position.
    DragMoved(Vector),
    /// Left button released.
    DragEnded,
    /// The lens area changed size.
    ViewportResized(Size),
    ScaleChanged(f32),
    RotationChanged(f32),
    SizeChanged(f32),
    /// Recenter the lens and restore the default scale, rotation and size.
    ResetLens,
    OpenImage,
}

/// Work the application performs on behalf of the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Lens parameters changed and should be saved.
    PersistParams,
    /// The user asked to pick another image.
    OpenFileDialog,
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

#[derive(Debug)]
pub struct State {
    drag: DragTracker,
    params: LensParams,
    background: Color,
    compositor: Option<Compositor>,
    viewport: Option<(u32, u32)>,
    frame: Option<Handle>,
    load_failure: Option<LoadFailure>,
}

impl State {
    #[must_use]
    pub fn new(params: LensParams, background: Color) -> Self {
        Self {
            drag: DragTracker::default(),
            params,
            background,
            compositor: None,
            viewport: None,
            frame: None,
            load_failure: None,
        }
    }

    /// Replaces the displayed image. Clears any previous load failure.
    pub fn set_image(&mut self, image: &ImageData) {
        match Compositor::new(image, to_skia_color(self.background)) {
            Ok(compositor) => {
                self.compositor = Some(compositor);
                self.load_failure = None;
                self.render();
            }
            Err(error) => self.set_load_failure(None, error),
        }
    }

    /// Shows the load-failure panel instead of the lens.
    pub fn set_load_failure(&mut self, path: Option<PathBuf>, error: Error) {
        self.compositor = None;
        self.frame = None;
        self.load_failure = Some(LoadFailure::new(path, error));
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::DragMoved(translation) => {
                self.drag.drag_moved(translation);
                self.render();
                Effect::None
            }
            Message::DragEnded => {
                if let Some(committed) = self.drag.drag_ended() {
                    tracing::debug!(x = committed.x, y = committed.y, "lens offset committed");
                }
                Effect::None
            }
            Message::ViewportResized(size) => {
                let viewport = (size.width.round() as u32, size.height.round() as u32);
                if self.viewport != Some(viewport) {
                    self.viewport = Some(viewport);
                    self.render();
                }
                Effect::None
            }
            Message::ScaleChanged(value) => {
                self.params.scale = LensScale::new(value);
                self.render();
                Effect::PersistParams
            }
            Message::RotationChanged(value) => {
                self.params.rotation = RotationFraction::new(value);
                self.render();
                Effect::PersistParams
            }
            Message::SizeChanged(value) => {
                self.params.size = SizeDelta::new(value);
                self.render();
                Effect::PersistParams
            }
            Message::ResetLens => {
                self.drag.reset();
                self.params = LensParams {
                    tint: self.params.tint,
                    rotate_content: self.params.rotate_content,
                    ..LensParams::default()
                };
                self.render();
                Effect::PersistParams
            }
            Message::OpenImage => Effect::OpenFileDialog,
        }
    }

    #[must_use]
    pub fn params(&self) -> &LensParams {
        &self.params
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.drag.offset()
    }

    #[must_use]
    pub fn committed_offset(&self) -> Vector {
        self.drag.committed_offset()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Handle> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn load_failure(&self) -> Option<&LoadFailure> {
        self.load_failure.as_ref()
    }

    fn render(&mut self) {
        let (Some(compositor), Some((width, height))) = (self.compositor.as_mut(), self.viewport)
        else {
            return;
        };

        self.frame = compositor
            .render(width, height, self.drag.offset(), &self.params)
            .map(|pixmap| Handle::from_rgba(width, height, pixmap.take()));
    }
}

/// Lens area with the controls panel on its right.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let lens_area: Element<'a, Message> = match &state.load_failure {
        Some(failure) => load_error::view(ctx.i18n, ctx.colors, failure),
        None => lens_view(state),
    };

    Row::new()
        .push(lens_area)
        .push(controls::view(
            controls::ViewContext { i18n: ctx.i18n },
            &state.params,
        ))
        .into()
}

fn lens_view(state: &State) -> Element<'_, Message> {
    let background = state.background;
    let base: Element<'_, Message> = match &state.frame {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Fill)
            .into(),
        None => container(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            })
            .into(),
    };

    let surface = canvas(GestureSurface)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(surface)
        .into()
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(color.r, color.g, color.b, 1.0).unwrap_or(tiny_skia::Color::BLACK)
}
