// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the magnifier component to localization and
//! persisted preferences, and turns component effects into side effects:
//! saving `settings.toml`, opening the file dialog and decoding images in
//! the background.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::{self, IMAGE_EXTENSIONS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::magnifier::{self, Effect};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    magnifier: magnifier::State,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    config: Config,
    /// Explicit config directory, `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    /// i18n key of a non-fatal settings problem shown above the lens.
    warning_key: Option<String>,
    /// Path of the image currently displayed.
    image_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("image_path", &self.image_path)
            .field("theme_mode", &self.theme_mode)
            .field("warning_key", &self.warning_key)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and, when a path was given, starts
    /// decoding it in the background. Without a path the placeholder image
    /// is shown.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, warning_key) = config::load_with_override(config_dir.clone());
        if let Some(key) = &warning_key {
            tracing::warn!(key = %key, "using default settings");
        }

        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        tracing::debug!(locale = %i18n.current_locale(), "locale selected");
        let theme_mode = config.general.theme_mode;
        let colors = ColorScheme::for_mode(theme_mode);
        let magnifier = magnifier::State::new(config.lens.to_params(), colors.lens_backdrop);

        let mut app = App {
            i18n,
            magnifier,
            theme_mode,
            colors,
            config,
            config_dir,
            warning_key,
            image_path: None,
        };

        let task = match flags.file_path {
            Some(path) => app.load_image(PathBuf::from(path)),
            None => {
                app.magnifier.set_image(&media::placeholder());
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .image_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Magnifier(magnifier_message) => {
                match self.magnifier.handle(magnifier_message) {
                    Effect::None => Task::none(),
                    Effect::PersistParams => {
                        self.persist_params();
                        Task::none()
                    }
                    Effect::OpenFileDialog => open_file_dialog(),
                }
            }
            Message::ImageLoaded { path, result } => {
                match result {
                    Ok(image) => {
                        tracing::info!(
                            path = %path.display(),
                            width = image.width,
                            height = image.height,
                            "image loaded"
                        );
                        self.magnifier.set_image(&image);
                        self.image_path = Some(path);
                    }
                    Err(error) => {
                        tracing::warn!(path = %path.display(), "failed to load image: {error}");
                        self.magnifier.set_load_failure(Some(path), error);
                        self.image_path = None;
                    }
                }
                Task::none()
            }
            Message::OpenFileDialogResult(Some(path)) | Message::FileDropped(path) => {
                self.load_image(path)
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::DismissWarning => {
                self.warning_key = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let lens = magnifier::view(
            magnifier::ViewContext {
                i18n: &self.i18n,
                colors: &self.colors,
            },
            &self.magnifier,
        )
        .map(Message::Magnifier);

        let mut content = Column::new().width(Length::Fill).height(Length::Fill);

        if let Some(key) = &self.warning_key {
            let banner = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    Text::new(self.i18n.tr(key))
                        .size(typography::BODY)
                        .color(self.colors.text_primary),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new(self.i18n.tr("notification-dismiss")))
                        .on_press(Message::DismissWarning)
                        .padding([spacing::XXS, spacing::SM]),
                );

            content = content.push(
                container(banner)
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::container::banner(self.colors.warning)),
            );
        }

        content.push(lens).into()
    }

    fn load_image(&mut self, path: PathBuf) -> Task<Message> {
        tracing::debug!(path = %path.display(), "loading image");
        Task::perform(media::load_image_async(path.clone()), move |result| {
            Message::ImageLoaded {
                path: path.clone(),
                result,
            }
        })
    }

    fn persist_params(&mut self) {
        self.config.lens.apply_params(self.magnifier.params());
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!("failed to save settings: {err}");
            self.warning_key = Some("notification-config-save-error".to_string());
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}
