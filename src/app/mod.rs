// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the image collection, the mark set, the
//! viewer, localization, and notifications, and translates messages into
//! side effects like dialogs and file deletion. Policy decisions (window
//! geometry, what happens when the collection empties) stay close to the
//! update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::deletion::MarkSet;
use crate::directory_scanner::ImageList;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer;
use iced::{Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 450;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Vertical space taken by the control bar; the rest of the window is the
/// display area the image is fitted into.
const CONTROL_BAR_HEIGHT: f32 = 60.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    images: ImageList,
    marks: MarkSet,
    viewer: viewer::State,
    window_size: Size,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.images.len())
            .field("marked", &self.marks.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            images: ImageList::new(),
            marks: MarkSet::new(),
            viewer: viewer::State::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally scans a directory passed
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut loaded_config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &loaded_config);

        // A language picked on the command line becomes the preference.
        if let Some(lang) = flags.lang {
            if loaded_config.language.as_deref() != Some(lang.as_str()) {
                loaded_config.language = Some(lang);
                if let Err(err) = config::save(&loaded_config) {
                    log::warn!("could not persist language preference: {}", err);
                }
            }
        }

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(directory) = flags.directory {
            app.open_directory(Path::new(&directory));
        }

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        match (self.images.current(), self.images.current_index()) {
            (Some(path), Some(index)) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("{} - {} ({}/{})", base, name, index + 1, self.images.len())
            }
            _ => base,
        }
    }

    /// The region of the window the image is fitted into.
    fn display_area(&self) -> Size {
        Size::new(
            self.window_size.width,
            (self.window_size.height - CONTROL_BAR_HEIGHT).max(1.0),
        )
    }

    /// Replaces the collection with a scan of `directory`.
    ///
    /// An empty scan leaves all state untouched apart from an informational
    /// notice; stale marks never survive a collection swap.
    fn open_directory(&mut self, directory: &Path) {
        match ImageList::scan_directory(directory) {
            Ok(list) if list.is_empty() => {
                self.notifications
                    .push(Notification::info("notice-no-images-found"));
            }
            Ok(list) => {
                self.images = list;
                self.marks.clear();
                self.load_current();
            }
            Err(err) => {
                self.notifications.push(
                    Notification::error("notice-scan-failed").with_arg("reason", err.to_string()),
                );
            }
        }
    }

    /// Loads the image at the cursor into the viewer.
    ///
    /// A decode failure surfaces as an error notice; the file stays in the
    /// collection and the surface goes blank.
    fn load_current(&mut self) {
        let Some(path) = self.images.current().map(Path::to_path_buf) else {
            self.viewer.clear();
            return;
        };

        if let Err(err) = self.viewer.load(&path, self.display_area()) {
            log::warn!("could not load {}: {}", path.display(), err);
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.notifications.push(
                Notification::error("notice-load-failed")
                    .with_arg("filename", filename)
                    .with_arg("reason", err.to_string()),
            );
        }
    }
}
