// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::controls;
use crate::ui::notifications;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    Viewer(viewer::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the directory picker dialog.
    DirectoryPicked(Option<PathBuf>),
    /// Outcome of the deletion confirmation dialog.
    ApplyConfirmed(bool),
    /// The "no images left" dialog was closed; the session ends.
    NoImagesLeftAcknowledged,
    /// The window was resized; the display area changed.
    WindowResized(iced::Size),
    /// Quit was requested (keyboard shortcut).
    QuitRequested,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory to scan on startup.
    pub directory: Option<String>,
}
