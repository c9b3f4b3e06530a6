// SPDX-License-Identifier: MPL-2.0
//! The update loop: every state transition of the session lives here.

use super::{App, Message};
use crate::deletion;
use crate::ui::controls;
use crate::ui::notifications::Notification;
use crate::ui::viewer;
use iced::Task;
use std::path::Path;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Controls(msg) => handle_controls(app, msg),
        Message::Viewer(viewer::Message::SelectDirectoryRequested) => pick_directory(),
        Message::DirectoryPicked(Some(directory)) => {
            app.open_directory(&directory);
            Task::none()
        }
        Message::DirectoryPicked(None) => Task::none(),
        Message::ApplyConfirmed(true) => apply_deletion(app),
        Message::ApplyConfirmed(false) => Task::none(),
        Message::NoImagesLeftAcknowledged | Message::QuitRequested => {
            iced::window::latest().and_then(iced::window::close)
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            app.viewer.relayout(app.display_area());
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_controls(app: &mut App, message: controls::Message) -> Task<Message> {
    match message {
        controls::Message::SelectDirectoryPressed => pick_directory(),
        controls::Message::NextPressed => {
            if app.images.next().is_some() {
                app.load_current();
            }
            Task::none()
        }
        controls::Message::PreviousPressed => {
            if app.images.previous().is_some() {
                app.load_current();
            }
            Task::none()
        }
        controls::Message::ToggleMarkPressed => {
            if let Some(path) = app.images.current().map(Path::to_path_buf) {
                app.marks.toggle(&path);
            }
            Task::none()
        }
        controls::Message::ApplyPressed => request_apply_confirmation(app),
    }
}

/// Opens the native folder picker.
fn pick_directory() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::DirectoryPicked,
    )
}

/// Asks the user to confirm the bulk deletion, unless nothing is marked.
fn request_apply_confirmation(app: &mut App) -> Task<Message> {
    if app.marks.is_empty() {
        app.notifications
            .push(Notification::info("notice-nothing-to-delete"));
        return Task::none();
    }

    let title = app.i18n.tr("confirm-deletion-title");
    let body = app.i18n.tr("confirm-deletion-body");

    Task::perform(
        async move {
            let result = rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(title)
                .set_description(body)
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                .await;
            matches!(result, rfd::MessageDialogResult::Yes)
        },
        Message::ApplyConfirmed,
    )
}

/// Runs the confirmed bulk deletion and reconciles the session with its
/// outcome.
fn apply_deletion(app: &mut App) -> Task<Message> {
    let report = deletion::apply(&mut app.marks, &mut app.images);

    for (path, reason) in &report.failures {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        app.notifications.push(
            Notification::error("notice-delete-failed")
                .with_arg("filename", filename)
                .with_arg("reason", reason.clone()),
        );
    }

    if !report.deleted.is_empty() {
        app.notifications.push(
            Notification::success("notice-deleted-count")
                .with_arg("count", report.deleted.len().to_string()),
        );
    }

    if app.images.is_empty() {
        app.viewer.clear();
        return farewell_dialog(app);
    }

    app.load_current();
    Task::none()
}

/// Tells the user the collection is empty, then ends the session.
fn farewell_dialog(app: &App) -> Task<Message> {
    let title = app.i18n.tr("no-images-left-title");
    let body = app.i18n.tr("no-images-left-body");

    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title(title)
                .set_description(body)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await;
        },
        |()| Message::NoImagesLeftAcknowledged,
    )
}
