// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::controls;
use crate::ui::notifications::Toast;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Renders the control bar, the display surface, and the toast overlay.
pub fn view(app: &App) -> Element<'_, Message> {
    let current_marked = app
        .images
        .current()
        .is_some_and(|path| app.marks.is_marked(path));

    let control_bar = controls::view(controls::ViewContext {
        i18n: &app.i18n,
        has_images: !app.images.is_empty(),
        current_marked,
    })
    .map(Message::Controls);

    let surface = app
        .viewer
        .view(&app.i18n, !app.images.is_empty())
        .map(Message::Viewer);

    let content = Column::new().push(control_bar).push(
        Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}
