// SPDX-License-Identifier: MPL-2.0
//! The control bar: directory selection, navigation, and the deletion
//! workflow buttons.
//!
//! The Delete button doubles as the mark indicator: its label and color
//! always reflect whether the current image is staged for deletion.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Button, Container, Row, Space, Text};
use iced::{Element, Length};

/// Messages emitted by the control bar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    SelectDirectoryPressed,
    PreviousPressed,
    NextPressed,
    ToggleMarkPressed,
    ApplyPressed,
}

/// Context required to render the control bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether a non-empty collection is loaded.
    pub has_images: bool,
    /// Whether the current image is in the marked-for-deletion set.
    pub current_marked: bool,
}

/// Renders the control bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let select_button = button(Text::new(ctx.i18n.tr("button-select-directory")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::SelectDirectoryPressed);

    let previous_button = browsing_button(
        Text::new(ctx.i18n.tr("button-previous")),
        ctx.has_images,
        Message::PreviousPressed,
    );

    let next_button = browsing_button(
        Text::new(ctx.i18n.tr("button-next")),
        ctx.has_images,
        Message::NextPressed,
    );

    let delete_key = if ctx.current_marked {
        "button-delete-marked"
    } else {
        "button-delete"
    };
    let mut delete_button = button(Text::new(ctx.i18n.tr(delete_key)))
        .padding([spacing::XS, spacing::MD])
        .style(if ctx.current_marked {
            styles::button::delete_marked
        } else {
            styles::button::delete
        });
    if ctx.has_images {
        delete_button = delete_button.on_press(Message::ToggleMarkPressed);
    }

    let apply_button = browsing_button(
        Text::new(ctx.i18n.tr("button-apply-deletion")),
        ctx.has_images,
        Message::ApplyPressed,
    );

    let row = Row::new()
        .spacing(spacing::XS)
        .push(select_button)
        .push(Space::new().width(Length::Fill))
        .push(previous_button)
        .push(next_button)
        .push(Space::new().width(Length::Fill))
        .push(delete_button)
        .push(apply_button);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}

/// A primary-styled button that is only pressable while images are loaded.
fn browsing_button(
    label: Text<'_>,
    enabled: bool,
    message: Message,
) -> Button<'_, Message> {
    let mut b = button(label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if enabled {
        b = b.on_press(message);
    }
    b
}
