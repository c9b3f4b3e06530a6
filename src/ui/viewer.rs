// SPDX-License-Identifier: MPL-2.0
//! The image display surface.
//!
//! Holds the decoded original of the current image together with the bitmap
//! scaled for the present display area, and renders whichever of the empty
//! state, blank surface, or centered image applies.

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::image_handler::{ImageData, ScaledImage};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Text};
use iced::{alignment, Element, Length, Size};
use std::path::Path;

/// Messages emitted by the viewer surface.
#[derive(Debug, Clone)]
pub enum Message {
    /// The empty-state button asking for a directory was pressed.
    SelectDirectoryRequested,
}

/// Display state for the current image.
#[derive(Debug, Default)]
pub struct State {
    original: Option<ImageData>,
    scaled: Option<ScaledImage>,
}

impl State {
    /// Creates an empty viewer state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the image at `path` and lays it out for `area`.
    ///
    /// On error the previous image is dropped so a stale picture is never
    /// shown for the wrong path.
    pub fn load(&mut self, path: &Path, area: Size) -> Result<()> {
        self.clear();
        let data = ImageData::load(path)?;
        self.original = Some(data);
        self.relayout(area);
        Ok(())
    }

    /// Drops the current image and its scaled form.
    pub fn clear(&mut self) {
        self.original = None;
        self.scaled = None;
    }

    /// Recomputes the scaled bitmap for a new display area.
    ///
    /// No-op when nothing is loaded.
    pub fn relayout(&mut self, area: Size) {
        let Some(original) = &self.original else {
            return;
        };
        self.scaled = Some(original.scaled_to_fit(area));
    }

    /// Whether an image is currently decoded.
    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    /// Dimensions of the currently displayed bitmap, if any.
    pub fn scaled_size(&self) -> Option<(u32, u32)> {
        self.scaled.as_ref().map(|s| (s.width, s.height))
    }

    /// Renders the display surface.
    ///
    /// `has_collection` selects between the welcome empty state and the
    /// (possibly blank, after a decode error) image surface.
    pub fn view<'a>(&'a self, i18n: &'a I18n, has_collection: bool) -> Element<'a, Message> {
        if !has_collection {
            return empty_state(i18n);
        }

        let content: Element<'a, Message> = match &self.scaled {
            Some(scaled) => Image::new(scaled.handle.clone())
                .width(Length::Fixed(scaled.width as f32))
                .height(Length::Fixed(scaled.height as f32))
                .into(),
            // Decode failed; the error toast explains why.
            None => iced::widget::Space::new().into(),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

/// Renders the empty state shown before any directory is selected.
fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::SelectDirectoryRequested);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
