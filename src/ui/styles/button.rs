// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Style pour le bouton Supprimer quand l'image n'est pas marquée.
pub fn delete(_theme: &Theme, status: button::Status) -> button::Style {
    flat(palette::ERROR_500, status)
}

/// Style for the Delete button once the current image is marked.
pub fn delete_marked(_theme: &Theme, status: button::Status) -> button::Style {
    flat(palette::SUCCESS_500, status)
}

fn flat(color: iced::Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(iced::Color {
                a: 0.85,
                ..color
            })),
            text_color: WHITE,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Grayed out, non-interactif.
fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_styles_use_distinct_colors() {
        let theme = Theme::Dark;
        let unmarked = delete(&theme, button::Status::Active);
        let marked = delete_marked(&theme, button::Status::Active);
        assert_ne!(unmarked.background, marked.background);
    }

    #[test]
    fn disabled_buttons_share_the_muted_style() {
        let theme = Theme::Dark;
        let a = primary(&theme, button::Status::Disabled);
        let b = delete(&theme, button::Status::Disabled);
        assert_eq!(a.background, b.background);
        assert_eq!(a.text_color, b.text_color);
    }
}
