// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: keyboard shortcuts, window resizes, and the
//! notification tick.
//!
//! Keyboard handling goes through an explicit dispatch table so the
//! shortcut-to-transition mapping can be tested without a running toolkit.

use super::{App, Message};
use crate::ui::controls;
use iced::keyboard::{key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([
        create_event_subscription(),
        create_tick_subscription(app.notifications.has_notifications()),
    ])
}

/// Routes native events to application messages.
fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => key_binding(&key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// The keyboard dispatch table.
///
/// Right/Left step through the collection, `d` toggles the deletion mark,
/// `q` quits.
pub fn key_binding(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(Message::Controls(controls::Message::NextPressed)),
        Key::Named(Named::ArrowLeft) => {
            Some(Message::Controls(controls::Message::PreviousPressed))
        }
        Key::Character(c) if c.as_str() == "d" => {
            Some(Message::Controls(controls::Message::ToggleMarkPressed))
        }
        Key::Character(c) if c.as_str() == "q" => Some(Message::QuitRequested),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert!(matches!(
            key_binding(&Key::Named(Named::ArrowRight)),
            Some(Message::Controls(controls::Message::NextPressed))
        ));
        assert!(matches!(
            key_binding(&Key::Named(Named::ArrowLeft)),
            Some(Message::Controls(controls::Message::PreviousPressed))
        ));
    }

    #[test]
    fn d_toggles_the_deletion_mark() {
        assert!(matches!(
            key_binding(&Key::Character("d".into())),
            Some(Message::Controls(controls::Message::ToggleMarkPressed))
        ));
    }

    #[test]
    fn q_requests_quit() {
        assert!(matches!(
            key_binding(&Key::Character("q".into())),
            Some(Message::QuitRequested)
        ));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(key_binding(&Key::Named(Named::Enter)).is_none());
        assert!(key_binding(&Key::Character("x".into())).is_none());
        assert!(key_binding(&Key::Named(Named::Space)).is_none());
    }
}
