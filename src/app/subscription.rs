// SPDX-License-Identifier: MPL-2.0
//! Event and playback subscriptions.

use super::Message;
use crate::ui::video_modal::VideoModal;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Escape closes the video modal. Key presses already handled by a widget
/// are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

/// Decoder messages for the open video, if any.
pub fn create_video_subscription(modal: &VideoModal) -> Subscription<Message> {
    modal
        .subscription()
        .map(|(session, message)| Message::Playback { session, message })
}
