// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::router::Screen;
use super::Message;
use crate::video_player::{video_playback, PlaybackState};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Maps Escape to the host back gesture.
///
/// Keys already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::BackRequested),
            _ => None,
        }
    })
}

/// Runs the decoder while the Video screen is shown.
///
/// Leaving the screen drops the subscription, which stops the decoder.
pub fn create_video_subscription(screen: Screen, playback: &PlaybackState) -> Subscription<Message> {
    if screen != Screen::Video {
        return Subscription::none();
    }
    let Some((path, session)) = playback.subscription_source() else {
        return Subscription::none();
    };

    video_playback(path, session)
        .with(session)
        .map(|(session, message)| Message::Playback { session, message })
}
