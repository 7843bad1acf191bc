// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the screen the router is on and injects the application state into
//! its view function.

use super::router::Screen;
use super::state::AppState;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::home::{self, ImageSlot};
use crate::ui::video;
use crate::video_player::PlaybackState;
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub state: &'a AppState,
    pub image_slot: &'a ImageSlot,
    pub playback: &'a PlaybackState,
    pub warning_key: Option<&'static str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            state: ctx.state,
            slot: ctx.image_slot,
            warning: ctx.warning_key.map(|key| ctx.i18n.tr(key)),
        })
        .map(Message::Home),
        Screen::Video => video::view(video::ViewContext {
            i18n: ctx.i18n,
            state: ctx.state,
            playback: ctx.playback,
        })
        .map(Message::Video),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
