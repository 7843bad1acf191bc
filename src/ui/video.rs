// SPDX-License-Identifier: MPL-2.0
//! Video screen: playback surface, play/pause and Back.

use crate::app::state::AppState;
use crate::i18n::fluent::I18n;
use crate::media::video::VideoMetadata;
use crate::media::MediaReference;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::home::{caption, panel_style};
use crate::video_player::{PlaybackState, PlaybackStatus};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Image, Row, Space},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The picked video is read from here, the player only mirrors it.
    pub state: &'a AppState,
    pub playback: &'a PlaybackState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TogglePlayback,
    Back,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let playback = ctx.playback;

    let surface: Element<'_, Message> = match playback.frame() {
        Some(frame) => Image::new(frame.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().into(),
    };
    let panel = container(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(panel_style);

    let back = button(text(format!("← {}", ctx.i18n.tr("video-back"))).size(typography::BODY))
        .on_press(Message::Back);

    let toggle_label = match playback.status() {
        PlaybackStatus::Playing => ctx.i18n.tr("video-pause"),
        PlaybackStatus::Ended => ctx.i18n.tr("video-replay"),
        _ => ctx.i18n.tr("video-play"),
    };
    let can_toggle = matches!(
        playback.status(),
        PlaybackStatus::Playing | PlaybackStatus::Paused | PlaybackStatus::Ended
    );
    let toggle = button(text(toggle_label).size(typography::BODY))
        .style(button::primary)
        .on_press_maybe(can_toggle.then_some(Message::TogglePlayback));

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    let status_line = status_line(ctx.i18n, ctx.state, playback);

    let mut content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(Horizontal::Center);
    if let Some(name) = ctx.state.picked_video().map(MediaReference::display_name) {
        content = content.push(text(name).size(typography::BODY));
    }
    content = content.push(panel);
    if let Some(line) = status_line {
        content = content.push(caption(line));
    }
    content.push(controls).into()
}

/// Caption under the surface: what is missing, what failed, or progress.
fn status_line(i18n: &I18n, state: &AppState, playback: &PlaybackState) -> Option<String> {
    if state.picked_video().is_none() {
        return Some(i18n.tr("video-nothing-picked"));
    }
    match (playback.status(), playback.error(), playback.metadata()) {
        (_, Some(error), _) => Some(i18n.tr(error.i18n_key())),
        (PlaybackStatus::Loading, None, _) => Some(i18n.tr("video-buffering")),
        (_, None, Some(metadata)) => Some(describe(metadata, playback.position_secs())),
        _ => None,
    }
}

/// "640×480 · 0:12 / 1:05"
fn describe(metadata: &VideoMetadata, position_secs: f64) -> String {
    format!(
        "{}×{} · {} / {}",
        metadata.width,
        metadata.height,
        format_time(position_secs),
        format_time(metadata.duration_secs)
    )
}

fn format_time(secs: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = secs.max(0.0).floor() as u64;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(3725.0), "1:02:05");
    }

    #[test]
    fn negative_time_clamps_to_zero() {
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn caption_says_nothing_picked_without_a_video() {
        let i18n = I18n::default();
        let state = AppState::new();
        let playback = PlaybackState::new(false, false);

        assert_eq!(
            status_line(&i18n, &state, &playback),
            Some(i18n.tr("video-nothing-picked"))
        );
    }

    #[test]
    fn caption_shows_playback_error_for_picked_video() {
        let i18n = I18n::default();
        let reference = MediaReference::new("content://media/7");
        let mut state = AppState::new();
        state.picked_video = Some(reference.clone());
        let mut playback = PlaybackState::new(false, false);
        let error = playback.load(reference).expect_err("not a local file");

        assert_eq!(
            status_line(&i18n, &state, &playback),
            Some(i18n.tr(error.i18n_key()))
        );
    }

    #[test]
    fn view_titles_the_picked_video() {
        let i18n = I18n::default();
        let mut state = AppState::new();
        state.picked_video = Some(MediaReference::new("file:///clips/b.mp4"));
        let playback = PlaybackState::new(false, false);

        assert_eq!(
            state.picked_video().map(MediaReference::display_name).as_deref(),
            Some("b.mp4")
        );
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
            playback: &playback,
        });
    }

    #[test]
    fn describe_shows_size_and_progress() {
        let metadata = VideoMetadata {
            width: 640,
            height: 480,
            duration_secs: 65.0,
            fps: 30.0,
        };
        assert_eq!(describe(&metadata, 12.4), "640×480 · 0:12 / 1:05");
    }
}
