// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every handler works on an [`UpdateContext`] borrowed from the `App`, so
//! state changes stay in one place and the handlers can be read top-down.

use super::router::Router;
use super::state::AppState;
use super::Message;
use crate::diagnostics::{DiagnosticEventKind, Diagnostics};
use crate::error::Error;
use crate::media::image::load_reference;
use crate::media::video::{extract_video_metadata, resolve_video_path, VideoMetadata};
use crate::media::{ImageData, MediaReference};
use crate::picker::{self, Completion, MediaKind, MediaPicker, PickOutcome, PickTicket};
use crate::ui::home::{self, ImageSlot};
use crate::ui::video;
use crate::video_player::{PlaybackMessage, PlaybackState};
use iced::Task;
use std::sync::Arc;

/// Mutable view of the `App` handed to the handlers.
pub struct UpdateContext<'a> {
    pub state: &'a mut AppState,
    pub router: &'a mut Router,
    pub picker: &'a Arc<dyn MediaPicker>,
    pub image_slot: &'a mut ImageSlot,
    pub playback: &'a mut PlaybackState,
    pub diagnostics: &'a mut Diagnostics,
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        home::Message::PickImage => request_pick(ctx, MediaKind::Image),
        home::Message::PickVideo => request_pick(ctx, MediaKind::Video),
    }
}

pub fn handle_video_message(ctx: &mut UpdateContext<'_>, message: video::Message) -> Task<Message> {
    match message {
        video::Message::TogglePlayback => {
            ctx.playback.toggle_playback();
            Task::none()
        }
        video::Message::Back => handle_back(ctx),
    }
}

/// Opens the picker for `kind` unless one is already open.
fn request_pick(ctx: &mut UpdateContext<'_>, kind: MediaKind) -> Task<Message> {
    let ticket = match picker::begin_pick(ctx.state, kind) {
        Ok(ticket) => ticket,
        Err(_) => {
            ctx.diagnostics
                .record(DiagnosticEventKind::PickRejected { kind });
            return Task::none();
        }
    };
    ctx.diagnostics
        .record(DiagnosticEventKind::PickRequested { kind });

    Task::perform(ctx.picker.pick(kind), move |outcome| Message::PickCompleted {
        ticket,
        outcome,
    })
}

pub fn handle_pick_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: PickTicket,
    outcome: PickOutcome,
) -> Task<Message> {
    let kind = ticket.kind();

    match picker::complete_pick(ctx.state, ticket, outcome) {
        Completion::Ignored => Task::none(),
        Completion::Cancelled => {
            ctx.diagnostics
                .record(DiagnosticEventKind::PickCancelled { kind });
            Task::none()
        }
        Completion::ImagePicked => {
            let Some(reference) = ctx.state.picked_image().cloned() else {
                return Task::none();
            };
            record_selected(ctx.diagnostics, kind, &reference);
            load_picked_image(ctx, reference)
        }
        Completion::VideoPicked(event) => {
            let Some(reference) = ctx.state.picked_video().cloned() else {
                return Task::none();
            };
            record_selected(ctx.diagnostics, kind, &reference);

            ctx.router.navigate(event);
            ctx.diagnostics.record(DiagnosticEventKind::Navigated {
                to: ctx.router.current().into(),
            });

            start_playback(ctx, reference)
        }
    }
}

fn record_selected(diagnostics: &mut Diagnostics, kind: MediaKind, reference: &MediaReference) {
    diagnostics.record(DiagnosticEventKind::PickSelected {
        kind,
        reference: reference.to_string(),
    });
}

fn load_picked_image(ctx: &mut UpdateContext<'_>, reference: MediaReference) -> Task<Message> {
    ctx.image_slot.start_loading(reference.clone());

    let source = reference.clone();
    Task::perform(async move { load_reference(&source) }, move |result| {
        Message::ImageLoaded {
            reference: reference.clone(),
            result,
        }
    })
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    reference: MediaReference,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    let key = reference.to_string();
    // Failures stay out of the UI, the panel just remains empty
    if let Some(err) = ctx.image_slot.finish(reference, result) {
        ctx.diagnostics.record(DiagnosticEventKind::ImageLoadFailed {
            reference: key,
            message: err.to_string(),
        });
    }
    Task::none()
}

/// Prepares the Video screen and probes the container in the background.
fn start_playback(ctx: &mut UpdateContext<'_>, reference: MediaReference) -> Task<Message> {
    if let Err(err) = ctx.playback.load(reference.clone()) {
        ctx.diagnostics.record(DiagnosticEventKind::VideoError {
            reference: reference.to_string(),
            message: err.to_string(),
        });
        return Task::none();
    }

    let source = reference.clone();
    Task::perform(
        async move { resolve_video_path(&source).and_then(|path| extract_video_metadata(path)) },
        move |result| Message::VideoProbed {
            reference: reference.clone(),
            result,
        },
    )
}

pub fn handle_video_probed(
    ctx: &mut UpdateContext<'_>,
    reference: &MediaReference,
    result: Result<VideoMetadata, Error>,
) -> Task<Message> {
    // A failed probe is not fatal, the decoder reports real problems
    if let Ok(metadata) = result {
        ctx.playback.set_metadata(reference, metadata);
    }
    Task::none()
}

pub fn handle_playback(
    ctx: &mut UpdateContext<'_>,
    session: u64,
    message: PlaybackMessage,
) -> Task<Message> {
    if session != ctx.playback.session_id() {
        return Task::none();
    }

    if let Some(err) = ctx.playback.handle(message) {
        let reference = ctx
            .playback
            .reference()
            .map(ToString::to_string)
            .unwrap_or_default();
        ctx.diagnostics.record(DiagnosticEventKind::VideoError {
            reference,
            message: err.to_string(),
        });
    }
    Task::none()
}

/// Host back gesture. A no-op on the root screen.
pub fn handle_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.router.back() {
        ctx.diagnostics.record(DiagnosticEventKind::NavigatedBack {
            to: ctx.router.current().into(),
        });
    }
    Task::none()
}
