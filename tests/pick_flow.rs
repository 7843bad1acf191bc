// SPDX-License-Identifier: MPL-2.0
//! Drives the `App` controller headlessly through pick flows.
//!
//! Tasks returned by `App::update` are dropped unpolled; the picker's answer
//! is fed back as the `PickCompleted` message iced would deliver.

use pick_media::app::{App, Message, Screen};
use pick_media::config::Config;
use pick_media::diagnostics::DiagnosticEventKind;
use pick_media::error::Error;
use pick_media::i18n::fluent::I18n;
use pick_media::media::image::load_reference;
use pick_media::media::MediaReference;
use pick_media::picker::{MediaKind, MediaPicker, PickFuture, PickOutcome};
use pick_media::ui::home;
use pick_media::video_player::{PlaybackMessage, PlaybackStatus};
use std::sync::{Arc, Mutex};

/// Records which kinds were requested. The outcome is injected by the test.
#[derive(Default)]
struct ScriptedPicker {
    requests: Mutex<Vec<MediaKind>>,
}

impl ScriptedPicker {
    fn requests(&self) -> Vec<MediaKind> {
        self.requests.lock().unwrap().clone()
    }
}

impl MediaPicker for ScriptedPicker {
    fn pick(&self, kind: MediaKind) -> PickFuture {
        self.requests.lock().unwrap().push(kind);
        Box::pin(async { PickOutcome::Cancelled })
    }
}

fn new_app() -> (App, Arc<ScriptedPicker>) {
    let picker = Arc::new(ScriptedPicker::default());
    let app = App::with_picker(&Config::default(), I18n::default(), picker.clone(), false);
    (app, picker)
}

/// Presses a Home button and answers the picker with `outcome`.
fn pick(app: &mut App, button: home::Message, outcome: PickOutcome) {
    let _ = app.update(Message::Home(button));
    let ticket = app.state().pending_pick().expect("picker should be open");
    let _ = app.update(Message::PickCompleted { ticket, outcome });
}

fn selected(uri: &str) -> PickOutcome {
    PickOutcome::Selected(MediaReference::new(uri))
}

fn has_event(app: &App, predicate: impl Fn(&DiagnosticEventKind) -> bool) -> bool {
    app.diagnostics().events().any(|event| predicate(&event.kind))
}

#[test]
fn cancelled_pick_changes_nothing() {
    let (mut app, _picker) = new_app();
    pick(&mut app, home::Message::PickImage, selected("file:///photos/a.png"));

    pick(&mut app, home::Message::PickImage, PickOutcome::Cancelled);
    pick(&mut app, home::Message::PickVideo, PickOutcome::Cancelled);

    assert_eq!(
        app.state().picked_image(),
        Some(&MediaReference::new("file:///photos/a.png"))
    );
    assert!(app.state().picked_video().is_none());
    assert!(!app.state().is_pick_pending());
    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.navigation_count(), 0);
    assert!(has_event(&app, |kind| matches!(
        kind,
        DiagnosticEventKind::PickCancelled {
            kind: MediaKind::Video
        }
    )));
}

#[test]
fn image_pick_stays_on_home() {
    let (mut app, picker) = new_app();
    pick(&mut app, home::Message::PickImage, selected("file:///photos/a.png"));

    assert_eq!(
        app.state().picked_image(),
        Some(&MediaReference::new("file:///photos/a.png"))
    );
    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.navigation_count(), 0);
    assert!(app.image_slot().is_loading());
    assert_eq!(picker.requests(), vec![MediaKind::Image]);
}

#[test]
fn video_pick_navigates_exactly_once() {
    let (mut app, picker) = new_app();
    pick(&mut app, home::Message::PickVideo, selected("file:///clips/b.mp4"));

    assert_eq!(
        app.state().picked_video(),
        Some(&MediaReference::new("file:///clips/b.mp4"))
    );
    assert_eq!(app.screen(), Screen::Video);
    assert_eq!(app.navigation_count(), 1);
    assert!(!app.state().is_pick_pending());
    assert_eq!(picker.requests(), vec![MediaKind::Video]);
}

#[test]
fn replayed_completion_does_not_navigate_again() {
    let (mut app, _picker) = new_app();
    let _ = app.update(Message::Home(home::Message::PickVideo));
    let ticket = app.state().pending_pick().expect("picker should be open");

    let outcome = selected("file:///clips/b.mp4");
    let _ = app.update(Message::PickCompleted {
        ticket,
        outcome: outcome.clone(),
    });
    let _ = app.update(Message::PickCompleted { ticket, outcome });

    assert_eq!(app.navigation_count(), 1);
}

#[test]
fn no_event_means_no_navigation() {
    let (mut app, _picker) = new_app();
    let _ = app.update(Message::BackRequested);
    let _ = app.view();

    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.navigation_count(), 0);
}

#[test]
fn last_image_pick_wins() {
    let (mut app, _picker) = new_app();
    pick(&mut app, home::Message::PickImage, selected("file:///photos/a.png"));
    pick(&mut app, home::Message::PickImage, selected("file:///photos/b.png"));

    assert_eq!(
        app.state().picked_image(),
        Some(&MediaReference::new("file:///photos/b.png"))
    );
}

#[test]
fn content_uri_video_scenario() {
    let (mut app, _picker) = new_app();
    pick(&mut app, home::Message::PickImage, selected("file:///photos/a.png"));
    let image_before = app.state().picked_image().cloned();

    pick(&mut app, home::Message::PickVideo, selected("content://media/7"));

    assert_eq!(
        app.state().picked_video().map(MediaReference::as_str),
        Some("content://media/7")
    );
    assert_eq!(app.navigation_count(), 1);
    assert_eq!(app.screen(), Screen::Video);
    assert_eq!(app.state().picked_image().cloned(), image_before);

    // Not a local file: the Video screen shows its error state
    assert_eq!(app.playback().status(), PlaybackStatus::Failed);
    assert!(has_event(&app, |kind| matches!(
        kind,
        DiagnosticEventKind::VideoError { .. }
    )));
    let _ = app.view();
}

#[test]
fn second_request_while_picker_open_is_rejected() {
    let (mut app, picker) = new_app();
    let _ = app.update(Message::Home(home::Message::PickImage));
    let ticket = app.state().pending_pick().expect("picker should be open");

    let _ = app.update(Message::Home(home::Message::PickVideo));

    assert_eq!(app.state().pending_pick(), Some(ticket));
    assert_eq!(ticket.kind(), MediaKind::Image);
    assert_eq!(picker.requests(), vec![MediaKind::Image]);
    assert!(has_event(&app, |kind| matches!(
        kind,
        DiagnosticEventKind::PickRejected {
            kind: MediaKind::Video
        }
    )));
}

#[test]
fn back_returns_home_then_stops() {
    let (mut app, _picker) = new_app();
    pick(&mut app, home::Message::PickVideo, selected("file:///clips/b.mp4"));
    assert_eq!(app.screen(), Screen::Video);

    let _ = app.update(Message::BackRequested);
    assert_eq!(app.screen(), Screen::Home);
    let _ = app.update(Message::BackRequested);
    assert_eq!(app.screen(), Screen::Home);

    // The picked video survives leaving its screen
    assert!(app.state().picked_video().is_some());
}

#[test]
fn image_load_failure_is_swallowed() {
    let (mut app, _picker) = new_app();
    pick(&mut app, home::Message::PickImage, selected("file:///photos/broken.png"));

    let _ = app.update(Message::ImageLoaded {
        reference: MediaReference::new("file:///photos/broken.png"),
        result: Err(Error::Io("truncated".into())),
    });

    assert!(matches!(
        app.image_slot(),
        pick_media::ui::home::ImageSlot::Failed(_)
    ));
    assert!(app.state().picked_image().is_some());
    assert!(has_event(&app, |kind| matches!(
        kind,
        DiagnosticEventKind::ImageLoadFailed { .. }
    )));
}

#[test]
fn decoded_image_is_shown_for_current_reference() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("dot.png");
    image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([0, 128, 255, 255]))
        .save(&path)
        .expect("failed to write png");
    let reference = MediaReference::from_path(&path).expect("absolute path");

    let (mut app, _picker) = new_app();
    pick(
        &mut app,
        home::Message::PickImage,
        PickOutcome::Selected(reference.clone()),
    );
    let result = load_reference(&reference);
    let _ = app.update(Message::ImageLoaded {
        reference: reference.clone(),
        result,
    });

    let image = app
        .image_slot()
        .image_for(app.state().picked_image())
        .expect("image should be loaded");
    assert_eq!((image.width, image.height), (2, 2));
}

#[test]
fn playback_from_old_session_is_ignored() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, b"placeholder").unwrap();
    let reference = MediaReference::from_path(&path).expect("absolute path");

    let (mut app, _picker) = new_app();
    pick(&mut app, home::Message::PickVideo, PickOutcome::Selected(reference));
    let session = app.playback().session_id();

    let _ = app.update(Message::Playback {
        session: session + 1,
        message: PlaybackMessage::Error("Invalid data found".into()),
    });
    assert_eq!(app.playback().status(), PlaybackStatus::Loading);

    let _ = app.update(Message::Playback {
        session,
        message: PlaybackMessage::Error("Invalid data found".into()),
    });
    assert_eq!(app.playback().status(), PlaybackStatus::Failed);
}
