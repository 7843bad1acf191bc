// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::video::VideoMetadata;
use crate::media::{ImageData, MediaReference};
use crate::picker::{PickOutcome, PickTicket};
use crate::ui::{home, video};
use crate::video_player::PlaybackMessage;

/// Top-level messages consumed by `App::update`. Screen messages are
/// forwarded; async results come back as their own variants.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Video(video::Message),
    /// The picker future for `ticket` resolved.
    PickCompleted {
        ticket: PickTicket,
        outcome: PickOutcome,
    },
    ImageLoaded {
        reference: MediaReference,
        result: Result<ImageData, Error>,
    },
    VideoProbed {
        reference: MediaReference,
        result: Result<VideoMetadata, Error>,
    },
    /// Decoder output, tagged with the playback session it belongs to.
    Playback {
        session: u64,
        message: PlaybackMessage,
    },
    /// Host back gesture (Escape).
    BackRequested,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Echo diagnostics to stderr (`--verbose`).
    pub verbose: bool,
}
