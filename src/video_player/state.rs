// SPDX-License-Identifier: MPL-2.0
//! UI-side playback state for the Video screen.

use super::{DecoderCommand, DecoderCommandSender, PlaybackMessage};
use crate::error::{Error, VideoError};
use crate::media::video::{resolve_video_path, VideoMetadata};
use crate::media::MediaReference;
use iced::widget::image;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing picked yet.
    Idle,
    /// Waiting for the decoder to start or deliver its first frame.
    Loading,
    Playing,
    Paused,
    Ended,
    Failed,
}

#[derive(Debug)]
pub struct PlaybackState {
    reference: Option<MediaReference>,
    source: Option<PathBuf>,
    session_id: u64,
    status: PlaybackStatus,
    frame: Option<image::Handle>,
    position_secs: f64,
    metadata: Option<VideoMetadata>,
    error: Option<VideoError>,
    sender: Option<DecoderCommandSender>,
    autoplay: bool,
    loop_enabled: bool,
}

impl PlaybackState {
    #[must_use]
    pub fn new(autoplay: bool, loop_enabled: bool) -> Self {
        Self {
            reference: None,
            source: None,
            session_id: 0,
            status: PlaybackStatus::Idle,
            frame: None,
            position_secs: 0.0,
            metadata: None,
            error: None,
            sender: None,
            autoplay,
            loop_enabled,
        }
    }

    /// Starts a new playback session for `reference`.
    ///
    /// The previous session's decoder is abandoned; its subscription id no
    /// longer matches and iced drops it.
    ///
    /// # Errors
    ///
    /// Returns the reason the reference cannot be played. The state is then
    /// [`PlaybackStatus::Failed`].
    pub fn load(&mut self, reference: MediaReference) -> Result<(), VideoError> {
        self.session_id += 1;
        self.frame = None;
        self.position_secs = 0.0;
        self.metadata = None;
        self.error = None;
        self.sender = None;
        self.reference = Some(reference.clone());

        match resolve_video_path(&reference) {
            Ok(path) => {
                self.source = Some(path);
                self.status = PlaybackStatus::Loading;
                Ok(())
            }
            Err(err) => {
                let video_error = match err {
                    Error::Video(video_error) => video_error,
                    other => VideoError::Other(other.to_string()),
                };
                self.source = None;
                Err(self.fail(video_error))
            }
        }
    }

    /// File and session the playback subscription should run for.
    #[must_use]
    pub fn subscription_source(&self) -> Option<(PathBuf, u64)> {
        if self.status == PlaybackStatus::Failed {
            return None;
        }
        self.source.clone().map(|path| (path, self.session_id))
    }

    /// Applies a decoder message. Returns the error when playback fails.
    pub fn handle(&mut self, message: PlaybackMessage) -> Option<VideoError> {
        match message {
            PlaybackMessage::Started(sender) => {
                if self.autoplay {
                    self.status = match sender.send(DecoderCommand::Play) {
                        Ok(()) => PlaybackStatus::Playing,
                        Err(_) => PlaybackStatus::Paused,
                    };
                } else {
                    self.status = PlaybackStatus::Paused;
                }
                self.sender = Some(sender);
                None
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                pts_secs,
            } => {
                if self.status == PlaybackStatus::Failed {
                    return None;
                }
                self.frame = Some(image::Handle::from_rgba(
                    width,
                    height,
                    rgba_data.as_ref().clone(),
                ));
                self.position_secs = pts_secs;
                None
            }
            PlaybackMessage::Buffering => None,
            PlaybackMessage::EndOfStream => {
                if self.loop_enabled && self.status == PlaybackStatus::Playing {
                    self.send(DecoderCommand::Restart);
                    self.send(DecoderCommand::Play);
                } else {
                    self.status = PlaybackStatus::Ended;
                }
                None
            }
            PlaybackMessage::Error(message) => Some(self.fail(VideoError::from_message(&message))),
        }
    }

    /// Play/pause button. From `Ended` it replays from the start.
    pub fn toggle_playback(&mut self) {
        match self.status {
            PlaybackStatus::Playing => {
                self.send(DecoderCommand::Pause);
                self.status = PlaybackStatus::Paused;
            }
            PlaybackStatus::Paused => {
                self.send(DecoderCommand::Play);
                self.status = PlaybackStatus::Playing;
            }
            PlaybackStatus::Ended => {
                self.send(DecoderCommand::Restart);
                self.send(DecoderCommand::Play);
                self.status = PlaybackStatus::Playing;
            }
            PlaybackStatus::Idle | PlaybackStatus::Loading | PlaybackStatus::Failed => {}
        }
    }

    /// Stores probed metadata if it belongs to the current video.
    pub fn set_metadata(&mut self, reference: &MediaReference, metadata: VideoMetadata) {
        if self.reference.as_ref() == Some(reference) {
            self.metadata = Some(metadata);
        }
    }

    fn send(&self, command: DecoderCommand) {
        if let Some(sender) = &self.sender {
            // A closed channel means the decoder already ended; nothing to drive
            let _ = sender.send(command);
        }
    }

    fn fail(&mut self, error: VideoError) -> VideoError {
        self.status = PlaybackStatus::Failed;
        self.frame = None;
        self.sender = None;
        self.error = Some(error.clone());
        error
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn reference(&self) -> Option<&MediaReference> {
        self.reference.as_ref()
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn session_id(&self) -> u64 {
        self.session_id
    }
}
