// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects the [`AsyncDecoder`] to the UI event loop. The subscription lives
//! as long as the Video screen asks for it; dropping it closes the command
//! channel, which stops the decoder thread.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Subscription ID for video playback.
/// Each playback session gets a unique ID to ensure subscriptions are recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoPlaybackId(u64);

/// Cloneable handle the UI uses to drive the decoder.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    pub fn send(&self, command: DecoderCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Video decoder not running".to_string())
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Subscription started, provides command sender for play/pause/restart.
    Started(DecoderCommandSender),

    FrameReady {
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        pts_secs: f64,
    },

    Buffering,

    EndOfStream,

    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
                pts_secs: frame.pts_secs,
            },
            DecoderEvent::Buffering => PlaybackMessage::Buffering,
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
            DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
        }
    }
}

/// Creates a video playback subscription for `video_path`.
///
/// `session_id` must change whenever a new video is picked so iced restarts
/// the stream instead of reusing the previous decoder.
pub fn video_playback(video_path: PathBuf, session_id: u64) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with_id(
        VideoPlaybackId(session_id),
        stream::channel(100, move |mut output| async move {
            let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();

            match AsyncDecoder::new(&video_path) {
                Ok(mut decoder) => {
                    let _ = output
                        .send(PlaybackMessage::Started(DecoderCommandSender { tx: cmd_tx }))
                        .await;

                    loop {
                        tokio::select! {
                            cmd = cmd_rx.recv() => {
                                // All senders dropped means the screen is gone
                                let Some(command) = cmd else { break };
                                if let Err(e) = decoder.send_command(command) {
                                    let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                                }
                            }
                            event = decoder.recv_event() => {
                                let Some(event) = event else { break };
                                let _ = output.send(event.into()).await;
                            }
                        }
                    }

                    let _ = decoder.send_command(DecoderCommand::Stop);
                }
                Err(e) => {
                    let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::DecodedFrame;

    #[test]
    fn subscription_id_is_consistent() {
        assert_eq!(VideoPlaybackId(42), VideoPlaybackId(42));
        assert_ne!(VideoPlaybackId(42), VideoPlaybackId(43));
    }

    #[test]
    fn decoder_events_map_to_messages() {
        let frame = DecodedFrame {
            rgba_data: Arc::new(vec![0; 16]),
            width: 2,
            height: 2,
            pts_secs: 1.5,
        };
        match PlaybackMessage::from(DecoderEvent::FrameReady(frame)) {
            PlaybackMessage::FrameReady {
                width, height, pts_secs, ..
            } => {
                assert_eq!((width, height), (2, 2));
                assert!((pts_secs - 1.5).abs() < f64::EPSILON);
            }
            other => panic!("expected FrameReady, got {other:?}"),
        }
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::EndOfStream),
            PlaybackMessage::EndOfStream
        ));
    }

    #[test]
    fn command_sender_reports_closed_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sender = DecoderCommandSender { tx };
        assert!(sender.send(DecoderCommand::Play).is_ok());
        drop(rx);
        assert!(sender.send(DecoderCommand::Pause).is_err());
    }
}
