// SPDX-License-Identifier: MPL-2.0
//! Video playback for the Video screen.
//!
//! [`AsyncDecoder`] decodes frames with FFmpeg on a blocking thread,
//! [`subscription::video_playback`] streams them into iced messages, and
//! [`PlaybackState`] is the UI-side state machine.

mod decoder;
mod state;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use state::{PlaybackState, PlaybackStatus};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage};
