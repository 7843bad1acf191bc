// SPDX-License-Identifier: MPL-2.0
//! `pick_media` picks an image or a video from the local media library and
//! displays it: images inline on the Home screen, videos on a dedicated
//! Video screen.
//!
//! The application follows the Elm architecture of Iced. The [`app`] module
//! owns the state and the screen router, [`picker`] talks to the native file
//! dialog, and [`video_player`] decodes video with FFmpeg.

#![doc(html_root_url = "https://docs.rs/pick_media/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod picker;
pub mod ui;
pub mod video_player;
