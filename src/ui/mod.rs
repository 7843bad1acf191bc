// SPDX-License-Identifier: MPL-2.0
//! User interface screens and shared styling.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext` borrowing the application state and a `Message`
//! enum the root `App` handles.
//!
//! - [`home`] - Picked image panel and the pick buttons
//! - [`video`] - Playback of the picked video
//! - [`design_tokens`] - Spacing, sizing and type scale
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod home;
pub mod theming;
pub mod video;
