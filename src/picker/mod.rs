// SPDX-License-Identifier: MPL-2.0
//! Media selection gateway.
//!
//! A pick request is a single modal interaction with a media picker,
//! parameterized by [`MediaKind`]. The picker itself is behind the
//! [`MediaPicker`] trait so the native dialog ([`RfdPicker`]) can be swapped
//! for a scripted one in tests. [`gateway`] applies the outcome to the
//! application state.

pub mod gateway;
mod rfd_picker;

pub use gateway::{begin_pick, complete_pick, Completion, PickTicket};
pub use rfd_picker::{DialogLabels, RfdPicker};

use crate::media::{extensions, MediaReference};
use std::future::Future;
use std::pin::Pin;

/// What a pick request is allowed to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// File extensions shown by the picker for this kind.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => extensions::IMAGE_EXTENSIONS,
            MediaKind::Video => extensions::VIDEO_EXTENSIONS,
        }
    }
}

/// Result of a pick request. Cancelling is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Cancelled,
    Selected(MediaReference),
}

impl From<Option<MediaReference>> for PickOutcome {
    fn from(value: Option<MediaReference>) -> Self {
        value.map_or(PickOutcome::Cancelled, PickOutcome::Selected)
    }
}

pub type PickFuture = Pin<Box<dyn Future<Output = PickOutcome> + Send + 'static>>;

/// Presents a media picker filtered to one [`MediaKind`].
pub trait MediaPicker: Send + Sync {
    /// Starts the picker. The returned future resolves once the user chose an
    /// item or dismissed the picker.
    fn pick(&self, kind: MediaKind) -> PickFuture;
}
