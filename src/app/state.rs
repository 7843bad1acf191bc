// SPDX-License-Identifier: MPL-2.0
//! Application state shared by every screen.
//!
//! Owned by [`App`](super::App) and passed by reference into the view
//! functions. Only the pick gateway mutates it.

use crate::media::MediaReference;
use crate::picker::PickTicket;

#[derive(Debug, Default)]
pub struct AppState {
    pub(crate) picked_image: Option<MediaReference>,
    pub(crate) picked_video: Option<MediaReference>,
    /// The one outstanding pick request, if any.
    pub(crate) pending: Option<PickTicket>,
    pub(crate) next_request_id: u64,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently picked image.
    #[must_use]
    pub fn picked_image(&self) -> Option<&MediaReference> {
        self.picked_image.as_ref()
    }

    /// Most recently picked video.
    #[must_use]
    pub fn picked_video(&self) -> Option<&MediaReference> {
        self.picked_video.as_ref()
    }

    #[must_use]
    pub fn pending_pick(&self) -> Option<PickTicket> {
        self.pending
    }

    #[must_use]
    pub fn is_pick_pending(&self) -> bool {
        self.pending.is_some()
    }
}
