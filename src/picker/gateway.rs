// SPDX-License-Identifier: MPL-2.0
//! Applies pick requests and their outcomes to [`AppState`].
//!
//! A pick goes through two calls: [`begin_pick`] records the intent and
//! hands out a [`PickTicket`], [`complete_pick`] consumes the outcome. The
//! ticket carries the [`MediaKind`], so the intent cannot change while the
//! picker is open.

use super::{MediaKind, PickOutcome};
use crate::app::router::NavigationEvent;
use crate::app::state::AppState;
use crate::error::{Error, Result};

/// Identifies one outstanding pick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket {
    id: u64,
    kind: MediaKind,
}

impl PickTicket {
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

/// What a completed pick changed.
#[derive(Debug)]
pub enum Completion {
    /// The ticket was not the outstanding request.
    Ignored,
    Cancelled,
    ImagePicked,
    /// A video was stored; the event must be handed to the router.
    VideoPicked(NavigationEvent),
}

/// Registers a new pick request.
///
/// # Errors
///
/// Returns [`Error::PickInProgress`] if a request is already outstanding;
/// the state is left untouched.
pub fn begin_pick(state: &mut AppState, kind: MediaKind) -> Result<PickTicket> {
    if state.pending.is_some() {
        return Err(Error::PickInProgress);
    }

    state.next_request_id += 1;
    let ticket = PickTicket {
        id: state.next_request_id,
        kind,
    };
    state.pending = Some(ticket);
    Ok(ticket)
}

/// Applies the picker's answer for `ticket`.
///
/// Selected images and videos overwrite the previous reference of the same
/// kind. A cancelled pick only closes the request.
pub fn complete_pick(state: &mut AppState, ticket: PickTicket, outcome: PickOutcome) -> Completion {
    if state.pending != Some(ticket) {
        return Completion::Ignored;
    }
    state.pending = None;

    let PickOutcome::Selected(reference) = outcome else {
        return Completion::Cancelled;
    };

    match ticket.kind {
        MediaKind::Image => {
            state.picked_image = Some(reference);
            Completion::ImagePicked
        }
        MediaKind::Video => {
            state.picked_video = Some(reference);
            Completion::VideoPicked(NavigationEvent::show_video())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::router::{Router, Screen};
    use crate::media::MediaReference;

    fn selected(uri: &str) -> PickOutcome {
        PickOutcome::Selected(MediaReference::new(uri))
    }

    #[test]
    fn begin_pick_rejects_second_request() {
        let mut state = AppState::new();
        let first = begin_pick(&mut state, MediaKind::Image).unwrap();

        assert!(matches!(
            begin_pick(&mut state, MediaKind::Video),
            Err(Error::PickInProgress)
        ));
        assert_eq!(state.pending_pick(), Some(first));
        assert_eq!(first.kind(), MediaKind::Image);
    }

    #[test]
    fn cancel_leaves_references_untouched() {
        let mut state = AppState::new();
        state.picked_image = Some(MediaReference::new("file:///a.png"));

        let ticket = begin_pick(&mut state, MediaKind::Video).unwrap();
        let completion = complete_pick(&mut state, ticket, PickOutcome::Cancelled);

        assert!(matches!(completion, Completion::Cancelled));
        assert_eq!(state.picked_image().map(|r| r.as_str()), Some("file:///a.png"));
        assert!(state.picked_video().is_none());
        assert!(!state.is_pick_pending());
    }

    #[test]
    fn image_pick_stores_reference_without_navigation() {
        let mut state = AppState::new();
        let ticket = begin_pick(&mut state, MediaKind::Image).unwrap();

        let completion = complete_pick(&mut state, ticket, selected("file:///b.png"));

        assert!(matches!(completion, Completion::ImagePicked));
        assert_eq!(state.picked_image().unwrap().as_str(), "file:///b.png");
    }

    #[test]
    fn video_pick_emits_one_navigation_event() {
        let mut state = AppState::new();
        let mut router = Router::new();
        let ticket = begin_pick(&mut state, MediaKind::Video).unwrap();

        match complete_pick(&mut state, ticket, selected("content://media/7")) {
            Completion::VideoPicked(event) => router.navigate(event),
            other => panic!("expected VideoPicked, got {other:?}"),
        }

        assert_eq!(router.current(), Screen::Video);
        assert_eq!(router.navigation_count(), 1);
        assert_eq!(state.picked_video().unwrap().as_str(), "content://media/7");
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut state = AppState::new();
        let ticket = begin_pick(&mut state, MediaKind::Image).unwrap();
        complete_pick(&mut state, ticket, PickOutcome::Cancelled);

        // Same ticket delivered twice
        let completion = complete_pick(&mut state, ticket, selected("file:///late.png"));
        assert!(matches!(completion, Completion::Ignored));
        assert!(state.picked_image().is_none());
    }

    #[test]
    fn request_ids_are_not_reused() {
        let mut state = AppState::new();
        let first = begin_pick(&mut state, MediaKind::Image).unwrap();
        complete_pick(&mut state, first, PickOutcome::Cancelled);
        let second = begin_pick(&mut state, MediaKind::Image).unwrap();

        assert_ne!(first, second);
        assert!(matches!(
            complete_pick(&mut state, first, selected("file:///x.png")),
            Completion::Ignored
        ));
    }
}
