// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use crate::app::router::Screen;
use crate::picker::MediaKind;
use std::fmt;
use std::time::Instant;

/// Something worth remembering about a session.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    PickRequested { kind: MediaKind },
    /// A pick was requested while the picker was already open.
    PickRejected { kind: MediaKind },
    PickCancelled { kind: MediaKind },
    PickSelected { kind: MediaKind, reference: String },
    Navigated { to: ScreenName },
    NavigatedBack { to: ScreenName },
    ImageLoadFailed { reference: String, message: String },
    VideoError { reference: String, message: String },
}

/// Mirror of [`Screen`] kept in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenName {
    Home,
    Video,
}

impl From<Screen> for ScreenName {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Home => ScreenName::Home,
            Screen::Video => ScreenName::Video,
        }
    }
}

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickRequested { kind } => write!(f, "pick requested ({kind:?})"),
            Self::PickRejected { kind } => write!(f, "pick rejected, picker busy ({kind:?})"),
            Self::PickCancelled { kind } => write!(f, "pick cancelled ({kind:?})"),
            Self::PickSelected { kind, reference } => {
                write!(f, "picked {kind:?}: {reference}")
            }
            Self::Navigated { to } => write!(f, "navigated to {to:?}"),
            Self::NavigatedBack { to } => write!(f, "navigated back to {to:?}"),
            Self::ImageLoadFailed { reference, message } => {
                write!(f, "image load failed for {reference}: {message}")
            }
            Self::VideoError { reference, message } => {
                write!(f, "video error for {reference}: {message}")
            }
        }
    }
}
