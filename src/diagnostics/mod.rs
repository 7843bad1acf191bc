// SPDX-License-Identifier: MPL-2.0
//! Session diagnostics.
//!
//! Events are kept in a memory-bounded ring buffer and can optionally be
//! echoed to stderr (`--verbose` or `echo_to_stderr` in the config).
//! Nothing here is shown to the user; swallowed failures (image decode,
//! video errors) end up only in this log.

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ScreenName};

#[derive(Debug, Clone)]
pub struct Diagnostics {
    events: CircularBuffer<DiagnosticEvent>,
    echo_to_stderr: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(BufferCapacity::default(), false)
    }
}

impl Diagnostics {
    #[must_use]
    pub fn new(capacity: BufferCapacity, echo_to_stderr: bool) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            echo_to_stderr,
        }
    }

    pub fn record(&mut self, kind: DiagnosticEventKind) {
        if self.echo_to_stderr {
            eprintln!("[pick_media] {kind}");
        }
        self.events.push(DiagnosticEvent::new(kind));
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
