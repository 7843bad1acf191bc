// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for persisted preferences.

/// Whether a freshly picked video starts playing on its own.
pub const DEFAULT_VIDEO_AUTOPLAY: bool = true;

/// Whether playback restarts when the end of the video is reached.
pub const DEFAULT_VIDEO_LOOP: bool = false;

/// Number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
