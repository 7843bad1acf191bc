// SPDX-License-Identifier: MPL-2.0
//! FFmpeg bootstrap and video file probing.

use crate::error::{Error, Result, VideoError};
use crate::media::MediaReference;
use std::path::{Path, PathBuf};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg once per process.
///
/// The FFmpeg log level is lowered to ERROR so container warnings do not
/// flood stderr.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Resolves a picked video reference to a local file the decoder can open.
///
/// # Errors
///
/// Returns [`VideoError::UnsupportedReference`] for non-`file` references and
/// [`VideoError::IoError`] when the file is gone.
pub fn resolve_video_path(reference: &MediaReference) -> Result<PathBuf> {
    let path = reference
        .to_file_path()
        .ok_or_else(|| VideoError::UnsupportedReference(reference.to_string()))?;
    if !path.exists() {
        return Err(VideoError::IoError(format!("Video file not found: {}", path.display())).into());
    }
    Ok(path)
}

/// Video stream properties read from the container
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    /// Duration in seconds
    pub duration_secs: f64,
    pub fps: f64,
}

/// Reads container metadata without decoding frames.
pub fn extract_video_metadata<P: AsRef<Path>>(path: P) -> Result<VideoMetadata> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&format!("Failed to open video file: {e}")))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;

    let context_decoder =
        ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
            .map_err(|e| VideoError::from_message(&format!("Failed to create codec context: {e}")))?;
    let decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::from_message(&format!("Failed to create video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(VideoError::CorruptedFile.into());
    }

    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    let frame_rate = video_stream.avg_frame_rate();
    let fps = if frame_rate.denominator() == 0 {
        0.0
    } else {
        f64::from(frame_rate.numerator()) / f64::from(frame_rate.denominator())
    };

    Ok(VideoMetadata {
        width,
        height,
        duration_secs,
        fps,
    })
}
