// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! Decoding runs on a blocking Tokio thread and talks to the UI through
//! channels: commands go in unbounded, frames come out through a small
//! bounded channel so a slow UI applies backpressure.

use crate::error::{Error, Result, VideoError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    Play,
    Pause,
    /// Rewind to the first frame, keeping the play/pause state.
    Restart,
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(DecodedFrame),
    Buffering,
    EndOfStream,
    Error(String),
}

/// Handle on a decoder running in a blocking Tokio task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for `video_path`.
    ///
    /// The first frame is decoded right away so a paused player has
    /// something to show.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::IoError`] if the file does not exist. Problems
    /// inside the file are reported later as [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(video_path: P) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(VideoError::IoError(format!("Video file not found: {}", path.display())).into());
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send, the whole loop lives on one thread
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::decoder_loop_blocking(path, command_rx, event_tx.clone()) {
                let _ = event_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Waits for the next event. `None` once the decoder task has ended.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        video_path: PathBuf,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        crate::media::video::init_ffmpeg()?;

        let ictx = ffmpeg_next::format::input(&video_path)
            .map_err(|e| VideoError::from_message(&format!("Failed to open video: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
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

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| VideoError::from_message(&format!("Failed to create scaler: {e}")))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let mut frames = FramePuller::new(FfmpegSource {
            input: ictx,
            decoder,
            stream_index: video_stream_index,
        });

        let mut is_playing = false;
        let mut playback_start_time: Option<Instant> = None;
        let mut first_pts: Option<f64> = None;
        let mut decode_single_frame = true;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    is_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                    let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    playback_start_time = None;
                    first_pts = None;
                }
                Ok(DecoderCommand::Restart) => {
                    if let Err(e) = frames.rewind() {
                        let _ = event_tx.blocking_send(DecoderEvent::Error(e.to_string()));
                    } else {
                        playback_start_time = is_playing.then(Instant::now);
                        first_pts = None;
                        if !is_playing {
                            decode_single_frame = true;
                        }
                    }
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing && !decode_single_frame {
                std::thread::sleep(Duration::from_millis(10));
                continue;
            }

            let Some(decoded_frame) = frames.next_frame()? else {
                let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
                is_playing = false;
                playback_start_time = None;
                first_pts = None;
                decode_single_frame = false;
                continue;
            };

            let mut rgb_frame = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                let _ = event_tx.blocking_send(DecoderEvent::Error(format!("Scaling failed: {e}")));
                continue;
            }

            let pts_secs = decoded_frame
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * time_base_f64);

            // Frame pacing relative to the first frame after Play
            if let Some(start_time) = playback_start_time {
                let first = *first_pts.get_or_insert(pts_secs);
                let target_time = start_time + Duration::from_secs_f64((pts_secs - first).max(0.0));
                let now = Instant::now();
                if target_time > now {
                    std::thread::sleep(target_time - now);
                }
            }

            let decoded = DecodedFrame {
                rgba_data: Arc::new(extract_rgba_data(&rgb_frame)),
                width,
                height,
                pts_secs,
            };

            if event_tx
                .blocking_send(DecoderEvent::FrameReady(decoded))
                .is_err()
            {
                // UI side is gone
                return Ok(());
            }
            decode_single_frame = false;
        }

        Ok(())
    }
}

/// Answer of a codec asked for its next frame.
#[derive(Debug)]
enum Receive<F> {
    Frame(F),
    /// The codec wants another packet first.
    NeedsInput,
    /// Flushed after end of input, no frames left.
    Drained,
}

/// Packet-in/frame-out codec seen by [`FramePuller`].
trait FrameSource {
    type Frame;

    fn receive(&mut self) -> Receive<Self::Frame>;

    /// Sends the next packet to the codec. `false` once the input is exhausted.
    fn feed(&mut self) -> Result<bool>;

    /// Tells the codec no more packets follow, releasing frames it held back.
    fn finish(&mut self) -> Result<()>;

    /// Seeks the input back to the start and discards buffered frames.
    fn rewind(&mut self) -> Result<()>;
}

/// Pulls frames one at a time.
///
/// Every frame a packet produces is returned before the next packet is fed,
/// and at end of input the codec is flushed so delayed frames (B-frames)
/// still come out before the stream is reported as finished.
struct FramePuller<S> {
    source: S,
    flushed: bool,
}

impl<S: FrameSource> FramePuller<S> {
    fn new(source: S) -> Self {
        Self {
            source,
            flushed: false,
        }
    }

    /// Next decoded frame, `None` at end of stream.
    fn next_frame(&mut self) -> Result<Option<S::Frame>> {
        loop {
            match self.source.receive() {
                Receive::Frame(frame) => return Ok(Some(frame)),
                Receive::Drained => return Ok(None),
                Receive::NeedsInput if self.flushed => return Ok(None),
                Receive::NeedsInput => {}
            }

            if !self.source.feed()? {
                self.source.finish()?;
                self.flushed = true;
            }
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.source.rewind()?;
        self.flushed = false;
        Ok(())
    }
}

struct FfmpegSource {
    input: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    stream_index: usize,
}

impl FrameSource for FfmpegSource {
    type Frame = ffmpeg_next::frame::Video;

    fn receive(&mut self) -> Receive<Self::Frame> {
        let mut frame = ffmpeg_next::frame::Video::empty();
        match self.decoder.receive_frame(&mut frame) {
            Ok(()) => Receive::Frame(frame),
            Err(ffmpeg_next::Error::Eof) => Receive::Drained,
            // EAGAIN, or a damaged frame the codec skipped
            Err(_) => Receive::NeedsInput,
        }
    }

    fn feed(&mut self) -> Result<bool> {
        for (stream, packet) in self.input.packets() {
            if stream.index() != self.stream_index {
                continue;
            }
            // A rejected packet is skipped, the codec resyncs on the next one
            if self.decoder.send_packet(&packet).is_ok() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn finish(&mut self) -> Result<()> {
        self.decoder
            .send_eof()
            .map_err(|e| VideoError::DecodingFailed(format!("Flush failed: {e}")).into())
    }

    fn rewind(&mut self) -> Result<()> {
        self.input
            .seek(0, ..0)
            .map_err(|e| VideoError::DecodingFailed(format!("Seek failed: {e}")))?;
        self.decoder.flush();
        Ok(())
    }
}

/// Copies RGBA rows out of an FFmpeg frame, dropping stride padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    copy_rows(data, stride, width * 4, height)
}

fn copy_rows(data: &[u8], stride: usize, row_len: usize, rows: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(row_len * rows);
    for y in 0..rows {
        let row_start = y * stride;
        out.extend_from_slice(&data[row_start..row_start + row_len]);
    }
    out
}
