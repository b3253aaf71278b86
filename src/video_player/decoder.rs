// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! Decoding runs on a blocking thread; frames reach the UI through a bounded
//! channel so a slow renderer throttles the decoder instead of piling up
//! frames in memory.

use crate::error::VideoError;
use crate::video_player::time_units::{duration_from_timestamp, secs_to_timestamp};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Idle poll interval while paused.
const IDLE_POLL: Duration = Duration::from_millis(10);

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

impl DecodedFrame {
    /// Returns the total size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Start or resume paced decoding.
    Play,

    /// Stop sending frames, keeping the position.
    Pause,

    /// Jump to a position; shows one frame if paused.
    Seek { target_secs: f64 },

    /// Stop decoding and release the input.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// The source was opened.
    Opened {
        width: u32,
        height: u32,
        duration_secs: Option<f64>,
    },

    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// Decoder is buffering (opening, resuming or seeking).
    Buffering,

    /// Playback reached the end of the video.
    EndOfStream,

    /// Opening or decoding failed.
    Error(VideoError),
}

/// Async video decoder that runs in a blocking Tokio task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for `source` (a URL or local path FFmpeg can open).
    ///
    /// The decoder starts paused and sends the first frame as a poster.
    /// Failures to open are reported as a [`DecoderEvent::Error`].
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::OpenFailed`] if `source` is blank.
    pub fn new(source: &str) -> Result<Self, VideoError> {
        let source = source.trim().to_string();
        if source.is_empty() {
            return Err(VideoError::OpenFailed("empty video reference".into()));
        }

        // Commands: unbounded so the UI never blocks.
        // Events: capacity 2 gives backpressure while allowing some buffering.
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send; keep them on one blocking thread.
        tokio::task::spawn_blocking(move || {
            if let Err(e) = decoder_loop_blocking(&source, command_rx, &event_tx) {
                tracing::warn!(%source, error = %e, "video decoder stopped");
                let _ = event_tx.blocking_send(DecoderEvent::Error(e));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::DecoderStopped`] once the task has exited.
    pub fn send_command(&self, command: DecoderCommand) -> Result<(), VideoError> {
        self.command_tx
            .send(command)
            .map_err(|_| VideoError::DecoderStopped)
    }

    /// Cloned command sender for the UI side.
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    /// Receives the next event; `None` once the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Playback clock for frame pacing.
#[derive(Debug, Default)]
struct Pacing {
    started_at: Option<Instant>,
    first_pts: Option<f64>,
}

impl Pacing {
    fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.first_pts = None;
    }

    fn stop(&mut self) {
        self.started_at = None;
        self.first_pts = None;
    }

    /// How long to wait before presenting a frame at `pts_secs`.
    fn delay_for(&mut self, pts_secs: f64) -> Option<Duration> {
        let started_at = self.started_at?;
        let first = *self.first_pts.get_or_insert(pts_secs);
        let offset = (pts_secs - first).max(0.0);
        let target = started_at + Duration::from_secs_f64(offset);
        target.checked_duration_since(Instant::now())
    }
}

fn decoder_loop_blocking(
    source: &str,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: &mpsc::Sender<DecoderEvent>,
) -> Result<(), VideoError> {
    super::init_ffmpeg()?;
    let _ = event_tx.blocking_send(DecoderEvent::Buffering);

    let mut ictx = ffmpeg_next::format::input(&source.to_string())
        .map_err(|e| VideoError::OpenFailed(e.to_string()))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;
    let video_stream_index = input.index();
    let time_base = input.time_base();
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| VideoError::OpenFailed(format!("codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::OpenFailed(format!("video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::OpenFailed(format!("scaler: {e}")))?;

    let duration_secs = duration_from_timestamp(ictx.duration());
    tracing::debug!(%source, width, height, ?duration_secs, "video opened");
    if event_tx
        .blocking_send(DecoderEvent::Opened {
            width,
            height,
            duration_secs,
        })
        .is_err()
    {
        return Ok(());
    }

    let mut is_playing = false;
    let mut pacing = Pacing::default();
    let mut current_pts_secs: f64 = 0.0;
    // Poster frame, and the frame shown after a paused seek.
    let mut decode_single_frame = true;
    let mut at_end = false;

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Play) => {
                if at_end {
                    // Play after the end starts over.
                    if let Err(e) = ictx.seek(0, ..0) {
                        tracing::debug!(error = %e, "rewind failed");
                    }
                    decoder.flush();
                    current_pts_secs = 0.0;
                    at_end = false;
                }
                is_playing = true;
                pacing.start();
                let _ = event_tx.blocking_send(DecoderEvent::Buffering);
            }
            Ok(DecoderCommand::Pause) => {
                is_playing = false;
                pacing.stop();
            }
            Ok(DecoderCommand::Seek { target_secs }) => {
                let timestamp = secs_to_timestamp(target_secs);
                // RangeTo lets FFmpeg land on the preceding keyframe.
                match ictx.seek(timestamp, ..timestamp) {
                    Ok(()) => {
                        decoder.flush();
                        current_pts_secs = target_secs.max(0.0);
                        at_end = false;
                        if is_playing {
                            pacing.start();
                        } else {
                            decode_single_frame = true;
                        }
                        let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, target_secs, "seek failed");
                    }
                }
            }
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !is_playing && !decode_single_frame {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut frame_decoded = false;
        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }
            if let Err(e) = decoder.send_packet(&packet) {
                tracing::trace!(error = %e, "packet rejected");
                continue;
            }

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded_frame).is_err() {
                continue;
            }

            let mut rgb_frame = ffmpeg_next::frame::Video::empty();
            scaler
                .run(&decoded_frame, &mut rgb_frame)
                .map_err(|e| VideoError::DecodingFailed(format!("scaling: {e}")))?;

            let pts_secs = decoded_frame
                .timestamp()
                .map_or(current_pts_secs, |pts| pts as f64 * time_base_f64);

            if is_playing {
                if let Some(wait) = pacing.delay_for(pts_secs) {
                    std::thread::sleep(wait);
                }
            }
            current_pts_secs = pts_secs;

            let frame = DecodedFrame {
                rgba_data: Arc::new(extract_rgba_data(&rgb_frame)),
                width,
                height,
                pts_secs,
            };
            if event_tx
                .blocking_send(DecoderEvent::FrameReady(frame))
                .is_err()
            {
                // UI side is gone.
                return Ok(());
            }

            frame_decoded = true;
            decode_single_frame = false;
            break;
        }

        if !frame_decoded {
            let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
            is_playing = false;
            at_end = true;
            pacing.stop();
            decode_single_frame = false;
        }
    }

    Ok(())
}

/// Copies RGBA rows out of a frame, dropping the stride padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let stride = frame.stride(0);
    let data = frame.data(0);

    let row_bytes = width * 4;
    let mut rgba = Vec::with_capacity(row_bytes * height);
    for row in data.chunks(stride).take(height) {
        rgba.extend_from_slice(&row[..row_bytes.min(row.len())]);
    }
    rgba
}
