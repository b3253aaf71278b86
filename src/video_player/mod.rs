// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for the gallery modal.
//!
//! FFmpeg decodes the referenced video on a blocking thread; an Iced
//! subscription keyed by playback session forwards frames to the UI.
//! Playback is video only.

mod decoder;
mod state;
pub mod subscription;
pub mod time_units;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use state::PlaybackState;
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage, VideoPlaybackId};

use crate::error::VideoError;
use std::sync::OnceLock;

static FFMPEG_INIT: OnceLock<Result<(), VideoError>> = OnceLock::new();

/// Initializes FFmpeg once per process and quiets its logging.
///
/// # Errors
///
/// Returns [`VideoError::OpenFailed`] if the libraries fail to initialize.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init()
                .map_err(|e| VideoError::OpenFailed(format!("FFmpeg initialization failed: {e}")))?;
            ffmpeg_next::util::log::set_level(ffmpeg_next::util::log::Level::Error);
            Ok(())
        })
        .clone()
}
