// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects the async decoder to the UI event loop. The subscription is
//! keyed by playback session, so opening another video (a new session)
//! drops the previous decoder and starts from a clean slate.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent};
use crate::error::VideoError;
use iced::futures::SinkExt;
use iced::stream;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Subscription ID for video playback.
/// Each playback session gets a unique ID so subscriptions are recreated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoPlaybackId {
    pub session: u64,
    pub url: String,
}

/// Handle for sending commands to the decoder from the UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Sends a command to the video decoder.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::DecoderStopped`] once the decoder has exited.
    pub fn send(&self, command: DecoderCommand) -> Result<(), VideoError> {
        self.tx
            .send(command)
            .map_err(|_| VideoError::DecoderStopped)
    }

    /// Sender wired to a bare channel, for exercising the UI without FFmpeg.
    #[doc(hidden)]
    pub fn detached() -> (Self, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Decoder spawned; provides the command sender for transport controls.
    Started(DecoderCommandSender),

    /// Source opened.
    Opened { duration_secs: Option<f64> },

    /// A new frame is ready for display.
    FrameReady {
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        pts_secs: f64,
    },

    Buffering,

    EndOfStream,

    Error(VideoError),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::Opened { duration_secs, .. } => Self::Opened { duration_secs },
            DecoderEvent::FrameReady(frame) => Self::FrameReady {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
                pts_secs: frame.pts_secs,
            },
            DecoderEvent::Buffering => Self::Buffering,
            DecoderEvent::EndOfStream => Self::EndOfStream,
            DecoderEvent::Error(err) => Self::Error(err),
        }
    }
}

/// Creates a video playback subscription for `url`.
///
/// The subscription first emits `Started` with a [`DecoderCommandSender`],
/// then forwards decoder events until the decoder exits. Every message is
/// tagged with `session_id` so late messages from a replaced session can be
/// told apart. Dropping the subscription drops the decoder handle, which
/// stops the decoding thread.
pub fn video_playback(
    url: String,
    session_id: u64,
) -> iced::Subscription<(u64, PlaybackMessage)> {
    iced::Subscription::run_with(
        VideoPlaybackId {
            session: session_id,
            url,
        },
        |id| {
        let url = id.url.clone();
        let session_id = id.session;
        stream::channel(16, move |mut output: iced::futures::channel::mpsc::Sender<(u64, PlaybackMessage)>| async move {
            let mut decoder = match AsyncDecoder::new(&url) {
                Ok(decoder) => decoder,
                Err(e) => {
                    tracing::warn!(%url, error = %e, "video decoder not started");
                    let _ = output.send((session_id, PlaybackMessage::Error(e))).await;
                    std::future::pending::<()>().await;
                    return;
                }
            };

            let sender = DecoderCommandSender {
                tx: decoder.command_sender(),
            };
            let _ = output
                .send((session_id, PlaybackMessage::Started(sender)))
                .await;

            while let Some(event) = decoder.recv_event().await {
                if let DecoderEvent::Error(ref e) = event {
                    tracing::error!(%url, error = %e, "video playback failed");
                }
                if output
                    .send((session_id, PlaybackMessage::from(event)))
                    .await
                    .is_err()
                {
                    break;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        })
        },
    )
}
