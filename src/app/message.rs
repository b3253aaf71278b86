// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::video_modal;
use crate::video_player::PlaybackMessage;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Modal(video_modal::Message),
    /// Decoder output, tagged with the playback session it belongs to.
    Playback {
        session: u64,
        message: PlaybackMessage,
    },
    EscapePressed,
    /// Hide the startup warning notice.
    DismissWarning,
}

/// Runtime flags passed from `main` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale requested with `--lang`.
    pub lang: Option<String>,
    /// Settings directory requested with `--config-dir`.
    pub config_dir: Option<String>,
    /// Store base URL requested with `--store-url`.
    pub store_url: Option<String>,
}
