// SPDX-License-Identifier: MPL-2.0
//! Playback state machine driven by decoder events and transport controls.
//!
//! Transport actions return the [`DecoderCommand`] to forward, so the state
//! never drifts from what the decoder was told.

use super::DecoderCommand;
use crate::error::VideoError;

/// Where playback of the open video stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackState {
    /// Opening the source, before the first frame.
    #[default]
    Loading,

    /// Frames are flowing.
    Playing { position_secs: f64 },

    /// Stopped at a position; resumable.
    Paused { position_secs: f64 },

    /// Reached the end of the stream.
    Ended { position_secs: f64 },

    /// The decoder failed; the modal shows a message.
    Error(VideoError),
}

impl PlaybackState {
    /// Current position in seconds, if known.
    #[must_use]
    pub fn position(&self) -> Option<f64> {
        match self {
            Self::Playing { position_secs }
            | Self::Paused { position_secs }
            | Self::Ended { position_secs } => Some(*position_secs),
            Self::Loading | Self::Error(_) => None,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// The decoder is ready to take commands.
    ///
    /// With autoplay the state moves to playing and `Play` must be sent.
    pub fn on_started(&mut self, autoplay: bool) -> Option<DecoderCommand> {
        if !matches!(self, Self::Loading) {
            return None;
        }
        if autoplay {
            *self = Self::Playing { position_secs: 0.0 };
            Some(DecoderCommand::Play)
        } else {
            *self = Self::Paused { position_secs: 0.0 };
            None
        }
    }

    /// A frame at `pts_secs` was presented.
    pub fn on_frame(&mut self, pts_secs: f64) {
        match self {
            Self::Playing { position_secs } | Self::Paused { position_secs } => {
                *position_secs = pts_secs;
            }
            Self::Loading => *self = Self::Paused { position_secs: pts_secs },
            Self::Ended { .. } | Self::Error(_) => {}
        }
    }

    pub fn on_end_of_stream(&mut self) {
        if let Some(position_secs) = self.position() {
            *self = Self::Ended { position_secs };
        }
    }

    pub fn on_error(&mut self, error: VideoError) {
        *self = Self::Error(error);
    }

    /// Play/pause button. Play after the end starts from the beginning.
    pub fn toggle(&mut self) -> Option<DecoderCommand> {
        match *self {
            Self::Playing { position_secs } => {
                *self = Self::Paused { position_secs };
                Some(DecoderCommand::Pause)
            }
            Self::Paused { position_secs } => {
                *self = Self::Playing { position_secs };
                Some(DecoderCommand::Play)
            }
            Self::Ended { .. } => {
                *self = Self::Playing { position_secs: 0.0 };
                Some(DecoderCommand::Play)
            }
            Self::Loading | Self::Error(_) => None,
        }
    }

    /// Restart button: back to the first frame, keeping play/pause.
    pub fn restart(&mut self) -> Vec<DecoderCommand> {
        match *self {
            Self::Playing { .. } => {
                *self = Self::Playing { position_secs: 0.0 };
                vec![DecoderCommand::Seek { target_secs: 0.0 }]
            }
            Self::Paused { .. } => {
                *self = Self::Paused { position_secs: 0.0 };
                vec![DecoderCommand::Seek { target_secs: 0.0 }]
            }
            Self::Ended { .. } => {
                *self = Self::Playing { position_secs: 0.0 };
                vec![DecoderCommand::Seek { target_secs: 0.0 }, DecoderCommand::Play]
            }
            Self::Loading | Self::Error(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_sends_play_once_started() {
        let mut state = PlaybackState::default();
        assert_eq!(state.on_started(true), Some(DecoderCommand::Play));
        assert!(state.is_playing());
        // A second start notification is ignored.
        assert_eq!(state.on_started(true), None);
    }

    #[test]
    fn without_autoplay_playback_waits_paused() {
        let mut state = PlaybackState::default();
        assert_eq!(state.on_started(false), None);
        assert_eq!(state, PlaybackState::Paused { position_secs: 0.0 });
    }

    #[test]
    fn frames_advance_the_position() {
        let mut state = PlaybackState::Playing { position_secs: 0.0 };
        state.on_frame(2.5);
        assert_eq!(state.position(), Some(2.5));
    }

    #[test]
    fn toggle_alternates_play_and_pause() {
        let mut state = PlaybackState::Playing { position_secs: 4.0 };
        assert_eq!(state.toggle(), Some(DecoderCommand::Pause));
        assert_eq!(state, PlaybackState::Paused { position_secs: 4.0 });
        assert_eq!(state.toggle(), Some(DecoderCommand::Play));
        assert!(state.is_playing());
    }

    #[test]
    fn play_after_end_starts_over() {
        let mut state = PlaybackState::Playing { position_secs: 9.0 };
        state.on_end_of_stream();
        assert_eq!(state, PlaybackState::Ended { position_secs: 9.0 });
        assert_eq!(state.toggle(), Some(DecoderCommand::Play));
        assert_eq!(state.position(), Some(0.0));
    }

    #[test]
    fn restart_after_end_seeks_and_plays() {
        let mut state = PlaybackState::Ended { position_secs: 9.0 };
        assert_eq!(
            state.restart(),
            vec![DecoderCommand::Seek { target_secs: 0.0 }, DecoderCommand::Play]
        );
        assert!(state.is_playing());
    }

    #[test]
    fn errors_disable_transport() {
        let mut state = PlaybackState::Playing { position_secs: 1.0 };
        state.on_error(VideoError::NoVideoStream);
        assert_eq!(state.error(), Some(&VideoError::NoVideoStream));
        assert_eq!(state.toggle(), None);
        assert!(state.restart().is_empty());
        state.on_frame(3.0);
        assert!(state.position().is_none());
    }
}
