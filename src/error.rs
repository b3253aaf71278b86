// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
    #[error("Video Error: {0}")]
    Video(#[from] VideoError),
    #[error("Image Error: {0}")]
    Image(String),
}

/// Failures reading content records from the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not a JSON array of content rows.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Specific error types for video playback issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoError {
    /// The source could not be opened (unreachable URL, unsupported container)
    #[error("Could not open video: {0}")]
    OpenFailed(String),

    /// Source opened but contains no video stream
    #[error("No video stream found")]
    NoVideoStream,

    /// Decoding failed during playback
    #[error("Decoding failed: {0}")]
    DecodingFailed(String),

    /// Decoder task is gone
    #[error("Video decoder is not running")]
    DecoderStopped,
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::OpenFailed(_) => "video-error-open",
            VideoError::NoVideoStream => "video-error-no-stream",
            VideoError::DecodingFailed(_) => "video-error-decoding",
            VideoError::DecoderStopped => "video-error-stopped",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            StoreError::Status(status.as_u16())
        } else if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Request(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn store_error_wraps_into_crate_error() {
        let err: Error = StoreError::Status(503).into();
        assert_eq!(
            format!("{}", err),
            "Store Error: unexpected HTTP status 503"
        );
    }

    #[test]
    fn video_error_maps_to_distinct_i18n_keys() {
        let keys = [
            VideoError::OpenFailed("x".into()).i18n_key(),
            VideoError::NoVideoStream.i18n_key(),
            VideoError::DecodingFailed("x".into()).i18n_key(),
            VideoError::DecoderStopped.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn toml_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
