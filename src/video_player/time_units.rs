// SPDX-License-Identifier: MPL-2.0
//! Time conversions for playback positions.
//!
//! FFmpeg seeks and container durations are expressed in `AV_TIME_BASE`
//! units (microseconds); the UI works in seconds.

/// Microseconds per second as f64 for calculations.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Converts seconds to an `AV_TIME_BASE` timestamp for seeking.
///
/// # Examples
///
/// ```
/// use reports_gallery::video_player::time_units::secs_to_timestamp;
///
/// assert_eq!(secs_to_timestamp(1.5), 1_500_000);
/// assert_eq!(secs_to_timestamp(-2.0), 0);
/// ```
#[inline]
pub fn secs_to_timestamp(secs: f64) -> i64 {
    (secs.max(0.0) * MICROS_PER_SECOND) as i64
}

/// Converts a container duration (`AV_TIME_BASE` units) to seconds.
///
/// Live streams and some containers report no duration (zero or negative).
#[inline]
pub fn duration_from_timestamp(timestamp: i64) -> Option<f64> {
    (timestamp > 0).then(|| timestamp as f64 / MICROS_PER_SECOND)
}

/// Formats a position as `m:ss`, or `h:mm:ss` past the hour.
///
/// # Examples
///
/// ```
/// use reports_gallery::video_player::time_units::format_clock;
///
/// assert_eq!(format_clock(65.4), "1:05");
/// assert_eq!(format_clock(3725.0), "1:02:05");
/// ```
pub fn format_clock(secs: f64) -> String {
    let total = if secs.is_finite() { secs.max(0.0) as u64 } else { 0 };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
