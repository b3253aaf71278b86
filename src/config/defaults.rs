// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Store**: Remote content store connection
//! - **Covers**: Cover thumbnail cache
//! - **Video**: Modal playback

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Table holding the published content rows.
pub const DEFAULT_STORE_TABLE: &str = "content";

/// Request timeout for the content fetch (in seconds).
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 15;

/// Minimum store timeout (in seconds).
pub const MIN_STORE_TIMEOUT_SECS: u64 = 1;

/// Maximum store timeout (in seconds).
pub const MAX_STORE_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Cover Defaults
// ==========================================================================

/// Number of decoded cover thumbnails kept in memory.
pub const DEFAULT_COVER_CACHE_CAPACITY: usize = 128;

/// Smallest cover cache: one full page of covers.
pub const MIN_COVER_CACHE_CAPACITY: usize = crate::application::query::gallery::PAGE_SIZE;

/// Largest cover cache.
pub const MAX_COVER_CACHE_CAPACITY: usize = 1024;

/// Width covers are downscaled to before upload to the GPU (in pixels).
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 480;

/// Minimum thumbnail width (in pixels).
pub const MIN_THUMBNAIL_WIDTH: u32 = 120;

/// Maximum thumbnail width (in pixels).
pub const MAX_THUMBNAIL_WIDTH: u32 = 1920;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Videos start as soon as the modal opens.
pub const DEFAULT_VIDEO_AUTOPLAY: bool = true;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_bounds() {
        assert!((MIN_STORE_TIMEOUT_SECS..=MAX_STORE_TIMEOUT_SECS).contains(&DEFAULT_STORE_TIMEOUT_SECS));
        assert!((MIN_COVER_CACHE_CAPACITY..=MAX_COVER_CACHE_CAPACITY).contains(&DEFAULT_COVER_CACHE_CAPACITY));
        assert!((MIN_THUMBNAIL_WIDTH..=MAX_THUMBNAIL_WIDTH).contains(&DEFAULT_THUMBNAIL_WIDTH));
    }
}
