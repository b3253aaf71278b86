// SPDX-License-Identifier: MPL-2.0
//! Remote media shown by the gallery.
//!
//! Only cover thumbnails are handled here; video goes through
//! [`crate::video_player`].

pub mod cover;

pub use cover::{decode_thumbnail, load_cover, CoverCache, CoverState, CoverStats};
