// SPDX-License-Identifier: MPL-2.0
//! Cover thumbnails for gallery cards.
//!
//! Covers are downloaded, decoded and downscaled off the UI thread, then kept
//! in an LRU keyed by image URL so paging back and forth does not refetch.
//!
//! # Design
//!
//! - **LRU eviction**: least recently viewed covers are evicted first
//! - **URL-keyed**: one entry per distinct `image_url`
//! - **Tri-state**: an entry is pending, ready or failed, so a broken cover
//!   is requested once and then shown as the placeholder

use crate::config::{
    DEFAULT_COVER_CACHE_CAPACITY, MAX_COVER_CACHE_CAPACITY, MIN_COVER_CACHE_CAPACITY,
};
use crate::error::{Error, Result, StoreError};
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Per-request timeout for cover downloads.
const COVER_TIMEOUT: Duration = Duration::from_secs(20);

/// Where a cover is in its lifecycle.
#[derive(Debug, Clone)]
pub enum CoverState {
    Pending,
    Ready(Handle),
    Failed,
}

/// Statistics about cover cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverStats {
    pub insertions: u64,
    pub failures: u64,
    pub evictions: u64,
}

/// LRU cache of cover thumbnails keyed by URL.
pub struct CoverCache {
    cache: LruCache<String, CoverState>,
    stats: CoverStats,
}

impl Default for CoverCache {
    fn default() -> Self {
        Self::new(DEFAULT_COVER_CACHE_CAPACITY)
    }
}

impl CoverCache {
    /// Creates a cache holding at most `capacity` covers (clamped).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(MIN_COVER_CACHE_CAPACITY, MAX_COVER_CACHE_CAPACITY);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            stats: CoverStats::default(),
        }
    }

    /// Looks up a cover without touching LRU order (safe from `view`).
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&CoverState> {
        self.cache.peek(url)
    }

    /// Ready handle for `url`, if decoded.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.cache.peek(url) {
            Some(CoverState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Returns the URLs that still need a request and marks them pending.
    ///
    /// URLs already known (any state) are promoted in the LRU so the visible
    /// page is the last to be evicted. Duplicates are requested once.
    pub fn claim_missing<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing = Vec::new();
        for url in urls {
            if self.cache.get(url).is_some() {
                continue;
            }
            self.put(url.to_string(), CoverState::Pending);
            missing.push(url.to_string());
        }
        missing
    }

    /// Stores a decoded cover.
    pub fn insert_ready(&mut self, url: String, handle: Handle) {
        self.put(url, CoverState::Ready(handle));
        self.stats.insertions += 1;
    }

    /// Records a failed download or decode.
    pub fn mark_failed(&mut self, url: String) {
        self.put(url, CoverState::Failed);
        self.stats.failures += 1;
    }

    fn put(&mut self, url: String, state: CoverState) {
        if let Some((evicted, _)) = self.cache.push(url.clone(), state) {
            if evicted != url {
                self.stats.evictions += 1;
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CoverStats {
        self.stats
    }
}

impl std::fmt::Debug for CoverCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

/// A decoded, downscaled cover in RGBA8.
#[derive(Debug, Clone)]
pub struct DecodedCover {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedCover {
    #[must_use]
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.rgba)
    }
}

/// Decodes an encoded image and shrinks it to at most `max_width` pixels
/// wide, preserving the aspect ratio. Smaller images are kept as is.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes are not a supported image format.
pub fn decode_thumbnail(bytes: &[u8], max_width: u32) -> Result<DecodedCover> {
    let image = image_rs::load_from_memory(bytes)?;
    let image = if image.width() > max_width {
        image.thumbnail(max_width, u32::MAX)
    } else {
        image
    };
    let rgba = image.to_rgba8();

    Ok(DecodedCover {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// HTTP client shared by all cover downloads.
///
/// # Errors
///
/// Returns [`StoreError::Request`] if the TLS backend cannot be initialized.
pub fn cover_client() -> std::result::Result<reqwest::Client, StoreError> {
    reqwest::Client::builder()
        .timeout(COVER_TIMEOUT)
        .user_agent(concat!("ReportsGallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(StoreError::from)
}

/// Downloads and decodes one cover.
///
/// This is the async function run by each cover task; it hands the URL back
/// so the result can be matched to its cache entry.
pub async fn load_cover(
    client: reqwest::Client,
    url: String,
    max_width: u32,
) -> (String, Result<Handle>) {
    let result = fetch_and_decode(&client, &url, max_width).await;
    (url, result)
}

async fn fetch_and_decode(client: &reqwest::Client, url: &str, max_width: u32) -> Result<Handle> {
    let response = client.get(url).send().await.map_err(StoreError::from)?;
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status(status.as_u16()).into());
    }
    let bytes = response.bytes().await.map_err(StoreError::from)?;

    let decoded = tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, max_width))
        .await
        .unwrap_or_else(|e| Err(Error::Image(format!("cover decode task failed: {e}"))))?;

    Ok(decoded.into_handle())
}
