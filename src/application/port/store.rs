// SPDX-License-Identifier: MPL-2.0
//! Content store port.
//!
//! The gallery reads every record in one request and does all narrowing on
//! the client, so the port has a single operation.
//!
//! # Design Notes
//!
//! - The store is shared behind an `Arc` so a fetch `Task` can own a handle
//! - Methods return a boxed `'static` future; callers hand it to
//!   `iced::Task::perform`

use crate::domain::content::ContentItem;
use crate::error::StoreError;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Port for reading published content.
pub trait ContentStore: Send + Sync {
    /// Fetches all records, unordered and unfiltered.
    ///
    /// An absent body is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be reached, answers
    /// with a failure status, or sends something that is not a row list.
    fn fetch_all(&self) -> BoxFuture<'static, Result<Vec<ContentItem>, StoreError>>;
}

/// Store handle as held by the application.
pub type SharedStore = Arc<dyn ContentStore>;

/// In-memory store answering with a fixed outcome.
///
/// Used when no remote store is configured and by tests.
#[derive(Debug, Clone)]
pub struct StaticStore {
    outcome: Result<Vec<ContentItem>, StoreError>,
}

impl StaticStore {
    #[must_use]
    pub fn with_items(items: Vec<ContentItem>) -> Self {
        Self { outcome: Ok(items) }
    }

    #[must_use]
    pub fn failing(error: StoreError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl ContentStore for StaticStore {
    fn fetch_all(&self) -> BoxFuture<'static, Result<Vec<ContentItem>, StoreError>> {
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentType;

    #[tokio::test]
    async fn static_store_returns_items() {
        let store: SharedStore = Arc::new(StaticStore::with_items(vec![ContentItem::new(
            "1",
            "t",
            2020,
            ContentType::Document,
        )]));
        let items = store.fetch_all().await.expect("static store succeeds");
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn failing_store_returns_error() {
        let store = StaticStore::failing(StoreError::Status(500));
        assert_eq!(store.fetch_all().await, Err(StoreError::Status(500)));
    }
}
