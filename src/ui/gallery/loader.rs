// SPDX-License-Identifier: MPL-2.0
//! One-shot fetch-on-mount lifecycle.
//!
//! The gallery asks the store for every record exactly once. A failure is
//! logged and turns into an empty list; the user only ever sees the empty
//! state, never an error message.

use crate::domain::content::ContentItem;
use crate::error::StoreError;

/// Fetch lifecycle of one gallery instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    NotStarted,
    InFlight,
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct Loader {
    phase: LoadPhase,
}

impl Loader {
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Loading flag shown by the view.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::InFlight
    }

    /// Marks the fetch as issued. Returns `false` if it already was, so the
    /// caller never sends a second request.
    pub fn begin(&mut self) -> bool {
        if self.phase != LoadPhase::NotStarted {
            return false;
        }
        self.phase = LoadPhase::InFlight;
        true
    }

    /// Single completion point: clears the loading flag and yields the list
    /// to display. Errors are logged and become an empty list.
    ///
    /// Returns `None` for a completion that does not belong to an in-flight
    /// fetch.
    pub fn finish(
        &mut self,
        result: Result<Vec<ContentItem>, StoreError>,
    ) -> Option<Vec<ContentItem>> {
        if self.phase != LoadPhase::InFlight {
            tracing::debug!("ignoring stale content fetch completion");
            return None;
        }
        self.phase = LoadPhase::Done;

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "content loaded");
                Some(items)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load content");
                Some(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentType;

    #[test]
    fn begin_succeeds_once() {
        let mut loader = Loader::default();
        assert!(!loader.is_loading());
        assert!(loader.begin());
        assert!(loader.is_loading());
        assert!(!loader.begin());
    }

    #[test]
    fn success_yields_items_and_clears_loading() {
        let mut loader = Loader::default();
        loader.begin();
        let items = vec![ContentItem::new("1", "Annual", 2023, ContentType::Document)];

        let shown = loader.finish(Ok(items.clone()));
        assert_eq!(shown, Some(items));
        assert_eq!(loader.phase(), LoadPhase::Done);
        assert!(!loader.is_loading());
    }

    #[test]
    fn failure_yields_empty_list() {
        let mut loader = Loader::default();
        loader.begin();

        let shown = loader.finish(Err(StoreError::Request("connection refused".into())));
        assert_eq!(shown, Some(Vec::new()));
        assert!(!loader.is_loading());
    }

    #[test]
    fn completion_is_applied_exactly_once() {
        let mut loader = Loader::default();
        assert_eq!(loader.finish(Ok(Vec::new())), None);

        loader.begin();
        assert!(loader.finish(Ok(Vec::new())).is_some());
        assert_eq!(loader.finish(Ok(Vec::new())), None);
        // Done is terminal: no re-fetch.
        assert!(!loader.begin());
    }
}
