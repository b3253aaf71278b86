// SPDX-License-Identifier: MPL-2.0
//! View selections applied to the loaded content list.
//!
//! - [`ContentTypeFilter`]: narrow by content type (or keep everything)
//! - [`SortOrder`]: newest-first or oldest-first by publication year

use super::{ContentItem, ContentType};
use std::cmp::Ordering;

// =============================================================================
// Content Type Filter
// =============================================================================

/// Filter by content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentTypeFilter {
    /// Keep every item.
    #[default]
    All,
    /// Keep only items of the given type.
    Only(ContentType),
}

impl ContentTypeFilter {
    /// Every selectable filter, in display order.
    pub const OPTIONS: [ContentTypeFilter; 4] = [
        ContentTypeFilter::All,
        ContentTypeFilter::Only(ContentType::Document),
        ContentTypeFilter::Only(ContentType::Flipbook),
        ContentTypeFilter::Only(ContentType::Video),
    ];

    /// Returns `true` if the item passes this filter.
    #[must_use]
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(content_type) => item.content_type == *content_type,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Fluent key of the option label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::All => "filter-type-all",
            Self::Only(content_type) => content_type.i18n_key(),
        }
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Ordering by publication year. There is no secondary key: equal years keep
/// the order the store returned them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Descending year.
    #[default]
    Latest,
    /// Ascending year.
    Oldest,
}

impl SortOrder {
    pub const OPTIONS: [SortOrder; 2] = [SortOrder::Latest, SortOrder::Oldest];

    /// Comparator for a stable sort.
    #[must_use]
    pub fn compare(self, a: &ContentItem, b: &ContentItem) -> Ordering {
        match self {
            SortOrder::Latest => b.year.cmp(&a.year),
            SortOrder::Oldest => a.year.cmp(&b.year),
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortOrder::Latest => "sort-latest",
            SortOrder::Oldest => "sort-oldest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(year: i32, content_type: ContentType) -> ContentItem {
        ContentItem::new(format!("{year}-{content_type}"), "t", year, content_type)
    }

    #[test]
    fn all_filter_matches_everything() {
        let filter = ContentTypeFilter::All;
        for content_type in ContentType::ALL {
            assert!(filter.matches(&item(2020, content_type)));
        }
        assert!(!filter.is_active());
    }

    #[test]
    fn only_filter_matches_single_type() {
        let filter = ContentTypeFilter::Only(ContentType::Flipbook);
        assert!(filter.matches(&item(2020, ContentType::Flipbook)));
        assert!(!filter.matches(&item(2020, ContentType::Document)));
        assert!(!filter.matches(&item(2020, ContentType::Video)));
        assert!(filter.is_active());
    }

    #[test]
    fn options_cover_every_type_once() {
        for content_type in ContentType::ALL {
            let count = ContentTypeFilter::OPTIONS
                .iter()
                .filter(|f| **f == ContentTypeFilter::Only(content_type))
                .count();
            assert_eq!(count, 1);
        }
        assert_eq!(ContentTypeFilter::OPTIONS[0], ContentTypeFilter::All);
    }

    #[test]
    fn latest_puts_newer_years_first() {
        let old = item(2019, ContentType::Document);
        let new = item(2023, ContentType::Document);
        assert_eq!(SortOrder::Latest.compare(&new, &old), Ordering::Less);
        assert_eq!(SortOrder::Oldest.compare(&new, &old), Ordering::Greater);
        assert_eq!(SortOrder::Latest.compare(&old, &old), Ordering::Equal);
    }

    #[test]
    fn defaults_are_all_and_latest() {
        assert_eq!(ContentTypeFilter::default(), ContentTypeFilter::All);
        assert_eq!(SortOrder::default(), SortOrder::Latest);
    }
}
