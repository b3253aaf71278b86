// SPDX-License-Identifier: MPL-2.0
//! Filter, sort and paginate the loaded content list.
//!
//! The visible page is a pure function of the loaded items and a
//! [`GalleryQuery`]. It is recomputed in full on every render; nothing is
//! memoized.

use crate::domain::content::{ContentItem, ContentTypeFilter, SortOrder};

/// Number of cards per page.
pub const PAGE_SIZE: usize = 18;

/// User selections driving the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryQuery {
    pub filter: ContentTypeFilter,
    pub sort: SortOrder,
    /// 1-based.
    pub page: usize,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            filter: ContentTypeFilter::All,
            sort: SortOrder::Latest,
            page: 1,
        }
    }
}

impl GalleryQuery {
    /// Changing the filter always returns to the first page.
    pub fn set_filter(&mut self, filter: ContentTypeFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Changing the sort order always returns to the first page.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// Jumps to `page`, clamped to the pages that exist.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Restores `All` / `Latest` / page 1 in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One rendered page of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPage<'a> {
    pub items: Vec<&'a ContentItem>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Items passing the filter, across all pages.
    pub filtered_count: usize,
}

impl GalleryPage<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Filters then stable-sorts by year.
#[must_use]
pub fn filter_and_sort<'a>(
    items: &'a [ContentItem],
    filter: ContentTypeFilter,
    sort: SortOrder,
) -> Vec<&'a ContentItem> {
    let mut selected: Vec<&ContentItem> = items.iter().filter(|item| filter.matches(item)).collect();
    selected.sort_by(|a, b| sort.compare(a, b));
    selected
}

/// `ceil(count / PAGE_SIZE)`; zero items means zero pages.
#[must_use]
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Window `[(page - 1) * PAGE_SIZE, page * PAGE_SIZE)` of `items`.
///
/// Pages past the end (or page 0) are empty.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Derives the visible page.
#[must_use]
pub fn derive_page<'a>(items: &'a [ContentItem], query: &GalleryQuery) -> GalleryPage<'a> {
    let selected = filter_and_sort(items, query.filter, query.sort);
    let filtered_count = selected.len();

    GalleryPage {
        items: page_slice(&selected, query.page).to_vec(),
        current_page: query.page,
        total_pages: total_pages(filtered_count),
        filtered_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentType;

    fn item(id: &str, year: i32, content_type: ContentType) -> ContentItem {
        ContentItem::new(id, id, year, content_type)
    }

    fn ids(page: &GalleryPage<'_>) -> Vec<String> {
        page.items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn document_filter_latest_scenario() {
        let items = vec![
            item("2020-doc", 2020, ContentType::Document),
            item("2023-video", 2023, ContentType::Video),
            item("2019-doc", 2019, ContentType::Document),
        ];
        let query = GalleryQuery {
            filter: ContentTypeFilter::Only(ContentType::Document),
            sort: SortOrder::Latest,
            page: 1,
        };

        let page = derive_page(&items, &query);
        assert_eq!(ids(&page), vec!["2020-doc", "2019-doc"]);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn twenty_five_videos_span_two_pages() {
        let items: Vec<ContentItem> = (0..25)
            .map(|i| item(&format!("v{i:02}"), 2000 + 25 - i, ContentType::Video))
            .collect();
        let mut query = GalleryQuery::default();

        let first = derive_page(&items, &query);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 18);
        assert_eq!(first.items[0].id, "v00");
        assert_eq!(first.items[17].id, "v17");
        assert!(!first.has_previous());
        assert!(first.has_next());

        query.go_to(2, first.total_pages);
        let second = derive_page(&items, &query);
        assert_eq!(second.items.len(), 7);
        assert_eq!(second.items[0].id, "v18");
        assert_eq!(second.items[6].id, "v24");
        assert!(second.has_previous());
        assert!(!second.has_next());
    }

    #[test]
    fn sort_orders_are_monotonic() {
        let items: Vec<ContentItem> = [2018, 2022, 2015, 2022, 2020, 2017]
            .iter()
            .enumerate()
            .map(|(i, year)| item(&i.to_string(), *year, ContentType::Document))
            .collect();

        let latest = filter_and_sort(&items, ContentTypeFilter::All, SortOrder::Latest);
        assert!(latest.windows(2).all(|w| w[0].year >= w[1].year));

        let oldest = filter_and_sort(&items, ContentTypeFilter::All, SortOrder::Oldest);
        assert!(oldest.windows(2).all(|w| w[0].year <= w[1].year));
    }

    #[test]
    fn equal_years_keep_store_order() {
        let items = vec![
            item("first", 2021, ContentType::Document),
            item("second", 2021, ContentType::Document),
            item("third", 2021, ContentType::Document),
        ];
        let sorted = filter_and_sort(&items, ContentTypeFilter::All, SortOrder::Latest);
        let order: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn filter_keeps_only_matching_type() {
        let items = vec![
            item("a", 2020, ContentType::Flipbook),
            item("b", 2021, ContentType::Video),
            item("c", 2022, ContentType::Flipbook),
            item("d", 2019, ContentType::Document),
        ];
        let filter = ContentTypeFilter::Only(ContentType::Flipbook);
        let selected = filter_and_sort(&items, filter, SortOrder::Latest);
        assert!(selected
            .iter()
            .all(|i| i.content_type == ContentType::Flipbook));
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn pages_concatenate_to_the_full_list() {
        for count in [0usize, 1, 17, 18, 19, 36, 37, 100] {
            let items: Vec<ContentItem> = (0..count)
                .map(|i| item(&i.to_string(), (i % 7) as i32 + 2000, ContentType::Document))
                .collect();
            let sorted = filter_and_sort(&items, ContentTypeFilter::All, SortOrder::Oldest);
            let pages = total_pages(sorted.len());
            assert_eq!(pages, count.div_ceil(PAGE_SIZE));

            let mut joined = Vec::new();
            for page in 1..=pages {
                joined.extend_from_slice(page_slice(&sorted, page));
            }
            assert_eq!(joined, sorted, "count = {count}");
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..20).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 3).is_empty());
        assert!(page_slice(&items, usize::MAX).is_empty());
        assert_eq!(page_slice(&items, 2), &[18, 19]);
    }

    #[test]
    fn filter_and_sort_changes_reset_page() {
        let mut query = GalleryQuery {
            page: 4,
            ..GalleryQuery::default()
        };
        query.set_filter(ContentTypeFilter::Only(ContentType::Video));
        assert_eq!(query.page, 1);

        query.page = 3;
        query.set_sort(SortOrder::Oldest);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut query = GalleryQuery {
            filter: ContentTypeFilter::Only(ContentType::Flipbook),
            sort: SortOrder::Oldest,
            page: 9,
        };
        query.reset();
        assert_eq!(query.filter, ContentTypeFilter::All);
        assert_eq!(query.sort, SortOrder::Latest);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn go_to_clamps_to_existing_pages() {
        let mut query = GalleryQuery::default();
        query.go_to(7, 3);
        assert_eq!(query.page, 3);
        query.go_to(0, 3);
        assert_eq!(query.page, 1);
        query.go_to(5, 0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let page = derive_page(&[], &GalleryQuery::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }
}
