// SPDX-License-Identifier: MPL-2.0
//! Page-number strip for the pagination control.
//!
//! The first and last page are always listed, together with the current page
//! and its immediate neighbours. Every run of skipped pages collapses into a
//! single [`PageLink::Ellipsis`].

/// One entry of the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Snapshot of everything the pagination control renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current: usize,
    pub total: usize,
    pub links: Vec<PageLink>,
}

impl Pagination {
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            links: page_links(current, total),
        }
    }

    /// Previous is disabled on the first page.
    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        (self.current > 1).then(|| self.current - 1)
    }

    /// Next is disabled on the last page.
    #[must_use]
    pub fn next(&self) -> Option<usize> {
        (self.current < self.total).then(|| self.current + 1)
    }

    /// The control is only worth showing when there is somewhere to go.
    #[must_use]
    pub fn is_needed(&self) -> bool {
        self.total > 1
    }
}

/// Builds the page strip for `current` out of `total` pages.
#[must_use]
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut shown: Vec<usize> = vec![1, current.saturating_sub(1), current, current + 1, total];
    shown.retain(|page| (1..=total).contains(page));
    shown.sort_unstable();
    shown.dedup();

    let mut links = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<usize> = None;
    for page in shown {
        if let Some(prev) = previous {
            if page > prev + 1 {
                links.push(PageLink::Ellipsis);
            }
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }
    links
}
