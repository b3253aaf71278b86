// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating loading, filtering, paging and covers.

use super::loader::Loader;
use super::{banner, card, empty_state, filter_bar, pagination};
use crate::application::port::SharedStore;
use crate::application::query::{derive_page, GalleryPage, GalleryQuery, Pagination};
use crate::domain::content::{ContentItem, ContentTypeFilter, SortOrder};
use crate::error::{Error, StoreError};
use crate::i18n::fluent::I18n;
use crate::media::cover::{self, CoverCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element, Length, Padding, Task};

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot store fetch completed.
    Loaded(Result<Vec<ContentItem>, StoreError>),
    FilterSelected(ContentTypeFilter),
    SortSelected(SortOrder),
    ResetFilters,
    PageSelected(usize),
    CoverLoaded {
        url: String,
        result: Result<Handle, Error>,
    },
    /// Play overlay of a video card.
    PlayRequested(String),
    /// "EN" / "AR" link under a card.
    LinkPressed(String),
}

/// Side effects the application must perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show this video in the modal.
    OpenVideo(String),
    /// Open this document or flipbook in the system browser.
    OpenExternal(String),
}

/// Gallery screen state.
#[derive(Debug)]
pub struct State {
    items: Vec<ContentItem>,
    loader: Loader,
    query: GalleryQuery,
    covers: CoverCache,
    cover_client: Option<reqwest::Client>,
    thumbnail_width: u32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_COVER_CACHE_CAPACITY,
            crate::config::DEFAULT_THUMBNAIL_WIDTH,
        )
    }
}

impl State {
    #[must_use]
    pub fn new(cover_capacity: usize, thumbnail_width: u32) -> Self {
        let cover_client = match cover::cover_client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(error = %err, "cover downloads disabled");
                None
            }
        };

        Self {
            items: Vec::new(),
            loader: Loader::default(),
            query: GalleryQuery::default(),
            covers: CoverCache::new(cover_capacity),
            cover_client,
            thumbnail_width,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    #[must_use]
    pub fn query(&self) -> &GalleryQuery {
        &self.query
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    #[must_use]
    pub fn covers(&self) -> &CoverCache {
        &self.covers
    }

    /// Page visible with the current selections.
    #[must_use]
    pub fn page(&self) -> GalleryPage<'_> {
        derive_page(&self.items, &self.query)
    }

    /// Issues the one-shot fetch. Subsequent calls do nothing.
    pub fn load(&mut self, store: SharedStore) -> Task<Message> {
        if !self.loader.begin() {
            return Task::none();
        }
        tracing::debug!("fetching content");
        Task::perform(store.fetch_all(), Message::Loaded)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded(result) => {
                if let Some(items) = self.loader.finish(result) {
                    self.items = items;
                }
                (Effect::None, self.cover_tasks())
            }
            Message::FilterSelected(filter) => {
                self.query.set_filter(filter);
                (Effect::None, self.cover_tasks())
            }
            Message::SortSelected(sort) => {
                self.query.set_sort(sort);
                (Effect::None, self.cover_tasks())
            }
            Message::ResetFilters => {
                self.query.reset();
                (Effect::None, self.cover_tasks())
            }
            Message::PageSelected(page) => {
                let total = self.page().total_pages;
                self.query.go_to(page, total);
                (Effect::None, self.cover_tasks())
            }
            Message::CoverLoaded { url, result } => {
                match result {
                    Ok(handle) => self.covers.insert_ready(url, handle),
                    Err(err) => {
                        tracing::debug!(%url, error = %err, "cover unavailable");
                        self.covers.mark_failed(url);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::PlayRequested(url) => (Effect::OpenVideo(url), Task::none()),
            Message::LinkPressed(url) => (Effect::OpenExternal(url), Task::none()),
        }
    }

    /// Starts downloads for covers of the visible page not seen before.
    fn cover_tasks(&mut self) -> Task<Message> {
        let Some(client) = self.cover_client.clone() else {
            return Task::none();
        };

        let page = derive_page(&self.items, &self.query);
        let missing = self
            .covers
            .claim_missing(page.items.iter().filter_map(|item| item.image_url.as_deref()));
        if missing.is_empty() {
            return Task::none();
        }

        let max_width = self.thumbnail_width;
        Task::batch(missing.into_iter().map(|url| {
            Task::perform(
                cover::load_cover(client.clone(), url, max_width),
                |(url, result)| Message::CoverLoaded { url, result },
            )
        }))
    }

    /// Banner, filter bar, grid (or a placeholder) and pagination.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let page = self.page();

        let content = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(banner::view(i18n));

        let mut body = Column::new()
            .spacing(spacing::MD)
            .push(filter_bar::view(&self.query, i18n));

        if self.loader.is_loading() {
            body = body.push(empty_state::loading(i18n));
        } else if page.is_empty() {
            body = body.push(empty_state::view(i18n));
        } else {
            let count = page.filtered_count.to_string();
            body = body
                .push(
                    text(i18n.tr_with_args("gallery-results", &[("count", count.as_str())]))
                        .size(typography::CAPTION),
                )
                .push(self.grid(&page, i18n));

            let control = Pagination::new(page.current_page, page.total_pages);
            if let Some(pagination) = pagination::view(&control, i18n) {
                body = body.push(
                    Container::new(pagination)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                );
            }
        }

        content
            .push(body.padding(Padding::new(spacing::LG).top(0.0)))
            .into()
    }

    fn grid<'a>(&'a self, page: &GalleryPage<'a>, i18n: &I18n) -> Element<'a, Message> {
        let mut grid = Column::new().spacing(spacing::LG);
        for chunk in page.items.chunks(sizing::GRID_COLUMNS) {
            let mut row = Row::new().spacing(spacing::LG).align_y(alignment::Vertical::Top);
            for &item in chunk {
                let cover = item
                    .image_url
                    .as_deref()
                    .and_then(|url| self.covers.handle(url));
                row = row.push(card::view(item, cover, i18n));
            }
            grid = grid.push(row);
        }

        Container::new(grid)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StaticStore;
    use crate::application::query::PAGE_SIZE;
    use crate::domain::content::ContentType;
    use std::sync::Arc;

    fn item(id: &str, year: i32, content_type: ContentType) -> ContentItem {
        ContentItem::new(id, id, year, content_type)
    }

    fn loaded(items: Vec<ContentItem>) -> State {
        let mut state = State::default();
        let _ = state.load(Arc::new(StaticStore::with_items(Vec::new())));
        let _ = state.handle_message(Message::Loaded(Ok(items)));
        state
    }

    #[test]
    fn load_is_issued_once() {
        let mut state = State::default();
        let store: SharedStore = Arc::new(StaticStore::with_items(Vec::new()));
        let _ = state.load(store.clone());
        assert!(state.is_loading());
        let _ = state.load(store);
        assert!(state.is_loading());
    }

    #[test]
    fn unreachable_store_leaves_an_empty_gallery() {
        let mut state = State::default();
        let _ = state.load(Arc::new(StaticStore::with_items(Vec::new())));
        let (effect, _) = state.handle_message(Message::Loaded(Err(StoreError::Request(
            "connection refused".into(),
        ))));

        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
        assert!(state.items().is_empty());
        assert!(state.page().is_empty());
    }

    #[test]
    fn changing_filter_or_sort_returns_to_page_one() {
        let items = (0..40)
            .map(|i| item(&format!("v{i}"), 2000 + i, ContentType::Video))
            .collect();
        let mut state = loaded(items);

        let _ = state.handle_message(Message::PageSelected(2));
        assert_eq!(state.query().page, 2);
        let _ = state.handle_message(Message::FilterSelected(ContentTypeFilter::Only(
            ContentType::Video,
        )));
        assert_eq!(state.query().page, 1);

        let _ = state.handle_message(Message::PageSelected(3));
        let _ = state.handle_message(Message::SortSelected(SortOrder::Oldest));
        assert_eq!(state.query().page, 1);
        assert_eq!(state.page().items[0].year, 2000);
    }

    #[test]
    fn page_selection_keeps_filters_and_is_clamped() {
        let items = (0..25)
            .map(|i| item(&format!("v{i}"), 2000, ContentType::Video))
            .collect();
        let mut state = loaded(items);
        let _ = state.handle_message(Message::FilterSelected(ContentTypeFilter::Only(
            ContentType::Video,
        )));

        let _ = state.handle_message(Message::PageSelected(9));
        assert_eq!(state.query().page, 2);
        assert_eq!(
            state.query().filter,
            ContentTypeFilter::Only(ContentType::Video)
        );

        let page = state.page();
        assert_eq!(page.items.len(), 25 - PAGE_SIZE);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = loaded(vec![item("a", 2020, ContentType::Document)]);
        let _ = state.handle_message(Message::SortSelected(SortOrder::Oldest));
        let _ = state.handle_message(Message::FilterSelected(ContentTypeFilter::Only(
            ContentType::Flipbook,
        )));

        let _ = state.handle_message(Message::ResetFilters);
        assert_eq!(*state.query(), GalleryQuery::default());
    }

    #[test]
    fn card_actions_become_effects() {
        let mut state = State::default();
        let (effect, _) = state.handle_message(Message::PlayRequested("v1.mp4".into()));
        assert_eq!(effect, Effect::OpenVideo("v1.mp4".into()));

        let (effect, _) = state.handle_message(Message::LinkPressed("https://x/en.pdf".into()));
        assert_eq!(effect, Effect::OpenExternal("https://x/en.pdf".into()));
    }

    #[test]
    fn visible_covers_are_claimed_once() {
        let mut a = item("a", 2020, ContentType::Document);
        a.image_url = Some("https://cdn.example/a.jpg".into());
        let mut b = item("b", 2021, ContentType::Document);
        b.image_url = Some("https://cdn.example/a.jpg".into());
        let state = loaded(vec![a, b]);

        assert_eq!(state.covers().len(), 1);
    }

    #[test]
    fn failed_cover_falls_back_to_placeholder() {
        let mut a = item("a", 2020, ContentType::Document);
        a.image_url = Some("https://cdn.example/a.jpg".into());
        let mut state = loaded(vec![a]);

        let _ = state.handle_message(Message::CoverLoaded {
            url: "https://cdn.example/a.jpg".into(),
            result: Err(StoreError::Status(404).into()),
        });
        assert!(state.covers().handle("https://cdn.example/a.jpg").is_none());
        assert_eq!(state.covers().stats().failures, 1);
    }
}
