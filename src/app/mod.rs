// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! video modal.
//!
//! The `App` struct wires together configuration, localization and the
//! content store, then routes messages to the components and performs the
//! side effects they request.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{SharedStore, StaticStore};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::RestContentStore;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use crate::ui::video_modal::VideoModal;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    modal: VideoModal,
    theme_mode: ThemeMode,
    /// Lexicon key of a warning raised at startup.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.gallery.items().len())
            .field("video", &self.modal.url())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1040.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the content store for this run.
///
/// Returns the lexicon key of a warning when no usable store is configured;
/// the gallery then simply shows its empty state.
pub fn build_store(config: &Config, cli_url: Option<&str>) -> (SharedStore, Option<String>) {
    let Some(settings) = config.rest_settings(cli_url) else {
        tracing::warn!("no content store configured");
        return (
            Arc::new(StaticStore::with_items(Vec::new())),
            Some("store-not-configured".to_string()),
        );
    };

    match RestContentStore::new(&settings) {
        Ok(store) => {
            tracing::info!(endpoint = %store.endpoint(), "using REST content store");
            (Arc::new(store), None)
        }
        Err(err) => {
            tracing::error!(error = %err, "content store client could not be created");
            (Arc::new(StaticStore::failing(err)), None)
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (store, store_warning) = build_store(&config, flags.store_url.as_deref());

        Self::with_store(config, i18n, store, config_warning.or(store_warning))
    }

    /// Builds the application around an already chosen store and issues the
    /// initial fetch.
    pub fn with_store(
        config: Config,
        i18n: I18n,
        store: SharedStore,
        warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut gallery =
            gallery::State::new(config.cover_cache_capacity(), config.thumbnail_width());
        let task = gallery.load(store).map(Message::Gallery);

        let app = App {
            i18n,
            gallery,
            modal: VideoModal::new(config.video.autoplay),
            theme_mode: config.general.theme_mode,
            warning,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_video_subscription(&self.modal),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            modal: &mut self.modal,
            warning: &mut self.warning,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            modal: &self.modal,
            warning: self.warning.as_deref(),
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn modal(&self) -> &VideoModal {
        &self.modal
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}
