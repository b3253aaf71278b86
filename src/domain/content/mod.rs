// SPDX-License-Identifier: MPL-2.0
//! Content domain types.
//!
//! A gallery is a flat list of [`ContentItem`]s as published by the store.
//! Everything in this module is I/O free so the filtering and presentation
//! rules can be tested without a network or a window.

pub mod filter;
pub mod links;
pub mod types;

pub use filter::{ContentTypeFilter, SortOrder};
pub use links::{language_links, Language, LanguageLinks};
pub use types::{ContentCategory, ContentItem, ContentType};
