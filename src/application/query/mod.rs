// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! - [`gallery`]: Filter/sort/paginate derivation of the visible page
//! - [`pagination`]: Page-number strip with ellipsis collapsing
//!
//! These services never mutate the loaded content; they derive views of it.

pub mod gallery;
pub mod pagination;

pub use gallery::{derive_page, GalleryPage, GalleryQuery, PAGE_SIZE};
pub use pagination::{page_links, PageLink, Pagination};
