// SPDX-License-Identifier: MPL-2.0
//! `reports_gallery` is a desktop gallery of published reports built with
//! the Iced GUI framework.
//!
//! It loads content records from a REST store once, lets the user filter,
//! sort and page through them, opens documents and flipbooks in the browser
//! and plays videos in an inline modal.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
pub mod video_player;
