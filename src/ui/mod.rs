// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages and reports side effects to the
//! application as an `Effect`.
//!
//! # Screens
//!
//! - [`gallery`] - Banner, filter bar, card grid and pagination
//! - [`video_modal`] - Inline video player over the gallery
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod video_modal;
