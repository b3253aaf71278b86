// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: banner, filter bar, card grid and pagination.
//!
//! [`component::State`] owns the loaded items and the user's selections;
//! the visible page is derived from them on every render.

mod banner;
mod card;
pub mod component;
mod empty_state;
mod filter_bar;
pub mod loader;
mod pagination;

pub use card::CardAspect;
pub use component::{Effect, Message, State};
pub use loader::{LoadPhase, Loader};
