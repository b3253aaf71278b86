// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`store`]: Read access to published content records
//!
//! Traits use domain types only; the REST adapter lives in
//! [`crate::infrastructure::rest`].

pub mod store;

pub use store::{ContentStore, SharedStore, StaticStore};
