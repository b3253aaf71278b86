// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`rest`]: PostgREST-backed content store (implements [`ContentStore`])
//!
//! [`ContentStore`]: crate::application::port::ContentStore

pub mod rest;

pub use rest::{RestContentStore, RestSettings};
