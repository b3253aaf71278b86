// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types without I/O.
//!
//! - [`content`]: Content records (documents, flipbooks, videos), view filters
//!   and per-language link resolution

pub mod content;
