// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded in the binary
//! - Fallback to `en-US` when the requested locale is not shipped
//! - Right-to-left detection for the Arabic lexicon

pub mod fluent;
