// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tool-message localisation for gbs-translate.
//!
//! This is about the tool's own output (errors, listings, summaries), not
//! about the code being translated. Messages live in a static catalog per
//! language with English as the fallback.
//!
//! ## Supported message languages
//!
//! | Code | Language   |
//! |------|------------|
//! | en   | English    |
//! | es   | Spanish    |
//! | pt   | Portuguese |
//!
//! Templates carry `{name}`-style placeholders filled by [`fill`].

mod catalog;
mod iso639;

pub use catalog::{describe_error, fill, t, Lang};
pub use iso639::{is_conventional_locale_tag, is_valid_iso639_1};
