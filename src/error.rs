// SPDX-License-Identifier: PMPL-1.0-or-later

//! Errors raised by the registry and the translation engine.
//!
//! The `Display` text is a plain English fallback. User-facing output goes
//! through [`crate::i18n::describe_error`], which renders the same
//! variants in the tool's configured message language.

use std::fmt;
use thiserror::Error;

/// Where an unresolved locale name was referenced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSite {
    Source,
    Destination,
    /// Extension target of the locale being registered.
    ExtendedBy(String),
}

impl fmt::Display for ReferenceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSite::Source => f.write_str("source locale"),
            ReferenceSite::Destination => f.write_str("destination locale"),
            ReferenceSite::ExtendedBy(name) => write!(f, "extension target of `{}`", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("unknown locale `{name}` ({site})")]
    UnknownLocaleReference { name: String, site: ReferenceSite },

    #[error("locale `{name}` is already registered")]
    DuplicateLocaleName { name: String },

    #[error("no source locale configured")]
    NoSourceLocale,

    #[error("no destination locale configured")]
    NoDestinationLocale,

    #[error("name overrides requested but none were configured")]
    NoNameOverridesConfigured,
}

impl TranslateError {
    /// Stable identifier, used as the message-catalog key.
    pub fn code(&self) -> &'static str {
        match self {
            TranslateError::UnknownLocaleReference {
                site: ReferenceSite::ExtendedBy(_),
                ..
            } => "error.unknown_extension_target",
            TranslateError::UnknownLocaleReference { .. } => "error.unknown_locale",
            TranslateError::DuplicateLocaleName { .. } => "error.duplicate_locale",
            TranslateError::NoSourceLocale => "error.no_source",
            TranslateError::NoDestinationLocale => "error.no_destination",
            TranslateError::NoNameOverridesConfigured => "error.no_names",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
