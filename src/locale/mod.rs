// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locales: definitions, the registry that resolves them, and the
//! built-in Gobstones vocabularies.
//!
//! A [`LocaleDefinition`] maps bare token names to spellings and may extend
//! a previously registered locale, overriding only some spellings. The
//! [`LocaleRegistry`] flattens every definition into a [`RegisteredLocale`]
//! whose dictionary is keyed by decorated tokens (`$GBS_COMMAND_DROP$`).
//!
//! ## Caveat
//!
//! A full (non-extending) definition that omits tokens is still accepted.
//! The omitted tokens simply never translate: abstract code keeps them
//! decorated and source words for them pass through. The registry logs a
//! warning and [`coverage`] reports them; nothing fails.
//!
//! The same goes for a token prefix or suffix containing a separator
//! character (`<` and `>`, say). Decorated tokens are then split by the
//! scanner and abstract code never decodes. The translator warns at
//! construction; see [`crate::translator::decoration_conflict`].

pub mod builtin;
pub mod coverage;
pub mod registry;

use crate::bimap::BiMap;
use crate::token::Token;
use std::collections::BTreeSet;

pub use coverage::{check_locale, CoverageReport};
pub use registry::LocaleRegistry;

/// A possibly partial, possibly extending, locale vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDefinition {
    pub extends: Option<String>,
    pub entries: Vec<(Token, String)>,
}

impl LocaleDefinition {
    /// A stand-alone definition that should cover every token.
    pub fn full<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Token, S)>,
        S: Into<String>,
    {
        Self {
            extends: None,
            entries: entries.into_iter().map(|(t, s)| (t, s.into())).collect(),
        }
    }

    /// A definition that inherits from `base` and overrides `entries`.
    pub fn extending<I, S>(base: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (Token, S)>,
        S: Into<String>,
    {
        Self {
            extends: Some(base.into()),
            entries: entries.into_iter().map(|(t, s)| (t, s.into())).collect(),
        }
    }

    pub fn from_table(table: &[(Token, &str)]) -> Self {
        Self::full(table.iter().copied())
    }

    /// Tokens this definition gives no spelling for.
    pub fn missing_tokens(&self) -> Vec<Token> {
        let covered: BTreeSet<Token> = self.entries.iter().map(|(t, _)| *t).collect();
        Token::all()
            .iter()
            .copied()
            .filter(|t| !covered.contains(t))
            .collect()
    }
}

/// A fully resolved locale. Immutable once the registry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredLocale {
    pub name: String,
    pub extends: Option<String>,
    /// Decorated token <-> localized spelling.
    pub dictionary: BiMap<String, String>,
}

impl RegisteredLocale {
    /// Spelling for a decorated token.
    pub fn spelling(&self, decorated: &str) -> Option<&str> {
        self.dictionary.get_by_key(decorated).map(String::as_str)
    }

    /// Decorated token for a spelling.
    pub fn token_for(&self, spelling: &str) -> Option<&str> {
        self.dictionary.get_by_value(spelling).map(String::as_str)
    }
}
