// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage report for a registered locale.
//!
//! Registration never rejects an incomplete or ambiguous vocabulary. This
//! report makes those gaps visible for `gbs-translate check`.

use super::RegisteredLocale;
use crate::token::Token;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub locale: String,
    /// Tokens with no spelling; they never translate.
    pub missing: Vec<Token>,
    /// Spellings shared by several decorated tokens. Only the last one is
    /// reachable when encoding.
    pub shared_spellings: Vec<(String, Vec<String>)>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.is_complete() && self.shared_spellings.is_empty()
    }
}

pub fn check_locale(locale: &RegisteredLocale, prefix: &str, suffix: &str) -> CoverageReport {
    let missing = Token::all()
        .iter()
        .copied()
        .filter(|t| !locale.dictionary.contains_key(t.decorate(prefix, suffix).as_str()))
        .collect();

    let mut by_spelling: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (decorated, spelling) in locale.dictionary.forward() {
        by_spelling
            .entry(spelling.as_str())
            .or_default()
            .push(decorated.clone());
    }
    let shared_spellings = by_spelling
        .into_iter()
        .filter(|(_, tokens)| tokens.len() > 1)
        .map(|(spelling, tokens)| (spelling.to_string(), tokens))
        .collect();

    CoverageReport {
        locale: locale.name.clone(),
        missing,
        shared_spellings,
    }
}
