// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale registry
//!
//! Built in two phases: the built-in and user-supplied definitions are
//! first gathered into one ordered list, then resolved front to back. An
//! extension target has to appear earlier in that list, which rules out
//! forward references and cycles without a separate graph check. Any
//! failure aborts the whole build; a half-built registry is never returned.

use super::{builtin, LocaleDefinition, RegisteredLocale};
use crate::bimap::BiMap;
use crate::error::{ReferenceSite, Result, TranslateError};
use crate::token::{self, Token};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub const DEFAULT_TOKEN_PREFIX: &str = "$";
pub const DEFAULT_TOKEN_SUFFIX: &str = "$";

#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: HashMap<String, RegisteredLocale>,
    order: Vec<String>,
    prefix: String,
    suffix: String,
}

impl LocaleRegistry {
    /// Built-in locales followed by `additional`, decorated with `prefix`
    /// and `suffix`.
    pub fn build<I>(additional: I, prefix: &str, suffix: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (String, LocaleDefinition)>,
    {
        let mut definitions = builtin::definitions();
        definitions.extend(additional);
        Self::from_definitions(definitions, prefix, suffix)
    }

    /// Only the given definitions, no built-ins.
    pub fn from_definitions<I>(definitions: I, prefix: &str, suffix: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (String, LocaleDefinition)>,
    {
        let mut registry = Self {
            locales: HashMap::new(),
            order: Vec::new(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        };
        for (name, definition) in definitions {
            registry.register(name, definition)?;
        }
        debug!(locales = registry.order.len(), "locale registry built");
        Ok(registry)
    }

    fn register(&mut self, name: String, definition: LocaleDefinition) -> Result<()> {
        if let Some(target) = &definition.extends {
            if !self.locales.contains_key(target) {
                return Err(TranslateError::UnknownLocaleReference {
                    name: target.clone(),
                    site: ReferenceSite::ExtendedBy(name),
                });
            }
        }
        if self.locales.contains_key(&name) {
            return Err(TranslateError::DuplicateLocaleName { name });
        }

        let dictionary = match &definition.extends {
            None => {
                let missing = definition.missing_tokens();
                if !missing.is_empty() {
                    warn!(
                        locale = %name,
                        missing = missing.len(),
                        "locale does not cover every token; uncovered tokens pass through untranslated"
                    );
                }
                self.decorate_all(&definition.entries)
            }
            Some(target) => self.inherit(&self.locales[target].dictionary, &definition.entries),
        };

        debug!(
            locale = %name,
            extends = definition.extends.as_deref().unwrap_or("-"),
            entries = dictionary.len(),
            "registered locale"
        );
        self.order.push(name.clone());
        self.locales.insert(
            name.clone(),
            RegisteredLocale {
                name,
                extends: definition.extends,
                dictionary,
            },
        );
        Ok(())
    }

    fn decorate_all(&self, entries: &[(Token, String)]) -> BiMap<String, String> {
        entries
            .iter()
            .map(|(t, spelling)| (t.decorate(&self.prefix, &self.suffix), spelling.clone()))
            .collect()
    }

    /// Flatten `overrides` on top of an already resolved base dictionary.
    fn inherit(
        &self,
        base: &BiMap<String, String>,
        overrides: &[(Token, String)],
    ) -> BiMap<String, String> {
        let overrides: BTreeMap<Token, &str> =
            overrides.iter().map(|(t, s)| (*t, s.as_str())).collect();

        let mut pairs: Vec<(String, String)> = base
            .forward()
            .iter()
            .map(|(decorated, inherited)| {
                let spelling = token::undecorate(decorated, &self.prefix, &self.suffix)
                    .and_then(Token::parse)
                    .and_then(|t| overrides.get(&t).copied())
                    .unwrap_or(inherited.as_str());
                (decorated.clone(), spelling.to_string())
            })
            .collect();

        // Tokens the base never covered are added rather than dropped.
        for (t, spelling) in &overrides {
            let decorated = t.decorate(&self.prefix, &self.suffix);
            if !base.contains_key(decorated.as_str()) {
                pairs.push((decorated, spelling.to_string()));
            }
        }

        BiMap::from_pairs(pairs)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredLocale> {
        self.locales.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locales.contains_key(name)
    }

    /// Resolve a configured locale, reporting where it was referenced.
    pub fn resolve(&self, name: &str, site: ReferenceSite) -> Result<&RegisteredLocale> {
        self.locales
            .get(name)
            .ok_or_else(|| TranslateError::UnknownLocaleReference {
                name: name.to_string(),
                site,
            })
    }

    /// Locale names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Registered locales in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredLocale> {
        self.order.iter().filter_map(|name| self.locales.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}
