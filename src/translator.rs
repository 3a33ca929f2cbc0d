// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation engine
//!
//! Three operations over one immutable [`Translator`]:
//!
//! - [`encode`](Translator::encode): source-locale text to abstract code
//!   (`Poner` -> `$GBS_COMMAND_DROP$`)
//! - [`decode`](Translator::decode): abstract code to destination-locale text
//! - [`translate`](Translator::translate): encode then decode
//!
//! Each word is looked up in the locale dictionary and replaced when it
//! has an entry; everything else, separators included, is copied through
//! verbatim. Name overrides are consulted before the locale, so on a
//! collision the override silently wins.
//!
//! The token prefix and suffix must not contain separator characters. A
//! decorated token such as `<GBS_COMMAND_DROP>` would be split by the
//! scanner and never decode; construction only warns about it.

use crate::bimap::BiMap;
use crate::error::{ReferenceSite, Result, TranslateError};
use crate::locale::registry::{DEFAULT_TOKEN_PREFIX, DEFAULT_TOKEN_SUFFIX};
use crate::locale::{LocaleDefinition, LocaleRegistry, RegisteredLocale};
use crate::scanner::{SeparatorSet, Span, WordScanner};
use tracing::{debug, warn};

/// Everything a [`Translator`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    pub source_locale: Option<String>,
    pub destination_locale: Option<String>,
    /// `(from-locale name, to-locale name)` pairs for user identifiers.
    pub name_overrides: Option<Vec<(String, String)>>,
    /// Registered after the built-ins, in this order.
    pub additional_locales: Vec<(String, LocaleDefinition)>,
    pub token_prefix: String,
    pub token_suffix: String,
    pub separators: SeparatorSet,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_locale: None,
            destination_locale: None,
            name_overrides: None,
            additional_locales: Vec::new(),
            token_prefix: DEFAULT_TOKEN_PREFIX.to_string(),
            token_suffix: DEFAULT_TOKEN_SUFFIX.to_string(),
            separators: SeparatorSet::default(),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, locale: impl Into<String>) -> Self {
        self.source_locale = Some(locale.into());
        self
    }

    pub fn with_destination(mut self, locale: impl Into<String>) -> Self {
        self.destination_locale = Some(locale.into());
        self
    }

    pub fn with_name_overrides<I, A, B>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        self.name_overrides = Some(
            pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        );
        self
    }

    pub fn with_locale(mut self, name: impl Into<String>, definition: LocaleDefinition) -> Self {
        self.additional_locales.push((name.into(), definition));
        self
    }

    pub fn with_decoration(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.token_prefix = prefix.into();
        self.token_suffix = suffix.into();
        self
    }

    pub fn with_separators(mut self, separators: SeparatorSet) -> Self {
        self.separators = separators;
        self
    }
}

/// Which of the three operations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
    Translate,
}

impl Operation {
    pub fn apply(self, translator: &Translator, code: &str, use_names: bool) -> Result<String> {
        match self {
            Operation::Encode => translator.encode(code, use_names),
            Operation::Decode => translator.decode(code, use_names),
            Operation::Translate => translator.translate(code, use_names),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
            Operation::Translate => "translate",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    registry: LocaleRegistry,
    source: Option<String>,
    destination: Option<String>,
    names: Option<BiMap<String, String>>,
    separators: SeparatorSet,
}

impl Translator {
    /// Build the registry and check that the configured locales exist.
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let conflict = decoration_conflict(&config);
        let registry = LocaleRegistry::build(
            config.additional_locales,
            &config.token_prefix,
            &config.token_suffix,
        )?;

        if let Some(name) = &config.source_locale {
            registry.resolve(name, ReferenceSite::Source)?;
        }
        if let Some(name) = &config.destination_locale {
            registry.resolve(name, ReferenceSite::Destination)?;
        }
        if let Some(c) = conflict {
            warn!(
                prefix = %config.token_prefix,
                suffix = %config.token_suffix,
                separator = ?c,
                "token decoration contains a separator; abstract tokens will not decode"
            );
        }

        debug!(
            source = config.source_locale.as_deref().unwrap_or("-"),
            destination = config.destination_locale.as_deref().unwrap_or("-"),
            names = config.name_overrides.as_ref().map(Vec::len).unwrap_or(0),
            "translator ready"
        );

        Ok(Self {
            registry,
            source: config.source_locale,
            destination: config.destination_locale,
            names: config.name_overrides.map(BiMap::from_pairs),
            separators: config.separators,
        })
    }

    /// Replace source-locale words with decorated tokens.
    pub fn encode(&self, code: &str, use_names: bool) -> Result<String> {
        let source = self.source()?;
        let names = self.names_if(use_names)?;

        debug!(locale = %source.name, use_names, bytes = code.len(), "encoding");
        Ok(self.substitute(code, |word| {
            names
                .and_then(|names| names.get_by_key(word))
                .or_else(|| source.dictionary.get_by_value(word))
        }))
    }

    /// Replace decorated tokens with destination-locale words.
    pub fn decode(&self, code: &str, use_names: bool) -> Result<String> {
        let destination = self.destination()?;
        let names = self.names_if(use_names)?;

        debug!(locale = %destination.name, use_names, bytes = code.len(), "decoding");
        Ok(self.substitute(code, |word| {
            names
                .and_then(|names| names.get_by_value(word))
                .or_else(|| destination.dictionary.get_by_key(word))
        }))
    }

    /// Source-locale text to destination-locale text.
    ///
    /// Name overrides, when requested, are applied while encoding only. The
    /// decode half runs without them so renamed identifiers are not
    /// substituted a second time.
    pub fn translate(&self, code: &str, use_names: bool) -> Result<String> {
        self.source()?;
        self.destination()?;
        self.names_if(use_names)?;

        let abstract_code = self.encode(code, use_names)?;
        self.decode(&abstract_code, false)
    }

    fn substitute<'d, F>(&self, code: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'d String>,
    {
        let mut out = String::with_capacity(code.len());
        for span in WordScanner::new(code, &self.separators) {
            match span {
                Span::Word(word) => out.push_str(lookup(word).map(String::as_str).unwrap_or(word)),
                Span::Separator(separator) => out.push_str(separator),
            }
        }
        out
    }

    fn source(&self) -> Result<&RegisteredLocale> {
        let name = self.source.as_deref().ok_or(TranslateError::NoSourceLocale)?;
        self.registry.resolve(name, ReferenceSite::Source)
    }

    fn destination(&self) -> Result<&RegisteredLocale> {
        let name = self
            .destination
            .as_deref()
            .ok_or(TranslateError::NoDestinationLocale)?;
        self.registry.resolve(name, ReferenceSite::Destination)
    }

    fn names_if(&self, use_names: bool) -> Result<Option<&BiMap<String, String>>> {
        if !use_names {
            return Ok(None);
        }
        self.names
            .as_ref()
            .map(Some)
            .ok_or(TranslateError::NoNameOverridesConfigured)
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn source_locale(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn destination_locale(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

/// First separator character found in the configured token prefix or
/// suffix.
pub fn decoration_conflict(config: &TranslatorConfig) -> Option<char> {
    config
        .separators
        .first_in(&config.token_prefix)
        .or_else(|| config.separators.first_in(&config.token_suffix))
}
