// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for gbs-translate.
//!
//! Lookup is a linear scan over a few dozen keys; it only runs when the CLI
//! prints something.
//!
//! ## Adding a message language
//!
//! 1. Add a variant to [`Lang`] and its arms in `code()` / `from_code()`
//! 2. Create a `const XX: &[(&str, &str)]` table below
//! 3. Add it to `catalog_for()`

use crate::error::{ReferenceSite, TranslateError};
use serde::{Deserialize, Serialize};

/// Language of the tool's own messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
    Pt,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Pt => "pt",
        }
    }

    /// Accepts a bare code or a region-qualified tag (`es-AR`, `pt_BR.UTF-8`).
    pub fn from_code(code: &str) -> Option<Lang> {
        let primary = code
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es, Lang::Pt]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Look up `key`, falling back to English and then to the key itself.
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    let found: Option<&'a str> = lookup(catalog_for(lang), key).or_else(|| lookup(EN, key));
    found.unwrap_or(key)
}

/// Substitute `{placeholder}` occurrences in a template.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (placeholder, value) in args {
        out = out.replace(&format!("{{{}}}", placeholder), value);
    }
    out
}

/// Render a [`TranslateError`] in the given message language.
pub fn describe_error(lang: Lang, err: &TranslateError) -> String {
    let template = t(lang, err.code());
    match err {
        TranslateError::UnknownLocaleReference {
            name,
            site: ReferenceSite::ExtendedBy(locale),
        } => fill(template, &[("name", name.as_str()), ("locale", locale.as_str())]),
        TranslateError::UnknownLocaleReference { name, site } => {
            let site_key = match site {
                ReferenceSite::Source => "site.source",
                _ => "site.destination",
            };
            fill(template, &[("name", name.as_str()), ("site", t(lang, site_key))])
        }
        TranslateError::DuplicateLocaleName { name } => {
            fill(template, &[("name", name.as_str())])
        }
        TranslateError::NoSourceLocale
        | TranslateError::NoDestinationLocale
        | TranslateError::NoNameOverridesConfigured => template.to_string(),
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Es => ES,
        Lang::Pt => PT,
    }
}

// ─── English (every key is defined here) ────────────────────────────

const EN: &[(&str, &str)] = &[
    ("error.unknown_locale", "unknown {site} `{name}`"),
    (
        "error.unknown_extension_target",
        "locale `{locale}` extends `{name}`, which is not registered before it",
    ),
    ("error.duplicate_locale", "locale `{name}` is registered more than once"),
    ("error.no_source", "no source locale given (use --from)"),
    ("error.no_destination", "no destination locale given (use --to)"),
    ("error.no_names", "name overrides requested but no names file was given (use --names)"),
    ("site.source", "source locale"),
    ("site.destination", "destination locale"),
    ("cli.error", "error"),
    ("cli.warning", "warning"),
    ("locales.title", "Registered locales"),
    ("locales.extends", "extends"),
    ("locales.entries", "entries"),
    ("check.title", "Locale coverage"),
    ("check.complete", "complete"),
    ("check.missing", "missing tokens: {count}"),
    ("check.shared", "spelling `{spelling}` shared by {tokens}"),
    ("batch.summary", "{count} file(s) written to {dir}"),
    ("batch.skipped", "{count} file(s) skipped"),
    ("warn.unconventional_locale", "locale name `{name}` is not an ISO 639-1 tag"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("error.unknown_locale", "{site} desconocido: `{name}`"),
    (
        "error.unknown_extension_target",
        "el idioma `{locale}` extiende `{name}`, que no está registrado antes",
    ),
    ("error.duplicate_locale", "el idioma `{name}` está registrado más de una vez"),
    ("error.no_source", "no se indicó idioma de origen (use --from)"),
    ("error.no_destination", "no se indicó idioma de destino (use --to)"),
    ("error.no_names", "se pidieron nombres pero no se indicó archivo de nombres (use --names)"),
    ("site.source", "idioma de origen"),
    ("site.destination", "idioma de destino"),
    ("cli.error", "error"),
    ("cli.warning", "advertencia"),
    ("locales.title", "Idiomas registrados"),
    ("locales.extends", "extiende"),
    ("locales.entries", "entradas"),
    ("check.title", "Cobertura de idiomas"),
    ("check.complete", "completo"),
    ("check.missing", "tokens faltantes: {count}"),
    ("check.shared", "la escritura `{spelling}` la comparten {tokens}"),
    ("batch.summary", "{count} archivo(s) escritos en {dir}"),
    ("batch.skipped", "{count} archivo(s) omitidos"),
    ("warn.unconventional_locale", "el nombre de idioma `{name}` no es una etiqueta ISO 639-1"),
];

// ─── Portuguese ─────────────────────────────────────────────────────

const PT: &[(&str, &str)] = &[
    ("error.unknown_locale", "{site} desconhecido: `{name}`"),
    (
        "error.unknown_extension_target",
        "o idioma `{locale}` estende `{name}`, que não está registrado antes",
    ),
    ("error.duplicate_locale", "o idioma `{name}` está registrado mais de uma vez"),
    ("error.no_source", "nenhum idioma de origem informado (use --from)"),
    ("error.no_destination", "nenhum idioma de destino informado (use --to)"),
    ("error.no_names", "nomes solicitados mas nenhum arquivo de nomes informado (use --names)"),
    ("site.source", "idioma de origem"),
    ("site.destination", "idioma de destino"),
    ("cli.error", "erro"),
    ("cli.warning", "aviso"),
    ("locales.title", "Idiomas registrados"),
    ("locales.extends", "estende"),
    ("locales.entries", "entradas"),
    ("check.title", "Cobertura dos idiomas"),
    ("check.complete", "completo"),
    ("check.missing", "tokens ausentes: {count}"),
    ("check.shared", "a grafia `{spelling}` é compartilhada por {tokens}"),
    ("batch.summary", "{count} arquivo(s) gravados em {dir}"),
    ("batch.skipped", "{count} arquivo(s) ignorados"),
    ("warn.unconventional_locale", "o nome de idioma `{name}` não é uma etiqueta ISO 639-1"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, value) in EN {
            assert_eq!(t(Lang::En, key), value);
        }
    }

    #[test]
    fn catalogs_have_the_same_keys() {
        for lang in Lang::all() {
            let catalog = catalog_for(*lang);
            assert_eq!(catalog.len(), EN.len(), "{} key count", lang);
            for &(key, _) in EN {
                assert!(lookup(catalog, key).is_some(), "{} lacks {}", lang, key);
            }
        }
    }

    #[test]
    fn unknown_key_returns_the_key() {
        assert_eq!(t(Lang::Es, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn lang_from_tags() {
        assert_eq!(Lang::from_code("es"), Some(Lang::Es));
        assert_eq!(Lang::from_code("pt_BR.UTF-8"), Some(Lang::Pt));
        assert_eq!(Lang::from_code("EN-us"), Some(Lang::En));
        assert_eq!(Lang::from_code("ja"), None);
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn errors_are_rendered_with_their_fields() {
        let err = TranslateError::UnknownLocaleReference {
            name: "xx".to_string(),
            site: ReferenceSite::Source,
        };
        assert_eq!(describe_error(Lang::En, &err), "unknown source locale `xx`");
        assert_eq!(describe_error(Lang::Es, &err), "idioma de origen desconocido: `xx`");

        let err = TranslateError::UnknownLocaleReference {
            name: "es".to_string(),
            site: ReferenceSite::ExtendedBy("es-AR".to_string()),
        };
        assert!(describe_error(Lang::Pt, &err).contains("`es-AR` estende `es`"));

        assert_eq!(
            describe_error(Lang::En, &TranslateError::NoDestinationLocale),
            "no destination locale given (use --to)"
        );
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        assert_eq!(fill("{a}-{b}-{a}", &[("a", "1"), ("b", "2")]), "1-2-1");
        assert_eq!(fill("{missing}", &[]), "{missing}");
    }
}
