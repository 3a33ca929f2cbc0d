// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration files
//!
//! Three kinds, each JSON or YAML:
//!
//! - a project file (`gbs-translate.yaml`) with defaults for CLI flags
//! - a names file: `{ fromName: toName, ... }`
//! - a locales file: a list of `{ name, extends?, tokens: { TOKEN: spelling } }`

use crate::i18n;
use crate::locale::LocaleDefinition;
use crate::token::Token;
use anyhow::{anyhow, Context, Result};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File names probed, in order, when no `--config` is given.
pub const PROJECT_FILE_NAMES: &[&str] =
    &["gbs-translate.yaml", "gbs-translate.yml", "gbs-translate.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

/// Read a JSON or YAML file. Without a recognised extension JSON is tried
/// first, then YAML.
pub fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match FileFormat::from_path(path) {
        Some(FileFormat::Json) => serde_json::from_str(&content)
            .with_context(|| format!("parsing {} as JSON", path.display())),
        Some(FileFormat::Yaml) => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {} as YAML", path.display())),
        None => serde_json::from_str(&content).or_else(|json_err| {
            serde_yaml::from_str(&content).map_err(|yaml_err| {
                anyhow!(
                    "{} is neither JSON ({}) nor YAML ({})",
                    path.display(),
                    json_err,
                    yaml_err
                )
            })
        }),
    }
}

/// Defaults for the CLI. Every field is optional; flags win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub from: Option<String>,
    pub to: Option<String>,
    pub names: Option<PathBuf>,
    pub use_names: Option<bool>,
    pub locales: Option<PathBuf>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub lang: Option<String>,
}

impl ProjectConfig {
    /// Load a project file. Relative `names` / `locales` paths are taken
    /// relative to the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: ProjectConfig = read_structured(path)?;
        let base = path.parent().unwrap_or(Path::new("."));
        config.names = config.names.map(|p| base.join(p));
        config.locales = config.locales.map(|p| base.join(p));
        debug!(path = %path.display(), "loaded project config");
        Ok(config)
    }

    /// Look for a project file in `dir`.
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        for name in PROJECT_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((candidate, config)));
            }
        }
        Ok(None)
    }
}

/// `{ fromName: toName }` pairs in the order the file lists them. A later
/// pair wins over an earlier one with the same target when decoding.
struct NameOverrides(Vec<(String, String)>);

impl<'de> Deserialize<'de> for NameOverrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = NameOverrides;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of identifier renames")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry::<String, String>()? {
                    pairs.push(pair);
                }
                Ok(NameOverrides(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// Load a `{ fromName: toName }` names file, keeping the file's order.
pub fn load_name_overrides(path: &Path) -> Result<Vec<(String, String)>> {
    let NameOverrides(names) = read_structured(path)?;
    debug!(path = %path.display(), count = names.len(), "loaded name overrides");
    Ok(names)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocaleEntry {
    name: String,
    #[serde(default)]
    extends: Option<String>,
    #[serde(default)]
    tokens: BTreeMap<Token, String>,
}

/// Load a locales file. Definitions keep the file's order, which is the
/// order they are registered in.
pub fn load_locales(path: &Path) -> Result<Vec<(String, LocaleDefinition)>> {
    let entries: Vec<LocaleEntry> = read_structured(path)?;
    let definitions = entries
        .into_iter()
        .map(|entry| {
            if !i18n::is_conventional_locale_tag(&entry.name) {
                warn!(locale = %entry.name, "locale name is not an ISO 639-1 tag");
            }
            let definition = LocaleDefinition {
                extends: entry.extends,
                entries: entry.tokens.into_iter().collect(),
            };
            (entry.name, definition)
        })
        .collect::<Vec<_>>();
    debug!(path = %path.display(), count = definitions.len(), "loaded locale definitions");
    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::parse("YML"), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("a/names.json")), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path(Path::new("names")), None);
    }

    #[test]
    fn names_from_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let json = write(&dir, "names.json", r#"{"dibujar": "draw", "lado": "side"}"#);
        let yaml = write(&dir, "names.yaml", "dibujar: draw\nlado: side\n");
        let expected = vec![
            ("dibujar".to_string(), "draw".to_string()),
            ("lado".to_string(), "side".to_string()),
        ];
        assert_eq!(load_name_overrides(&json).unwrap(), expected);
        assert_eq!(load_name_overrides(&yaml).unwrap(), expected);
    }

    #[test]
    fn names_keep_file_order() {
        let dir = TempDir::new().unwrap();
        let json = write(&dir, "names.json", r#"{"zeta": "x", "alfa": "x", "medio": "m"}"#);
        let yaml = write(&dir, "names.yml", "zeta: x\nalfa: x\nmedio: m\n");
        let expected = vec![
            ("zeta".to_string(), "x".to_string()),
            ("alfa".to_string(), "x".to_string()),
            ("medio".to_string(), "m".to_string()),
        ];
        assert_eq!(load_name_overrides(&json).unwrap(), expected);
        assert_eq!(load_name_overrides(&yaml).unwrap(), expected);
    }

    #[test]
    fn names_must_be_a_map_of_strings() {
        let dir = TempDir::new().unwrap();
        let list = write(&dir, "names.json", r#"["a", "b"]"#);
        assert!(load_name_overrides(&list).is_err());
        let nested = write(&dir, "nested.yaml", "a:\n  b: c\n");
        assert!(load_name_overrides(&nested).is_err());
    }

    #[test]
    fn extensionless_file_falls_back_to_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "names", "a: b\n");
        assert_eq!(
            load_name_overrides(&path).unwrap(),
            vec![("a".to_string(), "b".to_string())]
        );
        let bad = write(&dir, "broken", "{ not: [valid");
        assert!(load_name_overrides(&bad).is_err());
    }

    #[test]
    fn locales_keep_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "locales.yaml",
            "- name: es-AR\n  extends: es\n  tokens:\n    GBS_COMMAND_DROP: Pone\n- name: es-UY\n  extends: es-AR\n",
        );
        let defs = load_locales(&path).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].0, "es-AR");
        assert_eq!(defs[0].1.extends.as_deref(), Some("es"));
        assert_eq!(defs[0].1.entries, vec![(Token::Drop, "Pone".to_string())]);
        assert_eq!(defs[1].0, "es-UY");
        assert!(defs[1].1.entries.is_empty());
    }

    #[test]
    fn unknown_token_names_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "locales.json",
            r#"[{"name": "xx", "tokens": {"GBS_NOT_A_TOKEN": "x"}}]"#,
        );
        assert!(load_locales(&path).is_err());
    }

    #[test]
    fn project_config_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "gbs-translate.yaml",
            "from: es\nto: en\nnames: names.json\nlang: pt\n",
        );
        let (path, config) = ProjectConfig::discover(dir.path()).unwrap().unwrap();
        assert!(path.ends_with("gbs-translate.yaml"));
        assert_eq!(config.from.as_deref(), Some("es"));
        assert_eq!(config.names, Some(dir.path().join("names.json")));
        assert_eq!(config.lang.as_deref(), Some("pt"));
        assert_eq!(config.locales, None);
    }

    #[test]
    fn project_config_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "gbs-translate.json", r#"{"form": "es"}"#);
        assert!(ProjectConfig::load(&path).is_err());
    }

    #[test]
    fn no_project_file_is_fine() {
        let dir = TempDir::new().unwrap();
        assert!(ProjectConfig::discover(dir.path()).unwrap().is_none());
    }
}
