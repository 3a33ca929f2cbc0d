// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project files, user locales and batch runs wired together the way the
//! CLI does it.

use gbs_translate::batch;
use gbs_translate::config::{self, ProjectConfig};
use gbs_translate::i18n::{self, Lang};
use gbs_translate::locale::check_locale;
use gbs_translate::{Operation, TranslateError, Translator, TranslatorConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn translator_from_project(project: &ProjectConfig) -> Translator {
    let mut config = TranslatorConfig::new();
    config.source_locale = project.from.clone();
    config.destination_locale = project.to.clone();
    if let Some(path) = &project.locales {
        config.additional_locales = config::load_locales(path).unwrap();
    }
    if let Some(path) = &project.names {
        config.name_overrides = Some(config::load_name_overrides(path).unwrap());
    }
    Translator::new(config).unwrap()
}

#[test]
fn project_with_user_locale_and_names() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "gbs-translate.yaml",
        "from: es-AR\nto: en\nnames: cfg/names.yaml\nlocales: cfg/locales.json\nuse_names: true\n",
    );
    write(dir.path(), "cfg/names.yaml", "DibujarCuadrado: DrawSquare\n");
    write(
        dir.path(),
        "cfg/locales.json",
        r#"[{"name": "es-AR", "extends": "es", "tokens": {"GBS_COMMAND_DROP": "Poné"}}]"#,
    );

    let (_, project) = ProjectConfig::discover(dir.path()).unwrap().unwrap();
    let translator = translator_from_project(&project);
    let use_names = project.use_names.unwrap_or(false);

    assert_eq!(
        translator
            .translate("procedure DibujarCuadrado() { Poné(Rojo) }", use_names)
            .unwrap(),
        "procedure DrawSquare() { Drop(Red) }"
    );
    // The base spelling is overridden, not kept alongside.
    assert_eq!(translator.translate("Poner", false).unwrap(), "Poner");

    let registry = translator.registry();
    let es_ar = registry.get("es-AR").unwrap();
    assert_eq!(es_ar.extends.as_deref(), Some("es"));
    assert!(check_locale(es_ar, registry.prefix(), registry.suffix()).is_complete());
}

#[test]
fn batch_encode_then_decode_restores_tree() {
    let input = TempDir::new().unwrap();
    let encoded = TempDir::new().unwrap();
    let decoded = TempDir::new().unwrap();
    let main = "program {\r\n  Poner(Rojo)\r\n  MiProc(Norte)\r\n}\r\n";
    let lib = "procedure MiProc(dir) {\n  repeat(3) { Mover(dir) }\n}\n";
    write(input.path(), "main.gbs", main);
    write(input.path(), "lib/proc.gbs", lib);
    write(input.path(), "README.md", "Poner");

    let translator = Translator::new(
        TranslatorConfig::new().with_source("es").with_destination("es"),
    )
    .unwrap();
    let sources = batch::collect_sources(&[input.path().to_path_buf()]).unwrap();
    assert_eq!(sources.len(), 2);

    let outcome = batch::run(&translator, Operation::Encode, false, &sources, encoded.path()).unwrap();
    assert_eq!(outcome.written.len(), 2);
    let abstract_main = fs::read_to_string(encoded.path().join("main.gbs")).unwrap();
    assert!(abstract_main.contains("$GBS_COMMAND_DROP$($GBS_COLOR_RED$)"));
    assert!(abstract_main.contains("MiProc($GBS_DIRECTION_NORTH$)\r\n"));
    assert!(!encoded.path().join("README.md").exists());

    let abstract_sources = batch::collect_sources(&[encoded.path().to_path_buf()]).unwrap();
    batch::run(&translator, Operation::Decode, false, &abstract_sources, decoded.path()).unwrap();
    assert_eq!(fs::read_to_string(decoded.path().join("main.gbs")).unwrap(), main);
    assert_eq!(fs::read_to_string(decoded.path().join("lib/proc.gbs")).unwrap(), lib);
}

#[test]
fn batch_rejects_missing_names_before_writing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "a.gbs", "Poner(Rojo)");
    let out_dir = output.path().join("out");

    let translator = Translator::new(
        TranslatorConfig::new().with_source("es").with_destination("en"),
    )
    .unwrap();
    let sources = batch::collect_sources(&[input.path().to_path_buf()]).unwrap();
    let err = batch::run(&translator, Operation::Translate, true, &sources, &out_dir).unwrap_err();

    assert_eq!(
        err.downcast_ref::<TranslateError>(),
        Some(&TranslateError::NoNameOverridesConfigured)
    );
    assert!(!out_dir.exists());
}

#[test]
fn configuration_errors_are_localized() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "locales.yaml",
        "- name: es-MX\n  extends: es-ES\n",
    );
    let additional = config::load_locales(&dir.path().join("locales.yaml")).unwrap();
    let mut config = TranslatorConfig::new();
    config.additional_locales = additional;
    let err = Translator::new(config).unwrap_err();

    let en = i18n::describe_error(Lang::En, &err);
    let es = i18n::describe_error(Lang::Es, &err);
    assert!(en.contains("es-ES") && en.contains("es-MX"), "{}", en);
    assert!(es.contains("es-ES") && es.contains("es-MX"), "{}", es);
    assert_ne!(en, es);
}
