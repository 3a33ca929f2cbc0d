// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch translation of files and directory trees.
//!
//! Directories are walked for Gobstones sources and mirrored under the
//! output directory. Files are translated in parallel; one [`Translator`]
//! is shared by every worker.

use crate::translator::{Operation, Translator};
use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extension of Gobstones source files.
pub const SOURCE_EXTENSION: &str = "gbs";

/// A file to translate and where it lands relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Expand inputs into source files. Plain files are taken as given;
/// directories contribute every `.gbs` file below them, hidden entries
/// excluded.
pub fn collect_sources(inputs: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();
    for input in inputs {
        if input.is_file() {
            let name = input
                .file_name()
                .ok_or_else(|| anyhow!("{} has no file name", input.display()))?;
            sources.push(SourceFile {
                path: input.clone(),
                relative: PathBuf::from(name),
            });
        } else if input.is_dir() {
            let walker = WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
            for entry in walker {
                let entry = entry.with_context(|| format!("walking {}", input.display()))?;
                let path = entry.path();
                if entry.file_type().is_file() && has_source_extension(path) {
                    let relative = path.strip_prefix(input).unwrap_or(path).to_path_buf();
                    sources.push(SourceFile {
                        path: path.to_path_buf(),
                        relative,
                    });
                }
            }
        } else {
            return Err(anyhow!("input not found: {}", input.display()));
        }
    }
    Ok(sources)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
        .unwrap_or(false)
}

/// Read a source file as UTF-8, falling back to Windows-1252. Returns
/// `None` for binary content.
pub fn read_source(path: &Path) -> Result<Option<String>> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if looks_binary(&raw) {
        return Ok(None);
    }
    match String::from_utf8(raw) {
        Ok(text) => Ok(Some(text)),
        Err(err) => {
            let raw = err.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&raw);
            debug!(path = %path.display(), "decoded as Windows-1252");
            Ok(Some(decoded.into_owned()))
        }
    }
}

/// Windows-1252 maps every byte, so text is told apart from binary by its
/// C0 control characters: only tab, LF, FF and CR occur in source code.
fn looks_binary(raw: &[u8]) -> bool {
    raw.iter()
        .any(|&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | 0x0c | b'\r'))
}

/// Run `operation` over every source, writing results under `out_dir`.
///
/// Configuration errors surface before any file is touched. Per-file read
/// problems are collected in [`BatchOutcome::skipped`] instead of aborting
/// the batch.
pub fn run(
    translator: &Translator,
    operation: Operation,
    use_names: bool,
    sources: &[SourceFile],
    out_dir: &Path,
) -> Result<BatchOutcome> {
    // An empty input exercises every precondition without scanning anything.
    operation.apply(translator, "", use_names)?;

    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let results: Vec<(PathBuf, Result<Option<PathBuf>>)> = sources
        .par_iter()
        .map(|source| {
            let result = translate_one(translator, operation, use_names, source, out_dir);
            (source.path.clone(), result)
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for (path, result) in results {
        match result {
            Ok(Some(written)) => outcome.written.push(written),
            Ok(None) => {
                warn!(path = %path.display(), "skipping non-text file");
                outcome
                    .skipped
                    .push((path, "binary content".to_string()));
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping file");
                outcome.skipped.push((path, format!("{:#}", err)));
            }
        }
    }
    Ok(outcome)
}

fn translate_one(
    translator: &Translator,
    operation: Operation,
    use_names: bool,
    source: &SourceFile,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    let Some(code) = read_source(&source.path)? else {
        return Ok(None);
    };
    let translated = operation.apply(translator, &code, use_names)?;
    let target = out_dir.join(&source.relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&target, translated).with_context(|| format!("writing {}", target.display()))?;
    debug!(from = %source.path.display(), to = %target.display(), op = operation.as_str(), "wrote");
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::TranslatorConfig;
    use tempfile::TempDir;

    #[test]
    fn collects_sources_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lib/.cache")).unwrap();
        fs::write(dir.path().join("main.gbs"), "program {}").unwrap();
        fs::write(dir.path().join("lib/util.GBS"), "").unwrap();
        fs::write(dir.path().join("lib/.cache/skip.gbs"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let sources = collect_sources(&[dir.path().to_path_buf()]).unwrap();
        let relative: Vec<PathBuf> = sources.iter().map(|s| s.relative.clone()).collect();
        assert_eq!(
            relative,
            vec![PathBuf::from("lib/util.GBS"), PathBuf::from("main.gbs")]
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(collect_sources(&[dir.path().join("nope.gbs")]).is_err());
    }

    #[test]
    fn latin1_sources_are_decoded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.gbs");
        // "Dirección" in Windows-1252.
        fs::write(&path, b"Direcci\xf3n").unwrap();
        assert_eq!(read_source(&path).unwrap().as_deref(), Some("Dirección"));
    }

    #[test]
    fn binary_sources_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("image.gbs");
        fs::write(&path, b"\x89PNG\x81\x00\xff\x8d").unwrap();
        assert_eq!(read_source(&path).unwrap(), None);

        let crlf = dir.path().join("crlf.gbs");
        fs::write(&crlf, b"Poner(Rojo)\r\n\tMover(Norte)\x0c\n").unwrap();
        assert!(read_source(&crlf).unwrap().is_some());
    }

    #[test]
    fn batch_skips_binary_files() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("a.gbs"), "Poner(Rojo)").unwrap();
        fs::write(input.path().join("b.gbs"), b"\x00\x01Poner\x02").unwrap();

        let translator = Translator::new(
            TranslatorConfig::new().with_source("es").with_destination("en"),
        )
        .unwrap();
        let sources = collect_sources(&[input.path().to_path_buf()]).unwrap();
        let outcome =
            run(&translator, Operation::Translate, false, &sources, output.path()).unwrap();

        assert_eq!(outcome.written, vec![output.path().join("a.gbs")]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].0, input.path().join("b.gbs"));
        assert!(!output.path().join("b.gbs").exists());
    }

    #[test]
    fn batch_mirrors_layout() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir_all(input.path().join("sub")).unwrap();
        fs::write(input.path().join("a.gbs"), "Poner(Rojo)").unwrap();
        fs::write(input.path().join("sub/b.gbs"), "Mover(Norte)").unwrap();

        let translator = Translator::new(
            TranslatorConfig::new().with_source("es").with_destination("en"),
        )
        .unwrap();
        let sources = collect_sources(&[input.path().to_path_buf()]).unwrap();
        let outcome =
            run(&translator, Operation::Translate, false, &sources, output.path()).unwrap();

        assert_eq!(outcome.written.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(
            fs::read_to_string(output.path().join("a.gbs")).unwrap(),
            "Drop(Red)"
        );
        assert_eq!(
            fs::read_to_string(output.path().join("sub/b.gbs")).unwrap(),
            "Move(North)"
        );
    }

    #[test]
    fn batch_fails_fast_on_configuration() {
        let output = TempDir::new().unwrap();
        let translator = Translator::new(TranslatorConfig::new().with_source("es")).unwrap();
        let err = run(&translator, Operation::Translate, false, &[], output.path()).unwrap_err();
        assert!(err.to_string().contains("destination"));
    }
}
