// SPDX-License-Identifier: PMPL-1.0-or-later

//! gbs-translate: translate Gobstones code between keyword localizations
//!
//! Reads source from files, directories or stdin and rewrites every known
//! keyword, primitive and literal from one locale to another (or to and
//! from the locale-neutral abstract form), leaving layout untouched.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use gbs_translate::config::{self, ProjectConfig};
use gbs_translate::i18n::{self, t, Lang};
use gbs_translate::locale::check_locale;
use gbs_translate::{batch, logging, Operation, TranslateError, Translator, TranslatorConfig};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "gbs-translate")]
#[command(version)]
#[command(about = "Translate Gobstones code between keyword localizations")]
#[command(long_about = None)]
struct Cli {
    /// Language for the tool's own messages (en, es, pt)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project configuration file (default: ./gbs-translate.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate code from one locale to another
    Translate(RunArgs),

    /// Rewrite code into locale-neutral abstract tokens
    Encode(RunArgs),

    /// Rewrite abstract tokens into a locale
    Decode(RunArgs),

    /// List registered locales
    Locales(LocaleArgs),

    /// Report token coverage of every registered locale
    Check(LocaleArgs),
}

#[derive(Args, Clone, Default)]
struct LocaleArgs {
    /// Extra locale definitions (JSON or YAML list)
    #[arg(long, value_name = "FILE")]
    locales: Option<PathBuf>,

    /// Abstract token prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Abstract token suffix
    #[arg(long)]
    suffix: Option<String>,
}

#[derive(Args, Clone)]
struct RunArgs {
    /// Source locale
    #[arg(short, long)]
    from: Option<String>,

    /// Destination locale
    #[arg(short, long)]
    to: Option<String>,

    /// Identifier renames, `{ fromName: toName }` (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    names: Option<PathBuf>,

    /// Apply the identifier renames from --names
    #[arg(long)]
    use_names: bool,

    #[command(flatten)]
    locale: LocaleArgs,

    /// Output file, or output directory for several inputs
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Files or directories to translate (default: stdin)
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("{:#}", err);
    }

    let project = match load_project(cli.config.as_deref()) {
        Ok(project) => project,
        Err(err) => {
            report_error(message_lang(cli.lang.as_deref(), None), &err);
            return ExitCode::FAILURE;
        }
    };
    let lang = message_lang(cli.lang.as_deref(), project.lang.as_deref());

    let result = match cli.command {
        Commands::Translate(args) => run_operation(Operation::Translate, args, &project, lang),
        Commands::Encode(args) => run_operation(Operation::Encode, args, &project, lang),
        Commands::Decode(args) => run_operation(Operation::Decode, args, &project, lang),
        Commands::Locales(args) => list_locales(&args, &project, lang),
        Commands::Check(args) => check_locales(&args, &project, lang),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(lang, &err);
            ExitCode::FAILURE
        }
    }
}

fn load_project(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => ProjectConfig::load(path),
        None => Ok(ProjectConfig::discover(Path::new("."))?
            .map(|(path, config)| {
                debug!(path = %path.display(), "using project config");
                config
            })
            .unwrap_or_default()),
    }
}

/// `--lang`, then the project file, then `$LANG`, then English.
fn message_lang(flag: Option<&str>, project: Option<&str>) -> Lang {
    flag.or(project)
        .map(str::to_string)
        .or_else(|| std::env::var("LANG").ok())
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

fn report_error(lang: Lang, err: &anyhow::Error) {
    let message = match err.downcast_ref::<TranslateError>() {
        Some(translate_err) => i18n::describe_error(lang, translate_err),
        None => format!("{:#}", err),
    };
    eprintln!("{}: {}", t(lang, "cli.error").red().bold(), message);
}

fn translator_config(locale: &LocaleArgs, project: &ProjectConfig) -> Result<TranslatorConfig> {
    let mut config = TranslatorConfig::new();
    if let Some(path) = locale.locales.as_ref().or(project.locales.as_ref()) {
        config.additional_locales = config::load_locales(path)?;
    }
    let prefix = locale.prefix.as_ref().or(project.prefix.as_ref());
    let suffix = locale.suffix.as_ref().or(project.suffix.as_ref());
    if let Some(prefix) = prefix {
        config.token_prefix = prefix.clone();
    }
    if let Some(suffix) = suffix {
        config.token_suffix = suffix.clone();
    }
    Ok(config)
}

fn build_translator(args: &RunArgs, project: &ProjectConfig) -> Result<Translator> {
    let mut config = translator_config(&args.locale, project)?;
    config.source_locale = args.from.clone().or_else(|| project.from.clone());
    config.destination_locale = args.to.clone().or_else(|| project.to.clone());
    if let Some(path) = args.names.as_ref().or(project.names.as_ref()) {
        config.name_overrides = Some(config::load_name_overrides(path)?);
    }
    Ok(Translator::new(config)?)
}

fn run_operation(
    operation: Operation,
    args: RunArgs,
    project: &ProjectConfig,
    lang: Lang,
) -> Result<()> {
    let translator = build_translator(&args, project)?;
    let use_names = args.use_names || project.use_names.unwrap_or(false);

    let single_file = match args.inputs.as_slice() {
        [] => None,
        [input] if input.is_file() && !args.output.as_deref().is_some_and(Path::is_dir) => {
            Some(input.clone())
        }
        _ => return run_batch(&translator, operation, use_names, &args, lang),
    };

    let code = match &single_file {
        Some(path) => batch::read_source(path)?
            .ok_or_else(|| anyhow!("{} is not a text file", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("reading stdin")?,
    };
    info!(
        op = operation.as_str(),
        from = translator.source_locale().unwrap_or("-"),
        to = translator.destination_locale().unwrap_or("-"),
        bytes = code.len(),
        "translating"
    );
    let translated = operation.apply(&translator, &code, use_names)?;

    match &args.output {
        Some(path) => {
            fs::write(path, translated).with_context(|| format!("writing {}", path.display()))?
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(translated.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn run_batch(
    translator: &Translator,
    operation: Operation,
    use_names: bool,
    args: &RunArgs,
    lang: Lang,
) -> Result<()> {
    let out_dir = args
        .output
        .as_ref()
        .ok_or_else(|| anyhow!("several inputs need --output <DIR>"))?;
    let sources = batch::collect_sources(&args.inputs)?;
    info!(files = sources.len(), op = operation.as_str(), "batch translating");
    let outcome = batch::run(translator, operation, use_names, &sources, out_dir)?;

    let count = outcome.written.len().to_string();
    let dir = out_dir.display().to_string();
    println!(
        "{}",
        i18n::fill(t(lang, "batch.summary"), &[("count", count.as_str()), ("dir", dir.as_str())])
    );
    if !outcome.skipped.is_empty() {
        let skipped = outcome.skipped.len().to_string();
        eprintln!(
            "{}: {}",
            t(lang, "cli.warning").yellow().bold(),
            i18n::fill(t(lang, "batch.skipped"), &[("count", skipped.as_str())])
        );
        for (path, reason) in &outcome.skipped {
            eprintln!("  - {} ({})", path.display(), reason);
        }
    }
    Ok(())
}

fn list_locales(args: &LocaleArgs, project: &ProjectConfig, lang: Lang) -> Result<()> {
    let translator = Translator::new(translator_config(args, project)?)?;
    let registry = translator.registry();

    println!("{}", t(lang, "locales.title").bold().cyan());
    for locale in registry.iter() {
        let extends = locale
            .extends
            .as_ref()
            .map(|base| format!("  ({} {})", t(lang, "locales.extends"), base))
            .unwrap_or_default();
        println!(
            "  {:8} {:>4} {}{}",
            locale.name.bold(),
            locale.dictionary.len(),
            t(lang, "locales.entries"),
            extends
        );
    }
    for name in registry.names().filter(|n| !i18n::is_conventional_locale_tag(n)) {
        eprintln!(
            "{}: {}",
            t(lang, "cli.warning").yellow().bold(),
            i18n::fill(t(lang, "warn.unconventional_locale"), &[("name", name)])
        );
    }
    Ok(())
}

fn check_locales(args: &LocaleArgs, project: &ProjectConfig, lang: Lang) -> Result<()> {
    let translator = Translator::new(translator_config(args, project)?)?;
    let registry = translator.registry();

    println!("{}", t(lang, "check.title").bold().cyan());
    let mut gaps = 0;
    for locale in registry.iter() {
        let report = check_locale(locale, registry.prefix(), registry.suffix());
        if report.is_complete() {
            println!("  {:8} {}", report.locale.bold(), t(lang, "check.complete").green());
        } else {
            gaps += 1;
            let count = report.missing.len().to_string();
            println!(
                "  {:8} {}",
                report.locale.bold(),
                i18n::fill(t(lang, "check.missing"), &[("count", count.as_str())]).yellow()
            );
            for token in &report.missing {
                println!("           - {}", token);
            }
        }
        for (spelling, tokens) in &report.shared_spellings {
            let tokens = tokens.join(", ");
            println!(
                "           {}",
                i18n::fill(
                    t(lang, "check.shared"),
                    &[("spelling", spelling.as_str()), ("tokens", tokens.as_str())]
                )
                .yellow()
            );
        }
    }

    if gaps > 0 {
        Err(anyhow!("{} locale(s) do not cover every token", gaps))
    } else {
        Ok(())
    }
}
