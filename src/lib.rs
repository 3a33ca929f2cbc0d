// SPDX-License-Identifier: PMPL-1.0-or-later

//! gbs-translate: word-level translation of Gobstones code between
//! keyword localizations.
//!
//! Source text is read as alternating word and separator spans. Words are
//! swapped through a locale dictionary; separators, and so all layout and
//! punctuation, are copied through untouched.
//!
//! PIPELINE:
//! 1. **Locale registry**: built-in and user locale definitions, resolved
//!    through `extends` into flat dictionaries of decorated tokens.
//! 2. **Encode**: source-locale words to abstract tokens (`$GBS_COMMAND_DROP$`).
//! 3. **Decode**: abstract tokens to destination-locale words.
//!
//! ```
//! use gbs_translate::{Translator, TranslatorConfig};
//!
//! let translator = Translator::new(
//!     TranslatorConfig::new().with_source("es").with_destination("en"),
//! )?;
//! assert_eq!(
//!     translator.translate("program {Poner( Rojo )}", false)?,
//!     "program {Drop( Red )}"
//! );
//! # Ok::<(), gbs_translate::TranslateError>(())
//! ```

pub mod batch;
pub mod bimap;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod logging;
pub mod scanner;
pub mod token;
pub mod translator;

pub use error::TranslateError;
pub use translator::{Operation, Translator, TranslatorConfig};
