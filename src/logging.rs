// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log setup for the binary.
//!
//! Logs go to stderr so translated code written to stdout stays clean.
//! `RUST_LOG` is honoured; otherwise only warnings are shown, or debug
//! output for this crate with `--verbose`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "gbs_translate=warn";
const VERBOSE_DIRECTIVE: &str = "gbs_translate=debug";

pub fn filter(verbose: bool) -> Result<EnvFilter> {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    if verbose {
        Ok(base.add_directive(VERBOSE_DIRECTIVE.parse()?))
    } else {
        Ok(base)
    }
}

pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialising logging: {}", err))
}
