// Copyright (c) 2024 Botho Foundation

//! Logging setup.
//!
//! Logs go to stderr so that rendered tables on stdout stay clean when piped.
//! `RUST_LOG` takes precedence over the `--verbose` flag.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the global tracing subscriber.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(verbose))
            .context("Failed to build log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
