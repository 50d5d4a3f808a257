//! hello CLI - binary entry point.
//!
//! Takes no arguments and writes three lines to stdout:
//!
//! ```text
//! Hello, world.             fixed greeting
//! Hello, Go!                reverse_runes("!oG ,olleH")
//! Hello, world.             QuoteSource::hello()
//! ```
//!
//! Logs go to stderr only, filtered by `HELLO_LOG` (default `warn`), so stdout
//! always carries exactly those three lines. The process exits 0 even when
//! stdout cannot be written.

mod greeting;

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hello_config::HelloConfig;
use hello_quote::Quotes;

const LOG_ENV: &str = "HELLO_LOG";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::try_new("error").expect("error filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn quotes_from_config() -> Quotes {
    // A broken config file is already logged by the loader; fall back to defaults.
    let config = HelloConfig::load().ok().flatten();
    let language = config
        .as_ref()
        .and_then(HelloConfig::language)
        .unwrap_or_default();
    tracing::debug!(
        tag = %language,
        name = language.display_name(),
        "Selected greeting language"
    );
    Quotes::new(language)
}

fn run(quotes: &Quotes) -> Result<()> {
    let mut out = io::stdout().lock();
    greeting::write_greeting(&mut out, quotes).context("writing to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn main() {
    init_tracing();

    let quotes = quotes_from_config();

    if let Err(err) = run(&quotes) {
        tracing::error!("Failed to write greeting: {err:#}");
    }
}
