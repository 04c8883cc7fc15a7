// src/cli/validate.rs
use anyhow::{Result, bail};

use crate::cli::args::Cli;

/// Check every flag that clap cannot check on its own.
pub fn validate_cli(cli: &Cli) -> Result<()> {
    validate_wiki_base(&cli.wiki)?;
    validate_timeout(cli.timeout)
}

pub fn validate_wiki_base(base: &str) -> Result<()> {
    let b = base.trim();
    if !(b.starts_with("http://") || b.starts_with("https://")) {
        bail!("--wiki must be an http(s) URL, got: {base}");
    }
    if b.trim_end_matches('/').ends_with(':') {
        bail!("--wiki is missing a host: {base}");
    }
    Ok(())
}

pub fn validate_timeout(timeout: Option<u64>) -> Result<()> {
    if timeout == Some(0) {
        bail!("--timeout must be > 0.");
    }
    Ok(())
}
