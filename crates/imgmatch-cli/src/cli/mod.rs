//! CLI for imgmatch: pair files in the current directory with image paths
//! quoted in a source document.

use anyhow::{Context, Result};
use clap::Parser;
use imgmatch_core::config::{self, MatchConfig};
use imgmatch_core::{report, run};
use std::io;
use std::path::{Path, PathBuf};

/// Print (file, image path) pairs for files in the current directory that a
/// source document references by basename.
#[derive(Debug, Parser)]
#[command(name = "imgmatch")]
#[command(
    about = "Pair local image files with \"/images/...\" paths quoted in a source document",
    long_about = None
)]
pub struct Cli {
    /// Source document to scan for quoted image paths (overrides `source_document` in config).
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Prefix a quoted string must start with (overrides `path_prefix` in config).
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Read configuration from this file instead of the default XDG location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let (source, cfg) = cli.resolve(cfg)?;
        let dir = std::env::current_dir().context("determine current directory")?;
        run_match(&source, &dir, &cfg)
    }

    /// Apply command-line overrides on top of the loaded config and pick the
    /// source document.
    pub fn resolve(self, mut cfg: MatchConfig) -> Result<(PathBuf, MatchConfig)> {
        if let Some(prefix) = self.prefix {
            cfg.path_prefix = prefix;
        }
        cfg.validate()?;
        let source = self
            .source
            .or_else(|| cfg.source_document.clone())
            .context("no source document: pass --source or set source_document in config.toml")?;
        Ok((source, cfg))
    }
}

/// Match and print. Nothing is printed unless the whole run succeeds.
fn run_match(source: &Path, dir: &Path, cfg: &MatchConfig) -> Result<()> {
    let pairs = run(source, dir, cfg)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_pairs(&mut out, &pairs).context("write matched pairs")?;
    Ok(())
}

#[cfg(test)]
mod tests;
