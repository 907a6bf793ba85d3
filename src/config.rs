//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::export::DEFAULT_OUTPUT_DIR;

/// Default listen port for the trigger service.
pub const DEFAULT_PORT: u16 = 3000;

/// Command line configuration for commit-pages.
///
/// Read once at startup and never changed afterwards.
#[derive(Debug, Clone, Parser)]
#[command(name = "commit-pages", version, about, long_about = None)]
pub struct Config {
    /// Repository path
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Output directory, relative paths resolve against the repository
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Serve the export trigger over HTTP instead of exporting once
    #[arg(long)]
    pub serve: bool,

    /// Listen port for --serve
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Open the newest exported page in the browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if repository path does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.repo.exists() {
            bail!("Repository path does not exist: {}", self.repo.display());
        }

        Ok(())
    }

    /// Returns output directory, resolved against the repository path.
    pub fn output_dir(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.repo.join(&self.output)
        }
    }
}
