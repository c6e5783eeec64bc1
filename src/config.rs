//! Command line configuration.

use anyhow::{Result, bail};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::content::COMPANY;
use crate::nav::OutsideScope;

/// Command line configuration for Aalekhan.
#[derive(Debug, Clone, Parser)]
#[command(name = "aalekhan", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the site into an output directory
    Build(BuildArgs),
    /// Replay a JSON event script through a navigation controller
    Replay(ReplayArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Public URL of the page, used for the canonical link
    #[arg(long, default_value = COMPANY.site_url)]
    pub url: String,

    /// Copyright year shown in the footer (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Event script (JSON)
    pub script: PathBuf,

    /// Controller to drive
    #[arg(long, value_enum, default_value_t = ScopeArg::Page)]
    pub scope: ScopeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Shared header: containment against the header root
    Header,
    /// Home page: containment against the menu and dropdown regions
    Page,
}

impl From<ScopeArg> for OutsideScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Header => OutsideScope::HeaderRoot,
            ScopeArg::Page => OutsideScope::Regions,
        }
    }
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
    /// Returns error if the selected command's arguments are invalid.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Build(args) => args.validate(),
            Command::Replay(args) => args.validate(),
        }
    }
}

impl BuildArgs {
    /// Validates build arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is not absolute http(s), the year is out of
    /// range, or the output path is an existing file.
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            bail!("Page URL must be absolute http(s): {}", self.url);
        }

        if let Some(year) = self.year
            && !(2000..=9999).contains(&year)
        {
            bail!("Year out of range: {}", year);
        }

        if self.output.is_file() {
            bail!("Output path is a file: {}", self.output.display());
        }

        Ok(())
    }

    /// Returns the footer year from configuration or the local clock.
    pub fn resolved_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

impl ReplayArgs {
    /// Validates replay arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the script path does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.script.exists() {
            bail!("Replay script does not exist: {}", self.script.display());
        }

        Ok(())
    }
}
