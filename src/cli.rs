use clap::builder::TypedValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use spdx_url_resolver::application::use_cases::DEFAULT_CONCURRENCY;

/// Infer SPDX licenses from package license URLs
#[derive(Parser, Debug)]
#[command(name = "spdx-url-resolver")]
#[command(version)]
#[command(
    about = "Infer SPDX licenses from package license URLs",
    long_about = "Resolves license URLs (or the URLs listed in a package file) to SPDX \
                  licenses and prints one tab-separated line per input: \
                  input, SPDX id, license name, outcome."
)]
pub struct Args {
    /// License or project URLs to resolve
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// JSON file listing packages: [{"name", "version"?, "license_url"?, "project_url"?}]
    #[arg(long, value_name = "FILE", conflicts_with = "urls")]
    pub packages: Option<PathBuf>,

    /// Path to a config file (defaults to ./spdx-url-resolver.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Download the current SPDX license list before resolving
    #[arg(long)]
    pub refresh: bool,

    /// Number of packages resolved at once
    #[arg(
        long,
        default_value_t = DEFAULT_CONCURRENCY,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub concurrency: usize,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
