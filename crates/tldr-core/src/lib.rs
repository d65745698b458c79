mod cache;
mod category;
mod cli;
mod color;
mod config;
mod error;
mod page;
mod render;
mod resolver;
mod util;

use std::fmt;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use cache::{CacheManager, Git, Vcs};
pub use category::{Category, Platform, Source};
use cli::{CacheAction, Cli, Command, LogLevel};
pub use color::Color;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use page::{Example, Page};
pub use render::render;
pub use resolver::{Fetch, HttpFetcher, Resolver};
pub use util::{page_name, validate_page_name};

/// A failed CLI run: the text for stderr and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        // Usage errors carry clap's exit code; everything else is reported
        // on stderr without failing the process.
        let exit_code = error
            .downcast_ref::<clap::Error>()
            .map(|e| e.exit_code())
            .unwrap_or(0);
        Self {
            message: error.to_string().trim_end().to_string(),
            exit_code,
        }
    }
}

/// Run the CLI with the given arguments and return the output as a string.
///
/// # Arguments
/// * `args` - Command line arguments (excluding program name)
///
/// # Returns
/// * `Ok(String)` - Successful output (stdout)
/// * `Err(CliError)` - Error message (stderr) and exit code
pub fn run_cli(args: &[&str]) -> std::result::Result<String, CliError> {
    run_cli_impl(args).map_err(CliError::from)
}

fn run_cli_impl(args: &[&str]) -> anyhow::Result<String> {
    let args = cli::insert_default_command(args);

    let parsed_args = match Cli::try_parse_from(std::iter::once("tldr").chain(args)) {
        Ok(args) => args,
        Err(e) => {
            // Handle --help and --version as successful outputs
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                return Ok(e.to_string());
            }
            return Err(e.into());
        }
    };

    init_tracing(parsed_args.log_level);
    colored::control::set_override(parsed_args.color.is_active());

    let mut config = match parsed_args.cache_dir {
        Some(dir) => Config::with_cache_root(dir),
        None => Config::new()?,
    };
    if let Some(platform) = parsed_args.platform {
        config = config.platform(platform);
    }
    if let Some(base_url) = parsed_args.base_url {
        config = config.base_url(base_url);
    }

    match parsed_args.command {
        Command::View { words } => {
            let fetcher = HttpFetcher::new(&config);
            run_view(&config, &fetcher, &words)
        }
        Command::Cache { action } => run_cache(&config, &Git, action),
    }
}

fn run_view(config: &Config, fetcher: &dyn Fetch, words: &[String]) -> anyhow::Result<String> {
    let name = page_name(words);
    let page = Resolver::new(config, fetcher).resolve(&name)?;

    let mut output = render(&page);
    output.push('\n');
    Ok(output)
}

fn run_cache(config: &Config, vcs: &dyn Vcs, action: CacheAction) -> anyhow::Result<String> {
    let manager = CacheManager::new(config, vcs);
    let message = match action {
        CacheAction::Init => {
            manager.init()?;
            "Successfully initialized cache"
        }
        CacheAction::Update => {
            manager.update()?;
            "Cache successfully updated"
        }
        CacheAction::Delete => {
            manager.delete()?;
            "Cache successfully deleted"
        }
    };
    Ok(format!("{message}\n"))
}

/// Send diagnostics to stderr; stdout only ever carries the page.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    // Already installed when run_cli is called more than once in a process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
