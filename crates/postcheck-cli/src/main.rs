mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, search, validate, Context};
use crate::error::{exit_code_for, invalid_input, report_error};
use postcheck_config as config;
use postcheck_config::AppConfig;
use postcheck_lookup::{FileLocalitySource, HttpLocalitySource, LocalitySource};

#[derive(Debug, Parser)]
#[command(
    name = "postcheck",
    version,
    about = "Validate Australian suburb, postcode and state"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Answer lookups from a JSON file instead of the remote API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check an address and list corrections when it does not match
    Validate(validate::ValidateArgs),
    /// Show the normalized localities the lookup returns for a query
    Search(search::SearchArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        fixture,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let source = build_source(fixture, &app_config)?;
            debug!(source = source.source_name(), "lookup source selected");

            let ctx = Context {
                source: source.as_ref(),
                json,
            };

            match command {
                Command::Validate(args) => validate::validate(&ctx, args),
                Command::Search(args) => search::search(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before source initialization")
                }
            }
        }
    }
}

fn build_source(
    fixture: Option<PathBuf>,
    app_config: &AppConfig,
) -> Result<Box<dyn LocalitySource>> {
    if let Some(path) = fixture.or_else(|| app_config.fixture.clone()) {
        return Ok(Box::new(FileLocalitySource::new(path)));
    }

    let api = &app_config.api;
    let base_url = api.base_url.as_deref().ok_or_else(|| {
        invalid_input(format!(
            "no lookup configured: set api.base_url or {}, or pass --fixture",
            config::ENV_API_BASE_URL
        ))
    })?;
    let source = HttpLocalitySource::new(
        base_url,
        api.token.clone(),
        api.user_agent.as_deref(),
        Some(api.timeout_secs),
    )
    .with_context(|| "build lookup client")?;
    Ok(Box::new(source))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
