//! Command execution and logging setup.

use anyhow::{Context, Result};
use iconpack_core::PackageName;
use iconpack_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::build::build;
use crate::cli::Cli;
use crate::config::Config;
use crate::formatters::format_report;

/// Initializes logging.
///
/// `--verbose` forces the debug level; otherwise `RUST_LOG` is honored and
/// defaults to `info`. Logs go to stderr so reports on stdout stay clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Runs a build for parsed command line arguments and prints the report.
///
/// # Errors
///
/// Returns an error if the output format or configuration is invalid, or
/// the build fails.
pub async fn execute(cli: Cli) -> Result<ExitCode> {
    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.source, cli.output);
    let package = PackageName::new(cli.package);

    let report = build(&package, &config).await?;

    let formatted = format_report(&report, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
