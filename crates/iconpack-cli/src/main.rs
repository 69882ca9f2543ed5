//! iconpack command-line entry point.
//!
//! # Examples
//!
//! ```bash
//! # Build the React package from optimized/icons into ./react
//! iconpack react
//!
//! # Build the Vue package with debug logging
//! iconpack vue --verbose
//! ```

use clap::Parser;
use iconpack_cli::Cli;
use iconpack_cli::runner::{execute, init_logging};
use iconpack_core::cli::ExitCode;

#[tokio::main]
async fn main() {
    // Usage errors exit with code 2 before any work
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{e:#}");
        std::process::exit(ExitCode::ERROR.as_i32());
    }

    let exit_code = match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::ERROR
        }
    };

    std::process::exit(exit_code.as_i32());
}
