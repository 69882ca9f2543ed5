//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Build React or Vue icon component packages from SVG sources.
///
/// Reads `<source>/<category>/*.svg` for every configured category and
/// writes `<output>/<package>/<category>/` with CommonJS modules at the
/// category root and ES modules under `esm/`.
///
/// # Examples
///
/// ```bash
/// # Build the React package with default settings
/// iconpack react
///
/// # Custom directories, JSON report
/// iconpack vue --source assets/icons --output dist --format json
/// ```
#[derive(Parser, Debug)]
#[command(name = "iconpack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target package to build (react, vue)
    pub package: String,

    /// Directory containing one subdirectory of SVG files per category
    #[arg(long, value_name = "DIR", env = "ICONPACK_SOURCE_DIR")]
    pub source: Option<PathBuf>,

    /// Directory the package directory is created in
    #[arg(long, value_name = "DIR", env = "ICONPACK_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./iconpack.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", default_value = "pretty")]
    pub format: String,
}
