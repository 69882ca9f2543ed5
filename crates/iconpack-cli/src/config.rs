//! Build configuration.
//!
//! Settings come from an optional TOML file and are overridden by command
//! line flags.
//!
//! # Examples
//!
//! ```toml
//! source_dir = "optimized/icons"
//! output_dir = "."
//! categories = ["files", "maps"]
//! ```

use anyhow::{Context, Result};
use iconpack_core::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "iconpack.toml";

/// Build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing one subdirectory per category
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory the package directory is created in
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Categories to build, in order
    #[serde(default = "Category::defaults")]
    pub categories: Vec<Category>,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("optimized/icons")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            categories: Category::defaults(),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, `./iconpack.toml` is used
    /// when present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("Config file not found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the category list is empty or has duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            anyhow::bail!("categories must not be empty");
        }

        let mut seen = HashSet::with_capacity(self.categories.len());
        for category in &self.categories {
            if !seen.insert(category) {
                anyhow::bail!("category '{category}' is listed more than once");
            }
        }

        Ok(())
    }

    /// Applies command line overrides.
    #[must_use]
    pub fn with_overrides(mut self, source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source_dir = source;
        }
        if let Some(output) = output {
            self.output_dir = output;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_dir, PathBuf::from("optimized/icons"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.categories.len(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("categories = [\"files\", \"maps\"]").unwrap();
        assert_eq!(config.source_dir, PathBuf::from("optimized/icons"));
        let names: Vec<_> = config.categories.iter().map(Category::as_str).collect();
        assert_eq!(names, vec!["files", "maps"]);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "source_dir = \"assets/svg\"\noutput_dir = \"dist\"\ncategories = [\"weather\"]\n",
        )
        .unwrap();
        assert_eq!(config.source_dir, PathBuf::from("assets/svg"));
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_empty_categories() {
        assert!(Config::parse("categories = []").is_err());
    }

    #[test]
    fn test_rejects_duplicate_categories() {
        let err = Config::parse("categories = [\"maps\", \"maps\"]").unwrap_err();
        assert!(format!("{err:#}").contains("more than once"));
    }

    #[test]
    fn test_rejects_path_like_categories() {
        assert!(Config::parse("categories = [\"../etc\"]").is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(Config::parse("source = \"icons\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some("src".into()), None);
        assert_eq!(config.source_dir, PathBuf::from("src"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("build.toml");
        fs::write(&path, "output_dir = \"out\"").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(Some(&temp.path().join("missing.toml"))).is_err());
    }
}
