//! Package build orchestration.
//!
//! A build:
//! 1. Resolves the framework for the package (before touching the disk)
//! 2. Removes `<output>/<package>/<category>` for every category
//! 3. Scans, generates and writes every (category, format) pair concurrently,
//!    each with its `package.json` manifest
//!
//! The first failing task aborts the build; tasks still running are
//! cancelled when the task set is dropped.

use crate::config::Config;
use anyhow::{Context, Result};
use iconpack_codegen::{Framework, IconGenerator, PackageManifest};
use iconpack_core::{Category, ModuleFormat, PackageName};
use iconpack_files::{clear_dir, ensure_write_json, export_generated, scan_category};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::info;

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Package that was built
    pub package: String,
    /// Package output directory
    pub output_dir: String,
    /// Icon counts per category, in build order
    pub categories: Vec<CategoryReport>,
    /// Total number of files written
    pub files_written: usize,
    /// Wall-clock duration in milliseconds
    pub elapsed_ms: u64,
}

impl BuildReport {
    /// Total number of icons across all categories.
    #[must_use]
    pub fn icon_count(&self) -> usize {
        self.categories.iter().map(|c| c.icons).sum()
    }
}

/// Per-category build result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Category name
    pub category: String,
    /// Number of icons built
    pub icons: usize,
}

/// Result of one (category, format) task.
struct TaskOutput {
    category: Category,
    icons: usize,
    files: usize,
}

/// Builds the icon package for `package`.
///
/// # Errors
///
/// Returns an error if:
/// - No transformer exists for the package (nothing is written)
/// - Clearing previous output fails
/// - Any category fails to scan, generate or write
///
/// # Examples
///
/// ```no_run
/// use iconpack_cli::build::build;
/// use iconpack_cli::config::Config;
/// use iconpack_core::PackageName;
///
/// # async fn example() -> anyhow::Result<()> {
/// let report = build(&PackageName::new("react"), &Config::default()).await?;
/// println!("{} icons", report.icon_count());
/// # Ok(())
/// # }
/// ```
pub async fn build(package: &PackageName, config: &Config) -> Result<BuildReport> {
    let started = Instant::now();

    let framework = Framework::for_package(package)
        .with_context(|| format!("cannot build package '{package}'"))?;
    let generator = Arc::new(
        IconGenerator::new(framework).context("failed to initialize component generator")?,
    );

    info!("Building {package} package...");

    let package_dir = config.output_dir.join(package.as_str());
    for category in &config.categories {
        let dir = package_dir.join(category.as_str());
        clear_dir(&dir)
            .await
            .with_context(|| format!("failed to clear {}", dir.display()))?;
    }

    let source_dir = Arc::new(config.source_dir.clone());
    let mut tasks = JoinSet::new();
    for category in &config.categories {
        for format in ModuleFormat::ALL {
            let generator = Arc::clone(&generator);
            let source_dir = Arc::clone(&source_dir);
            let category_dir = package_dir.join(category.as_str());
            let category = category.clone();

            tasks.spawn(async move {
                build_variant(&generator, &source_dir, &category_dir, category, format).await
            });
        }
    }

    let mut icon_counts: HashMap<Category, usize> = HashMap::new();
    let mut files_written = 0;
    while let Some(joined) = tasks.join_next().await {
        let output = joined.context("build task panicked")??;
        files_written += output.files;
        icon_counts.insert(output.category, output.icons);
    }

    let categories = config
        .categories
        .iter()
        .map(|category| CategoryReport {
            category: category.to_string(),
            icons: icon_counts.get(category).copied().unwrap_or_default(),
        })
        .collect();

    let report = BuildReport {
        package: package.to_string(),
        output_dir: package_dir.display().to_string(),
        categories,
        files_written,
        elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    };

    info!("Finished building {package} package.");

    Ok(report)
}

/// Builds one module format of one category.
async fn build_variant(
    generator: &IconGenerator<'_>,
    source_dir: &Path,
    category_dir: &Path,
    category: Category,
    format: ModuleFormat,
) -> Result<TaskOutput> {
    let icons = scan_category(source_dir, &category)
        .await
        .with_context(|| format!("failed to scan category '{category}'"))?;

    let code = generator
        .generate_category(&icons, format)
        .with_context(|| format!("failed to generate {category} ({format})"))?;

    let target: PathBuf = match format.subdirectory() {
        Some(subdir) => category_dir.join(subdir),
        None => category_dir.to_path_buf(),
    };
    let files = export_generated(&code, &target)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;

    let manifest_path = target.join("package.json");
    ensure_write_json(&manifest_path, &PackageManifest::for_format(format))
        .await
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    info!("Built {category} ({format}): {} icons", icons.len());

    Ok(TaskOutput {
        category,
        icons: icons.len(),
        files: files + 1,
    })
}
