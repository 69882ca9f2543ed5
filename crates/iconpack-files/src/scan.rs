//! Icon source scanning.

use iconpack_core::{Category, Error, IconAsset, Result};
use std::collections::HashMap;
use std::path::Path;

/// Maximum accepted size of a single SVG file (1 MiB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Lists and reads the icons of one category.
///
/// Reads `<source_root>/<category>/*.svg` (non-recursive). Directories and
/// files without an `.svg` extension are skipped. Icons are returned sorted
/// by file name.
///
/// # Errors
///
/// Returns error if:
/// - The category directory cannot be read
/// - A file exceeds [`MAX_FILE_SIZE`] or is not valid UTF-8
/// - A file name cannot be turned into a component name
/// - Two files map to the same component name
///
/// # Examples
///
/// ```no_run
/// use iconpack_core::Category;
/// use iconpack_files::scan_category;
/// use std::path::Path;
///
/// # async fn example() -> iconpack_core::Result<()> {
/// let icons = scan_category(Path::new("optimized/icons"), &Category::new("maps")?).await?;
/// for icon in &icons {
///     println!("{} -> {}", icon.file_name(), icon.component_name());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn scan_category(source_root: &Path, category: &Category) -> Result<Vec<IconAsset>> {
    let dir = source_root.join(category.as_str());

    let mut icons = Vec::new();
    let mut entries = tokio::fs::read_dir(&dir)
        .await
        .map_err(|e| Error::io(&dir, e))?;

    while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(&dir, e))? {
        let path = entry.path();

        let file_type = entry.file_type().await.map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            tracing::debug!("Skipping directory: {}", path.display());
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("svg") {
            tracing::debug!("Skipping non-SVG file: {}", path.display());
            continue;
        }

        // Check file size before reading
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::FileTooLarge {
                path,
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let svg = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;

        icons.push(IconAsset::new(path, svg)?);
    }

    // Sort by file name for deterministic output
    icons.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    check_duplicates(category, &icons)?;

    tracing::debug!("Scanned {} icons in {}", icons.len(), dir.display());

    Ok(icons)
}

fn check_duplicates(category: &Category, icons: &[IconAsset]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(icons.len());

    for icon in icons {
        let component = icon.component_name().as_str();
        if let Some(first) = seen.insert(component, icon.file_name()) {
            tracing::warn!("{first} and {} both map to {component}", icon.file_name());
            return Err(Error::DuplicateComponent {
                category: category.to_string(),
                component: component.to_string(),
            });
        }
    }

    Ok(())
}
