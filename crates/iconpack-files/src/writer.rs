//! Output writing.
//!
//! Writes always replace prior content; parent directories are created on
//! demand.

use iconpack_codegen::GeneratedCode;
use iconpack_core::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Writes a file, creating its parent directories first.
///
/// # Errors
///
/// Returns [`Error::Io`] if a directory cannot be created or the file
/// cannot be written.
///
/// # Examples
///
/// ```no_run
/// use iconpack_files::ensure_write;
/// use std::path::Path;
///
/// # async fn example() -> iconpack_core::Result<()> {
/// ensure_write(Path::new("react/layout/index.js"), "").await?;
/// # Ok(())
/// # }
/// ```
pub async fn ensure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Writes a value as pretty-printed JSON (2-space indent, no trailing
/// newline).
///
/// # Errors
///
/// Returns error if the value cannot be serialized or the file cannot be
/// written.
pub async fn ensure_write_json<T: Serialize + Sync>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::SerializationError {
        message: format!("failed to serialize {}: {e}", path.display()),
        source: Some(e),
    })?;
    ensure_write(path, &json).await
}

/// Writes every file of a [`GeneratedCode`] under `base`.
///
/// All paths are validated before anything is written; each file then goes
/// through [`ensure_write`]. Returns the number of files written.
///
/// # Errors
///
/// Returns [`Error::Io`] on the first directory or file that fails, or
/// [`Error::ValidationError`] if a generated path escapes `base`.
pub async fn export_generated(code: &GeneratedCode, base: &Path) -> Result<usize> {
    let mut targets = Vec::with_capacity(code.file_count());
    for file in code.files() {
        targets.push((resolve(base, file.path())?, file.content()));
    }

    for (path, content) in &targets {
        ensure_write(path, content).await?;
        tracing::debug!("Wrote {}", path.display());
    }

    Ok(targets.len())
}

/// Joins a generated relative path onto `base`, rejecting escapes.
fn resolve(base: &Path, relative: &str) -> Result<PathBuf> {
    let relative = Path::new(relative);
    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));

    if escapes || relative.as_os_str().is_empty() {
        return Err(Error::ValidationError {
            field: "path".to_string(),
            reason: format!("generated path must be relative: {}", relative.display()),
        });
    }

    Ok(base.join(relative))
}

/// Removes a directory and everything below it.
///
/// A directory that does not exist is not an error.
///
/// # Errors
///
/// Returns [`Error::Io`] if removal fails for any other reason.
pub async fn clear_dir(path: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconpack_codegen::{GeneratedFile, PackageManifest};
    use iconpack_core::ModuleFormat;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_write_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("react/layout/esm/index.js");

        ensure_write(&path, "export {}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {}");
    }

    #[tokio::test]
    async fn test_ensure_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.js");

        ensure_write(&path, "a much longer first version").await.unwrap();
        ensure_write(&path, "short").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[tokio::test]
    async fn test_ensure_write_json_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("maps/package.json");

        ensure_write_json(&path, &json!({"sideEffects": false}))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"sideEffects\": false\n}"
        );
    }

    #[tokio::test]
    async fn test_ensure_write_json_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("react/maps/package.json");

        ensure_write_json(&path, &PackageManifest::for_format(ModuleFormat::Cjs))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"module\": \"./esm/index.js\",\n  \"sideEffects\": false\n}"
        );
    }

    #[tokio::test]
    async fn test_export_generated() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("vue/time/esm");
        ensure_write(&base.join("BellIcon.js"), "stale bell from a previous run")
            .await
            .unwrap();

        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("BellIcon.js", "bell"));
        code.add_file(GeneratedFile::new("index.js", ""));

        let written = export_generated(&code, &base).await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(base.join("BellIcon.js")).unwrap(), "bell");
        assert_eq!(std::fs::read_to_string(base.join("index.js")).unwrap(), "");
    }

    #[tokio::test]
    async fn test_export_rejects_escaping_paths() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("react/maps");
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("GlobeIcon.js", ""));
        code.add_file(GeneratedFile::new("../outside.js", ""));

        let err = export_generated(&code, &base).await.unwrap_err();

        assert!(err.is_validation_error());
        assert!(!temp.path().join("react/outside.js").exists());
        // Validation happens before any write
        assert!(!base.exists());
    }

    #[tokio::test]
    async fn test_clear_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("react/files");
        ensure_write(&dir.join("esm/index.js"), "").await.unwrap();

        clear_dir(&dir).await.unwrap();
        assert!(!dir.exists());
        assert!(temp.path().join("react").exists());

        // Clearing again is fine
        clear_dir(&dir).await.unwrap();
    }
}
