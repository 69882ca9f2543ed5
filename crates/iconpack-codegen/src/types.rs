//! Types for code generation.
//!
//! # Examples
//!
//! ```
//! use iconpack_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("ArrowLeftIcon.js", "export default null;"));
//!
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Result of code generation containing all generated files.
///
/// Paths are relative to the directory the code is exported into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// List of generated files with paths and contents
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty generated code container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file to the collection.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a file by its relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile::new("index.js", ""));
    ///
    /// assert!(code.get("index.js").is_some());
    /// assert!(code.get("missing.js").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// A single generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative path where the file should be written
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Generated sources for one component in one module format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    /// JavaScript module source
    pub code: String,
    /// TypeScript declaration
    pub declaration: String,
}

/// Context for the component module templates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ComponentContext<'a> {
    /// Component identifier
    pub name: &'a str,
    /// Rendered element expression
    pub element: &'a str,
    /// Framework helper imports (Vue only)
    pub imports: &'a str,
}

/// Context for the type declaration templates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DeclarationContext<'a> {
    /// Component identifier
    pub name: &'a str,
}

/// `package.json` written next to each module format's barrel.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::PackageManifest;
/// use iconpack_core::ModuleFormat;
///
/// let manifest = PackageManifest::for_format(ModuleFormat::Esm);
/// let json = serde_json::to_string(&manifest).unwrap();
/// assert_eq!(json, r#"{"type":"module","sideEffects":false}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// ESM entry point for bundlers (CJS directory only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Module kind (`"module"` in the ESM directory)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Always `false`: icon modules are safe to tree-shake
    pub side_effects: bool,
}

impl PackageManifest {
    /// Returns the manifest for the given module format directory.
    #[must_use]
    pub fn for_format(format: iconpack_core::ModuleFormat) -> Self {
        match format {
            iconpack_core::ModuleFormat::Esm => Self {
                module: None,
                kind: Some("module".to_string()),
                side_effects: false,
            },
            iconpack_core::ModuleFormat::Cjs => Self {
                module: Some("./esm/index.js".to_string()),
                kind: None,
                side_effects: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconpack_core::ModuleFormat;

    #[test]
    fn test_generated_code_collects_files() {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("a.js", "a"));
        code.add_file(GeneratedFile::new("b.js", "b"));

        assert_eq!(code.file_count(), 2);
        let paths: Vec<_> = code.files().map(GeneratedFile::path).collect();
        assert_eq!(paths, vec!["a.js", "b.js"]);
        assert_eq!(code.get("b.js").unwrap().content(), "b");
    }

    #[test]
    fn test_cjs_manifest_pretty_json() {
        let manifest = PackageManifest::for_format(ModuleFormat::Cjs);
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        assert_eq!(
            json,
            "{\n  \"module\": \"./esm/index.js\",\n  \"sideEffects\": false\n}"
        );
    }

    #[test]
    fn test_esm_manifest_pretty_json() {
        let manifest = PackageManifest::for_format(ModuleFormat::Esm);
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        assert_eq!(json, "{\n  \"type\": \"module\",\n  \"sideEffects\": false\n}");
    }
}
