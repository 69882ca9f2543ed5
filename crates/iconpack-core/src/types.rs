//! Strong domain types for iconpack.
//!
//! Newtypes keep package names, categories and component identifiers from
//! being mixed up with each other or with arbitrary strings.
//!
//! # Examples
//!
//! ```
//! use iconpack_core::{Category, ComponentName, ModuleFormat, PackageName};
//!
//! let package = PackageName::new("react");
//! let category = Category::new("layout").unwrap();
//! let name = ComponentName::from_file_name("arrow-left.svg").unwrap();
//!
//! assert_eq!(package.as_str(), "react");
//! assert_eq!(category.as_str(), "layout");
//! assert_eq!(name.as_str(), "ArrowLeftIcon");
//! assert_eq!(ModuleFormat::Esm.subdirectory(), Some("esm"));
//! ```

use crate::{Error, Result};
use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Icon categories built by default, in build order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "editor",
    "education",
    "files",
    "finance",
    "general",
    "images",
    "layout",
    "maps",
    "media",
    "security",
    "shapes",
    "time",
    "users",
    "weather",
];

/// Suffix appended to every generated component name.
const COMPONENT_SUFFIX: &str = "Icon";

/// Target package name (newtype over String).
///
/// The name selects the framework transformer and names the output
/// directory. Whether a transformer exists is decided by the code generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageName(String);

impl PackageName {
    /// Creates a new package name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::PackageName;
    ///
    /// assert_eq!(PackageName::new(" vue ").as_str(), "vue");
    /// ```
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self(name.trim().to_string())
    }

    /// Returns the package name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Icon category (a single directory name under the source root).
///
/// Categories are validated at construction: they must be a non-empty
/// single path segment so they can be joined onto source and output roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Creates a validated category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the name is empty, contains a
    /// path separator, or is `.`/`..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::Category;
    ///
    /// assert!(Category::new("weather").is_ok());
    /// assert!(Category::new("").is_err());
    /// assert!(Category::new("../etc").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("category name cannot be empty")
        } else if name == "." || name == ".." {
            Some("category name cannot be a relative path component")
        } else if name.contains(['/', '\\', '\0']) {
            Some("category name must be a single path segment")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::ValidationError {
                field: "category".to_string(),
                reason: format!("{reason}: '{name}'"),
            }),
            None => Ok(Self(name)),
        }
    }

    /// Returns the default category list.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::Category;
    ///
    /// let categories = Category::defaults();
    /// assert_eq!(categories.len(), 14);
    /// assert_eq!(categories[0].as_str(), "editor");
    /// ```
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| Self((*name).to_string()))
            .collect()
    }

    /// Returns the category as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// JavaScript module format of a generated package variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// Static `import`/`export` modules, written to the `esm/` subdirectory.
    Esm,
    /// `require`/`module.exports` modules, written at the category root.
    Cjs,
}

impl ModuleFormat {
    /// Both formats, in build order.
    pub const ALL: [Self; 2] = [Self::Esm, Self::Cjs];

    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Esm => "esm",
            Self::Cjs => "cjs",
        }
    }

    /// Returns the subdirectory this format is written to, relative to the
    /// category output directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::ModuleFormat;
    ///
    /// assert_eq!(ModuleFormat::Esm.subdirectory(), Some("esm"));
    /// assert_eq!(ModuleFormat::Cjs.subdirectory(), None);
    /// ```
    #[must_use]
    pub const fn subdirectory(&self) -> Option<&'static str> {
        match self {
            Self::Esm => Some("esm"),
            Self::Cjs => None,
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated component identifier, e.g. `ArrowLeftIcon`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentName(String);

impl ComponentName {
    /// Derives a component name from an icon file name.
    ///
    /// The `.svg` extension is stripped, the remaining words are converted to
    /// UpperCamelCase and `Icon` is appended. Word boundaries are `-`, `_`,
    /// `.`, spaces and lower-to-upper case changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIconName`] if the base name is empty, does not
    /// start with an ASCII letter, or contains characters other than ASCII
    /// alphanumerics and word separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::ComponentName;
    ///
    /// let name = ComponentName::from_file_name("arrow-left.svg").unwrap();
    /// assert_eq!(name.as_str(), "ArrowLeftIcon");
    ///
    /// let name = ComponentName::from_file_name("chart_bar_2.svg").unwrap();
    /// assert_eq!(name.as_str(), "ChartBar2Icon");
    ///
    /// assert!(ComponentName::from_file_name("3d-cube.svg").is_err());
    /// ```
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let stem = file_name.strip_suffix(".svg").unwrap_or(file_name);

        let invalid = |reason: &str| Error::InvalidIconName {
            file_name: file_name.to_string(),
            reason: reason.to_string(),
        };

        let Some(first) = stem.chars().next() else {
            return Err(invalid("name is empty"));
        };

        if !first.is_ascii_alphabetic() {
            return Err(invalid("name must start with an ASCII letter"));
        }

        if !stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
        {
            return Err(invalid(
                "name may only contain ASCII letters, digits, '-', '_', '.' and spaces",
            ));
        }

        Ok(Self(format!(
            "{}{COMPONENT_SUFFIX}",
            stem.to_upper_camel_case()
        )))
    }

    /// Returns the component name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ComponentName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single SVG source file and the component it becomes.
///
/// # Examples
///
/// ```
/// use iconpack_core::IconAsset;
///
/// let icon = IconAsset::new("icons/layout/arrow-left.svg", "<svg/>").unwrap();
/// assert_eq!(icon.file_name(), "arrow-left.svg");
/// assert_eq!(icon.component_name().as_str(), "ArrowLeftIcon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    path: PathBuf,
    file_name: String,
    component_name: ComponentName,
    svg: String,
}

impl IconAsset {
    /// Creates an icon asset from its source path and SVG text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIconName`] if the path has no UTF-8 file name
    /// or the file name cannot be mapped to a component name.
    pub fn new(path: impl Into<PathBuf>, svg: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidIconName {
                file_name: path.display().to_string(),
                reason: "path has no UTF-8 file name".to_string(),
            })?
            .to_string();
        let component_name = ComponentName::from_file_name(&file_name)?;

        Ok(Self {
            path,
            file_name,
            component_name,
            svg: svg.into(),
        })
    }

    /// Returns the source path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name including extension.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the derived component name.
    #[inline]
    #[must_use]
    pub const fn component_name(&self) -> &ComponentName {
        &self.component_name
    }

    /// Returns the raw SVG text.
    #[inline]
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_identifier(s: &str) -> bool {
        let mut chars = s.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    }

    #[test]
    fn test_component_name_from_kebab_case() {
        let name = ComponentName::from_file_name("arrow-left.svg").unwrap();
        assert_eq!(name.as_str(), "ArrowLeftIcon");
    }

    #[test]
    fn test_component_name_variants() {
        let cases = [
            ("x.svg", "XIcon"),
            ("user-circle.svg", "UserCircleIcon"),
            ("calendar_days.svg", "CalendarDaysIcon"),
            ("cloud upload.svg", "CloudUploadIcon"),
            ("zoomIn.svg", "ZoomInIcon"),
            ("arrow-left-2.svg", "ArrowLeft2Icon"),
            ("file.text.svg", "FileTextIcon"),
        ];

        for (file, expected) in cases {
            let name = ComponentName::from_file_name(file).unwrap();
            assert_eq!(name.as_str(), expected, "for {file}");
        }
    }

    #[test]
    fn test_component_names_are_identifiers() {
        let files = [
            "a.svg",
            "chevron-double-down.svg",
            "wifi_off.svg",
            "h1.svg",
            "q-r-code.svg",
            "Already-Pascal.svg",
        ];

        for file in files {
            let name = ComponentName::from_file_name(file).unwrap();
            assert!(is_identifier(name.as_str()), "{name} is not an identifier");
            assert!(name.as_str().ends_with("Icon"));
            assert!(name.as_str().chars().next().unwrap().is_ascii_uppercase());
        }
    }

    #[test]
    fn test_component_name_without_extension() {
        let name = ComponentName::from_file_name("bell").unwrap();
        assert_eq!(name.as_str(), "BellIcon");
    }

    #[test]
    fn test_component_name_rejects_invalid() {
        for file in [".svg", "", "1st.svg", "-dash.svg", "caf\u{e9}.svg", "a/b.svg"] {
            let result = ComponentName::from_file_name(file);
            assert!(
                matches!(result, Err(Error::InvalidIconName { .. })),
                "{file} should be rejected"
            );
        }
    }

    #[test]
    fn test_category_validation() {
        assert!(Category::new("users").is_ok());
        assert!(Category::new("").is_err());
        assert!(Category::new(".").is_err());
        assert!(Category::new("..").is_err());
        assert!(Category::new("a/b").is_err());
        assert!(Category::new("a\\b").is_err());
    }

    #[test]
    fn test_category_defaults_match_constant() {
        let defaults = Category::defaults();
        assert_eq!(defaults.len(), DEFAULT_CATEGORIES.len());
        assert!(defaults.iter().any(|c| c.as_str() == "layout"));
        assert!(defaults.iter().all(|c| Category::new(c.as_str()).is_ok()));
    }

    #[test]
    fn test_category_deserialize_validates() {
        let ok: Category = serde_json::from_str("\"maps\"").unwrap();
        assert_eq!(ok.as_str(), "maps");

        let bad: std::result::Result<Category, _> = serde_json::from_str("\"../maps\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_module_format_properties() {
        assert_eq!(ModuleFormat::ALL.len(), 2);
        assert_eq!(ModuleFormat::Esm.as_str(), "esm");
        assert_eq!(ModuleFormat::Cjs.to_string(), "cjs");
        assert_eq!(ModuleFormat::Cjs.subdirectory(), None);
    }

    #[test]
    fn test_icon_asset_derives_name() {
        let icon = IconAsset::new("/src/maps/map-pin.svg", "<svg></svg>").unwrap();
        assert_eq!(icon.path(), Path::new("/src/maps/map-pin.svg"));
        assert_eq!(icon.component_name().as_str(), "MapPinIcon");
        assert_eq!(icon.svg(), "<svg></svg>");
    }

    #[test]
    fn test_icon_asset_rejects_bad_name() {
        assert!(IconAsset::new("/src/maps/9lives.svg", "<svg/>").is_err());
        assert!(IconAsset::new("/", "<svg/>").is_err());
    }

    #[test]
    fn test_package_name_trims() {
        let name = PackageName::new("  react\n");
        assert_eq!(name.as_str(), "react");
        assert_eq!(PackageName::from("vue").to_string(), "vue");
    }
}
