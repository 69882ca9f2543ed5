//! Framework transformers.
//!
//! Each supported package maps to a [`Framework`] that knows how to turn an
//! SVG element tree into a render expression and how to rewrite an ES module
//! into CommonJS.
//!
//! # Examples
//!
//! ```
//! use iconpack_codegen::transform::Framework;
//! use iconpack_core::PackageName;
//!
//! let framework = Framework::for_package(&PackageName::new("vue")).unwrap();
//! assert_eq!(framework, Framework::Vue);
//! assert!(Framework::for_package(&PackageName::new("svelte")).is_err());
//! ```

pub mod react;
pub mod vue;

use crate::svg::SvgElement;
use iconpack_core::{Error, PackageName, Result};

/// Package names with a transformer.
const FRAMEWORKS: &[(&str, Framework)] = &[("react", Framework::React), ("vue", Framework::Vue)];

/// Target UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    /// `React.createElement` components with a forwarded ref
    React,
    /// Compiled Vue render functions
    Vue,
}

/// Element expression plus the helper imports it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    /// Expression passed to the component template
    pub expression: String,
    /// Import specifiers, empty for React
    pub imports: String,
}

impl Framework {
    /// Looks up the framework for a package name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPackage`] if no transformer is registered
    /// for the package.
    pub fn for_package(package: &PackageName) -> Result<Self> {
        FRAMEWORKS
            .iter()
            .find(|(name, _)| *name == package.as_str())
            .map(|(_, framework)| *framework)
            .ok_or_else(|| Error::UnknownPackage {
                package: package.to_string(),
            })
    }

    /// Name of the component module template.
    #[must_use]
    pub const fn component_template(self) -> &'static str {
        match self {
            Self::React => "react/component",
            Self::Vue => "vue/component",
        }
    }

    /// Name of the type declaration template.
    #[must_use]
    pub const fn declaration_template(self) -> &'static str {
        match self {
            Self::React => "react/declaration",
            Self::Vue => "vue/declaration",
        }
    }

    /// Renders the root element as a framework expression.
    ///
    /// # Errors
    ///
    /// Returns error if an attribute or text value cannot be encoded as a
    /// JavaScript string literal.
    pub fn render(self, root: &SvgElement) -> Result<RenderedElement> {
        match self {
            Self::React => Ok(RenderedElement {
                expression: react::render_root(root)?,
                imports: String::new(),
            }),
            Self::Vue => {
                let (expression, imports) = vue::render_root(root)?;
                Ok(RenderedElement {
                    expression,
                    imports,
                })
            }
        }
    }

    /// Rewrites an ES module produced by this framework into CommonJS.
    #[must_use]
    pub fn to_commonjs(self, code: &str) -> String {
        match self {
            Self::React => react::to_commonjs(code),
            Self::Vue => vue::to_commonjs(code),
        }
    }
}

/// Encodes a value as a double-quoted JavaScript string literal.
pub(crate) fn string_literal(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::SerializationError {
        message: format!("failed to encode string literal: {e}"),
        source: Some(e),
    })
}

/// Formats an object key, quoting it unless it is a plain identifier.
pub(crate) fn object_key(key: &str) -> Result<String> {
    if is_identifier(key) {
        Ok(key.to_string())
    } else {
        string_literal(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Formats `key: value` pairs as a multi-line object literal.
///
/// `indent` is the indentation of the closing brace.
pub(crate) fn object_literal(entries: &[(String, String)], indent: &str) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }

    let body = entries
        .iter()
        .map(|(key, value)| format!("{indent}  {key}: {value}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{{\n{body}\n{indent}}}")
}
