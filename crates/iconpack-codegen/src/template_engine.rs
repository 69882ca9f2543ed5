//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the component and declaration
//! templates for every supported framework pre-registered.
//!
//! # Examples
//!
//! ```
//! use iconpack_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let out = engine.render("react/declaration", &json!({"name": "BellIcon"})).unwrap();
//! assert!(out.contains("declare function BellIcon"));
//! ```

use handlebars::Handlebars;
use iconpack_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const TEMPLATES: &[(&str, &str)] = &[
    (
        "react/component",
        include_str!("../templates/react/component.js.hbs"),
    ),
    (
        "react/declaration",
        include_str!("../templates/react/component.d.ts.hbs"),
    ),
    (
        "vue/component",
        include_str!("../templates/vue/component.js.hbs"),
    ),
    (
        "vue/declaration",
        include_str!("../templates/vue/component.d.ts.hbs"),
    ),
];

/// Template engine for code generation.
///
/// Output is JavaScript and TypeScript, so HTML escaping is disabled and
/// strict mode rejects templates that reference missing fields.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with all built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::SerializationError {
                    message: format!("Failed to register template '{name}': {e}"),
                    source: None,
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::SerializationError {
                message: format!("Template rendering failed: {e}"),
                source: None,
            })
    }
}
