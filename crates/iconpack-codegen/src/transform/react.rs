//! React transformer.
//!
//! Renders the SVG tree as nested `React.createElement` calls. The root
//! element merges the caller's props over the icon attributes and receives
//! the forwarded ref.

use super::{object_key, object_literal, string_literal};
use crate::svg::{SvgElement, SvgNode};
use heck::ToLowerCamelCase;
use iconpack_core::Result;

const INDENT: &str = "  ";
const PURE: &str = "/*#__PURE__*/";

/// Renders the root `<svg>` element.
///
/// # Errors
///
/// Returns error if a value cannot be encoded as a string literal.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::svg::parse_svg;
/// use iconpack_codegen::transform::react::render_root;
///
/// let root = parse_svg(r#"<svg stroke-width="2"/>"#).unwrap();
/// let expr = render_root(&root).unwrap();
///
/// assert_eq!(
///     expr,
///     "/*#__PURE__*/React.createElement(\"svg\", Object.assign({\n    strokeWidth: \"2\",\n    ref: svgRef\n  }, props))"
/// );
/// ```
pub fn render_root(root: &SvgElement) -> Result<String> {
    render_element(root, true)
}

fn render_element(elem: &SvgElement, is_root: bool) -> Result<String> {
    let mut entries = Vec::with_capacity(elem.attributes.len() + 1);
    for (name, value) in &elem.attributes {
        let prop = prop_name(name);
        let value = if prop == "style" {
            style_object(value)?
        } else {
            string_literal(value)?
        };
        entries.push((object_key(&prop)?, value));
    }

    let props = if is_root {
        entries.push(("ref".to_string(), "svgRef".to_string()));
        format!("Object.assign({}, props)", object_literal(&entries, INDENT))
    } else if entries.is_empty() {
        "null".to_string()
    } else {
        object_literal(&entries, INDENT)
    };

    let mut call = format!(
        "{PURE}React.createElement({}, {props}",
        string_literal(&elem.name)?
    );
    for child in &elem.children {
        call.push_str(", ");
        match child {
            SvgNode::Element(child) => call.push_str(&render_element(child, false)?),
            SvgNode::Text(text) => call.push_str(&string_literal(text)?),
        }
    }
    call.push(')');

    Ok(call)
}

/// Converts an SVG attribute name to its React prop name.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::transform::react::prop_name;
///
/// assert_eq!(prop_name("stroke-linecap"), "strokeLinecap");
/// assert_eq!(prop_name("xlink:href"), "xlinkHref");
/// assert_eq!(prop_name("aria-hidden"), "aria-hidden");
/// assert_eq!(prop_name("viewBox"), "viewBox");
/// ```
#[must_use]
pub fn prop_name(name: &str) -> String {
    match name {
        "class" => "className".to_string(),
        "for" => "htmlFor".to_string(),
        _ if name.starts_with("aria-") || name.starts_with("data-") => name.to_string(),
        _ if name.contains(['-', ':']) => name.to_lower_camel_case(),
        _ => name.to_string(),
    }
}

/// Converts an inline `style` attribute into an object literal.
fn style_object(style: &str) -> Result<String> {
    let mut entries = Vec::new();

    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        if property.is_empty() {
            continue;
        }

        // Custom properties keep their name
        let key = if property.starts_with("--") {
            string_literal(property)?
        } else {
            object_key(&property.to_lower_camel_case())?
        };
        entries.push(format!("{key}: {}", string_literal(value.trim())?));
    }

    if entries.is_empty() {
        return Ok("{}".to_string());
    }
    Ok(format!("{{ {} }}", entries.join(", ")))
}

/// Rewrites the ES module import and default export into CommonJS.
///
/// Only the first occurrence of each statement is replaced.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::transform::react::to_commonjs;
///
/// let esm = "import * as React from \"react\";\nexport default ForwardRef;\n";
/// assert_eq!(
///     to_commonjs(esm),
///     "const React = require(\"react\");\nmodule.exports = ForwardRef;\n"
/// );
/// ```
#[must_use]
pub fn to_commonjs(code: &str) -> String {
    code.replacen(
        "import * as React from \"react\"",
        "const React = require(\"react\")",
        1,
    )
    .replacen("export default", "module.exports =", 1)
}
