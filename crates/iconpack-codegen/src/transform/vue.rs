//! Vue transformer.
//!
//! Renders the SVG tree in the shape of a compiled Vue template: a
//! `render(_ctx, _cache)` function opening a block for the root `<svg>` and
//! creating element vnodes for its descendants.

use super::{object_key, object_literal, string_literal};
use crate::svg::{SvgElement, SvgNode};
use iconpack_core::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Matches the named import of Vue helpers.
static IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import \{([^}]*)\} from "vue""#).expect("valid regex"));

/// Matches one `name as alias` import specifier.
static SPECIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+as\s+(\w+)$").expect("valid regex"));

/// Runtime helpers in import order.
const HELPERS: &[Helper] = &[
    Helper::CreateElementVNode,
    Helper::CreateTextVNode,
    Helper::OpenBlock,
    Helper::CreateElementBlock,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Helper {
    CreateElementVNode,
    CreateTextVNode,
    OpenBlock,
    CreateElementBlock,
}

impl Helper {
    const fn name(self) -> &'static str {
        match self {
            Self::CreateElementVNode => "createElementVNode",
            Self::CreateTextVNode => "createTextVNode",
            Self::OpenBlock => "openBlock",
            Self::CreateElementBlock => "createElementBlock",
        }
    }
}

/// Tracks which helpers the rendered tree references.
#[derive(Debug, Default)]
struct HelperSet {
    used: Vec<Helper>,
}

impl HelperSet {
    fn call(&mut self, helper: Helper) -> String {
        if !self.used.contains(&helper) {
            self.used.push(helper);
        }
        format!("_{}", helper.name())
    }

    fn imports(&self) -> String {
        HELPERS
            .iter()
            .filter(|h| self.used.contains(h))
            .map(|h| format!("{0} as _{0}", h.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Renders the root `<svg>` element.
///
/// Returns the `_createElementBlock` arguments and the import specifiers
/// the render function needs.
///
/// # Errors
///
/// Returns error if a value cannot be encoded as a string literal.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::svg::parse_svg;
/// use iconpack_codegen::transform::vue::render_root;
///
/// let root = parse_svg(r#"<svg aria-hidden="true"/>"#).unwrap();
/// let (args, imports) = render_root(&root).unwrap();
///
/// assert_eq!(args, "\"svg\", {\n    \"aria-hidden\": \"true\"\n  }");
/// assert_eq!(
///     imports,
///     "openBlock as _openBlock, createElementBlock as _createElementBlock"
/// );
/// ```
pub fn render_root(root: &SvgElement) -> Result<(String, String)> {
    let mut helpers = HelperSet::default();
    helpers.call(Helper::OpenBlock);
    helpers.call(Helper::CreateElementBlock);

    let args = render_arguments(root, 1, &mut helpers)?;
    Ok((args, helpers.imports()))
}

/// Renders `tag, props, children` for one element.
fn render_arguments(elem: &SvgElement, depth: usize, helpers: &mut HelperSet) -> Result<String> {
    let indent = "  ".repeat(depth);

    let mut args = string_literal(&elem.name)?;

    let entries = elem
        .attributes
        .iter()
        .map(|(name, value)| Ok((object_key(name)?, string_literal(value)?)))
        .collect::<Result<Vec<_>>>()?;
    args.push_str(", ");
    if entries.is_empty() {
        args.push_str("null");
    } else {
        args.push_str(&object_literal(&entries, &indent));
    }

    match elem.children.as_slice() {
        [] => {}
        [SvgNode::Text(text)] => {
            args.push_str(", ");
            args.push_str(&string_literal(text)?);
        }
        children => {
            let child_indent = "  ".repeat(depth + 1);
            let mut items = Vec::with_capacity(children.len());
            for child in children {
                let item = match child {
                    SvgNode::Element(child) => format!(
                        "{}({})",
                        helpers.call(Helper::CreateElementVNode),
                        render_arguments(child, depth + 1, helpers)?
                    ),
                    SvgNode::Text(text) => format!(
                        "{}({})",
                        helpers.call(Helper::CreateTextVNode),
                        string_literal(text)?
                    ),
                };
                items.push(format!("{child_indent}{item}"));
            }
            args.push_str(&format!(", [\n{}\n{indent}]", items.join(",\n")));
        }
    }

    Ok(args)
}

/// Rewrites the helper import and the render export into CommonJS.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::transform::vue::to_commonjs;
///
/// let esm = "import { openBlock as _openBlock } from \"vue\"\n\nexport default function render(_ctx, _cache) {}";
/// assert_eq!(
///     to_commonjs(esm),
///     "const { openBlock: _openBlock } = require(\"vue\")\n\nmodule.exports = function render(_ctx, _cache) {}"
/// );
/// ```
#[must_use]
pub fn to_commonjs(code: &str) -> String {
    let code = IMPORT_REGEX.replacen(code, 1, |caps: &regex::Captures<'_>| {
        let specifiers = caps[1]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| SPECIFIER_REGEX.replace(s, "$1: $2").into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        format!("const {{ {specifiers} }} = require(\"vue\")")
    });

    code.replacen(
        "export default function render",
        "module.exports = function render",
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse_svg;

    #[test]
    fn test_render_with_children() {
        let root = parse_svg(
            r#"<svg viewBox="0 0 24 24"><path stroke-linecap="round" d="M4 6h16"/><circle r="1"/></svg>"#,
        )
        .unwrap();

        let (args, imports) = render_root(&root).unwrap();
        assert_eq!(
            args,
            "\"svg\", {\n\
             \x20   viewBox: \"0 0 24 24\"\n\
             \x20 }, [\n\
             \x20   _createElementVNode(\"path\", {\n\
             \x20     \"stroke-linecap\": \"round\",\n\
             \x20     d: \"M4 6h16\"\n\
             \x20   }),\n\
             \x20   _createElementVNode(\"circle\", {\n\
             \x20     r: \"1\"\n\
             \x20   })\n\
             \x20 ]"
        );
        assert_eq!(
            imports,
            "createElementVNode as _createElementVNode, openBlock as _openBlock, createElementBlock as _createElementBlock"
        );
    }

    #[test]
    fn test_single_text_child_is_inlined() {
        let root = parse_svg("<svg><title>Bell</title></svg>").unwrap();
        let (args, _) = render_root(&root).unwrap();
        assert!(args.contains("_createElementVNode(\"title\", null, \"Bell\")"));
    }

    #[test]
    fn test_mixed_children_use_text_vnodes() {
        let root = parse_svg("<svg><text>a<tspan>b</tspan></text></svg>").unwrap();
        let (args, imports) = render_root(&root).unwrap();

        assert!(args.contains("_createTextVNode(\"a\")"));
        assert!(imports.starts_with(
            "createElementVNode as _createElementVNode, createTextVNode as _createTextVNode"
        ));
    }

    #[test]
    fn test_attribute_names_kept_verbatim() {
        let root = parse_svg(r##"<svg><use xlink:href="#a" class="x"/></svg>"##).unwrap();
        let (args, _) = render_root(&root).unwrap();
        assert!(args.contains("\"xlink:href\": \"#a\""));
        assert!(args.contains("class: \"x\""));
    }

    #[test]
    fn test_commonjs_rewrites_all_specifiers() {
        let esm = "import { createElementVNode as _createElementVNode, openBlock as _openBlock, createElementBlock as _createElementBlock } from \"vue\"\n";
        assert_eq!(
            to_commonjs(esm),
            "const { createElementVNode: _createElementVNode, openBlock: _openBlock, createElementBlock: _createElementBlock } = require(\"vue\")\n"
        );
    }
}
