//! SVG normalization.
//!
//! Streams the document through quick-xml, rewriting attributes on the fly.
//! Rules, in order:
//!
//! 1. remove `width`/`height` from the root (synthesizing a `viewBox` when
//!    the root has none and both dimensions are numeric)
//! 2. remove `xmlns` from the root
//! 3. remove `stroke` everywhere and `stroke-width` from `<path>` elements
//! 4. add `stroke-width="2"`, `stroke="currentColor"` and
//!    `aria-hidden="true"` to the root unless already present

use iconpack_core::{Error, Result};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Attributes added to the root `<svg>` element.
pub const ROOT_ATTRIBUTES: &[(&str, &str)] = &[
    ("stroke-width", "2"),
    ("stroke", "currentColor"),
    ("aria-hidden", "true"),
];

/// Attributes removed from the root `<svg>` element.
const ROOT_REMOVED: &[&[u8]] = &[b"width", b"height", b"xmlns"];

/// Normalizes raw SVG text.
///
/// # Errors
///
/// Returns [`Error::InvalidSvg`] if the document is not well-formed XML or
/// its first element is not `<svg>`.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::svg::optimize_svg;
///
/// let raw = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path stroke="red" stroke-width="1.5" d="M0 0h24"/></svg>"#;
/// let out = optimize_svg(raw).unwrap();
///
/// assert_eq!(
///     out,
///     r#"<svg viewBox="0 0 24 24" stroke-width="2" stroke="currentColor" aria-hidden="true"><path d="M0 0h24"/></svg>"#
/// );
/// ```
pub fn optimize_svg(input: &str) -> Result<String> {
    let mut reader = Reader::from_str(input);
    let mut writer = Writer::new(Vec::with_capacity(input.len()));
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| Error::InvalidSvg {
            reason: format!("XML parse error at position {}: {e}", reader.error_position()),
        })?;

        let rewritten = match event {
            Event::Start(elem) => Event::Start(rewrite_element(&elem, &mut seen_root)?),
            Event::Empty(elem) => Event::Empty(rewrite_element(&elem, &mut seen_root)?),
            Event::Eof => break,
            other => other,
        };

        writer.write_event(rewritten).map_err(|e| Error::InvalidSvg {
            reason: format!("failed to serialize SVG: {e}"),
        })?;
    }

    if !seen_root {
        return Err(Error::InvalidSvg {
            reason: "document has no root <svg> element".to_string(),
        });
    }

    String::from_utf8(writer.into_inner()).map_err(|e| Error::InvalidSvg {
        reason: format!("serialized SVG is not UTF-8: {e}"),
    })
}

/// Rewrites the attributes of one element.
///
/// The first element seen is the root and must be `<svg>`.
fn rewrite_element(elem: &BytesStart<'_>, seen_root: &mut bool) -> Result<BytesStart<'static>> {
    let is_root = !*seen_root;
    *seen_root = true;

    if is_root && elem.local_name().as_ref() != b"svg" {
        return Err(Error::InvalidSvg {
            reason: format!(
                "root element is <{}>, expected <svg>",
                String::from_utf8_lossy(elem.name().as_ref())
            ),
        });
    }

    let is_path = elem.local_name().as_ref() == b"path";
    let attributes = collect_attributes(elem)?;

    let mut out = BytesStart::new(String::from_utf8_lossy(elem.name().as_ref()).into_owned());

    if is_root {
        let synthesized = synthesize_view_box(&attributes);
        let keep_dimensions = !has_attribute(&attributes, b"viewBox") && synthesized.is_none();

        for attr in &attributes {
            let key = attr.key.as_ref();
            let is_dimension = key == b"width" || key == b"height";
            let removed = key == b"stroke"
                || (ROOT_REMOVED.contains(&key) && !(is_dimension && keep_dimensions));
            if removed {
                continue;
            }
            push_kept(&mut out, attr)?;
        }

        if let Some(view_box) = synthesized {
            out.push_attribute(("viewBox", view_box.as_str()));
        }

        for (name, value) in ROOT_ATTRIBUTES {
            if !has_attribute(&attributes, name.as_bytes()) || *name == "stroke" {
                out.push_attribute((*name, *value));
            }
        }
    } else {
        for attr in &attributes {
            let key = attr.key.as_ref();
            if key == b"stroke" || (is_path && key == b"stroke-width") {
                continue;
            }
            push_kept(&mut out, attr)?;
        }
    }

    Ok(out)
}

fn collect_attributes<'a>(elem: &'a BytesStart<'_>) -> Result<Vec<Attribute<'a>>> {
    elem.attributes()
        .map(|attr| {
            attr.map_err(|e| Error::InvalidSvg {
                reason: format!("malformed attribute: {e}"),
            })
        })
        .collect()
}

/// Copies an attribute onto the rewritten element.
///
/// The value is decoded and re-escaped, so values that were single-quoted
/// in the source stay well-formed inside double quotes.
fn push_kept(out: &mut BytesStart<'static>, attr: &Attribute<'_>) -> Result<()> {
    let key = String::from_utf8_lossy(attr.key.as_ref());
    let value = attr.unescape_value().map_err(|e| Error::InvalidSvg {
        reason: format!("invalid value for attribute '{key}': {e}"),
    })?;
    out.push_attribute((&*key, &*value));
    Ok(())
}

fn has_attribute(attributes: &[Attribute<'_>], key: &[u8]) -> bool {
    attributes.iter().any(|a| a.key.as_ref() == key)
}

fn attribute_value(attributes: &[Attribute<'_>], key: &[u8]) -> Option<String> {
    attributes
        .iter()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}

/// Builds `0 0 W H` from numeric `width`/`height` when the root has no
/// `viewBox`.
fn synthesize_view_box(attributes: &[Attribute<'_>]) -> Option<String> {
    if has_attribute(attributes, b"viewBox") {
        return None;
    }

    let width: f64 = attribute_value(attributes, b"width")?.trim().parse().ok()?;
    let height: f64 = attribute_value(attributes, b"height")?.trim().parse().ok()?;

    if !width.is_finite() || !height.is_finite() {
        return None;
    }

    Some(format!("0 0 {width} {height}"))
}
