//! Element tree of an optimized SVG document.
//!
//! Component renderers walk this tree instead of the raw XML. Comments,
//! processing instructions, the XML declaration and doctypes are dropped,
//! as is whitespace-only text.

use iconpack_core::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A node in the SVG element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgNode {
    /// An element with attributes and children
    Element(SvgElement),
    /// Text content, entity-decoded
    Text(String),
}

/// An SVG element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    /// Qualified tag name, e.g. `path` or `svg:g`
    pub name: String,
    /// Attributes in document order, values entity-decoded
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    fn from_start(elem: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr in elem.attributes() {
            let attr = attr.map_err(|e| Error::InvalidSvg {
                reason: format!("malformed attribute on <{name}>: {e}"),
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::InvalidSvg {
                    reason: format!("invalid value for attribute '{key}': {e}"),
                })?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }
}

/// Parses SVG text into its root element.
///
/// # Errors
///
/// Returns [`Error::InvalidSvg`] if the document is malformed or has no
/// root element.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::svg::parse_svg;
///
/// let root = parse_svg(r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#).unwrap();
/// assert_eq!(root.name, "svg");
/// assert_eq!(root.attributes, vec![("viewBox".to_string(), "0 0 24 24".to_string())]);
/// assert_eq!(root.children.len(), 1);
/// ```
pub fn parse_svg(input: &str) -> Result<SvgElement> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<SvgElement> = Vec::new();
    let mut root = None;

    loop {
        let event = reader.read_event().map_err(|e| Error::InvalidSvg {
            reason: format!("XML parse error at position {}: {e}", reader.error_position()),
        })?;

        match event {
            Event::Start(elem) => stack.push(SvgElement::from_start(&elem)?),
            Event::Empty(elem) => {
                let element = SvgElement::from_start(&elem)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| Error::InvalidSvg {
                    reason: "unbalanced closing tag".to_string(),
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| Error::InvalidSvg {
                    reason: format!("invalid text content: {e}"),
                })?;
                push_text(&mut stack, &text);
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                push_text(&mut stack, &text);
            }
            Event::Eof => break,
            // Comments, declarations, processing instructions, doctypes
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidSvg {
            reason: "unexpected end of document".to_string(),
        });
    }

    root.ok_or_else(|| Error::InvalidSvg {
        reason: "document has no root element".to_string(),
    })
}

fn attach(
    stack: &mut [SvgElement],
    root: &mut Option<SvgElement>,
    element: SvgElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(SvgNode::Element(element));
        return Ok(());
    }

    if root.is_some() {
        return Err(Error::InvalidSvg {
            reason: "document has more than one root element".to_string(),
        });
    }

    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [SvgElement], text: &str) {
    if text.trim().is_empty() {
        return;
    }

    // Text outside the root element is ignored
    if let Some(parent) = stack.last_mut() {
        parent.children.push(SvgNode::Text(text.to_string()));
    }
}
