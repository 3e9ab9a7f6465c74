//! Schema-less walk of an EBML stream into a serializable element tree.
//!
//! This is what `mkvdump` runs on: every element is classified through the
//! [`KnownElement`] table, masters recurse, bulk elements (Clusters) are
//! deferred unless asked for, and scalar leaves are rendered as text.

use crate::error::{Error, Result};
use crate::known::{ElementClass, KnownElement};
use crate::reader::ElementReader;
use serde::Serialize;
use std::io::{Read, Seek};

/// Show at most this many bytes of a binary payload inline, as hex.
const INLINE_BINARY: u64 = 24;

#[derive(Debug, Serialize)]
pub struct ElementNode {
    /// Absolute offset of the element (its ID byte).
    pub offset: u64,
    /// ID + size field bytes.
    pub header_len: u64,
    /// Declared payload size; `None` for unknown-size elements.
    pub size: Option<u64>,
    pub payload_offset: u64,
    pub id: String,
    pub name: &'static str,
    pub class: &'static str,
    /// Rendered scalar value, for leaf elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ElementNode>>,
}

/// Walk all elements in the cursor's range. `resolve_bulk` recurses into
/// Cluster payloads instead of deferring them.
pub fn parse_tree<R: Read + Seek>(
    r: &mut ElementReader<'_, R>,
    resolve_bulk: bool,
) -> Result<Vec<ElementNode>> {
    let mut nodes = Vec::new();
    while !r.at_end()? {
        let offset = r.position()?;
        let eid = r.read_id()?;
        let known = KnownElement::from(eid);
        let mut class = known.class();
        if class == ElementClass::Bulk && resolve_bulk {
            class = ElementClass::Master;
        }

        let mut value = None;
        let mut children = None;
        let (payload_offset, end) = match class {
            ElementClass::Master => {
                let (kids, geometry) = r.read_master(|c| {
                    let geometry = (c.start(), c.end());
                    Ok((parse_tree(c, resolve_bulk)?, geometry))
                })?;
                children = Some(kids);
                geometry
            }
            ElementClass::Bulk => {
                // Geometry only; the payload is skipped, not decoded.
                r.read_master(|c| Ok((c.start(), c.end())))?
            }
            _ => {
                let (rendered, geometry) = r.read_master(|c| {
                    let geometry = (c.start(), c.end());
                    let width = match c.end() {
                        Some(end) => end - c.start(),
                        None => {
                            return Err(Error::UnexpectedUnknownSize { offset: c.start() });
                        }
                    };
                    Ok((render_scalar(c, class, width)?, geometry))
                })?;
                value = Some(rendered);
                geometry
            }
        };

        nodes.push(ElementNode {
            offset,
            header_len: payload_offset - offset,
            size: end.map(|e| e - payload_offset),
            payload_offset,
            id: format!("{eid}"),
            name: known.full_name(),
            class: class.as_str(),
            value,
            children,
        });
    }
    Ok(nodes)
}

fn render_scalar<R: Read + Seek>(
    c: &mut ElementReader<'_, R>,
    class: ElementClass,
    width: u64,
) -> Result<String> {
    Ok(match class {
        ElementClass::UInt => c.decode_uint_width(width)?.to_string(),
        ElementClass::Int => c.decode_int_width(width)?.to_string(),
        ElementClass::Float => c.decode_float_width(width)?.to_string(),
        ElementClass::Ascii => c.decode_ascii_width(width)?,
        ElementClass::Utf8 => c.decode_utf8_width(width)?,
        ElementClass::Date => format!("{} ns", c.decode_date_width(width)?),
        ElementClass::Guid => hex::encode(c.decode_binary_width(width)?),
        ElementClass::Binary | ElementClass::Unknown => {
            if width <= INLINE_BINARY {
                hex::encode(c.decode_binary_width(width)?)
            } else {
                format!("{width} bytes")
            }
        }
        ElementClass::Master | ElementClass::Bulk => unreachable!(),
    })
}
