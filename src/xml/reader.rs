use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use super::tree::{Attribute, Document, Element};
use crate::config::DecodeOptions;
use crate::error::DecodeError;

/// Builds a namespace-resolved element tree from raw bytes.
///
/// Fails when the bytes are not well-formed: tokenizer errors, mismatched or
/// unclosed tags, undeclared prefixes, a missing root, or content after it.
///
/// # Security
///
/// Text and attribute values are decoded with the encoding named in the XML
/// declaration (or BOM), so `ISO-8859-1` and friends decode like UTF-8.
///
/// SEC-002: `quick-xml` (0.37) does not parse `<!ENTITY>` declarations. A
/// reference to anything but the five predefined entities fails unescaping
/// and therefore fails the parse; nothing is ever expanded.
pub fn parse_document(data: &[u8], options: &DecodeOptions) -> Result<Document, DecodeError> {
    let size = data.len() as u64;
    if options.max_document_bytes > 0 && size > options.max_document_bytes {
        return Err(DecodeError::TooLarge {
            size,
            max: options.max_document_bytes,
        });
    }

    // Text events are kept verbatim; `Element::text` trims the concatenation
    let mut reader = NsReader::from_reader(data);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let step = match reader.read_resolved_event() {
            Ok((ns, event)) => Ok((namespace_uri(&ns), event)),
            Err(e) => Err(e),
        };
        let (namespace, event) = match step {
            Ok(resolved) => resolved,
            Err(e) => {
                return Err(DecodeError::xml(
                    reader.error_position() as u64,
                    e.to_string(),
                ))
            }
        };
        let position = reader.buffer_position() as u64;

        match event {
            Event::Start(e) => {
                check_open(root.is_some(), stack.len(), options, position)?;
                stack.push(open_element(&reader, &e, namespace, options, position)?);
            }
            Event::Empty(e) => {
                check_open(root.is_some(), stack.len(), options, position)?;
                let element = open_element(&reader, &e, namespace, options, position)?;
                close_element(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end names
                let element = stack
                    .pop()
                    .ok_or_else(|| DecodeError::xml(position, "unexpected closing tag"))?;
                close_element(&mut stack, &mut root, element);
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| DecodeError::xml(position, err.to_string()))?;
                push_text(&mut stack, text.into_owned(), position)?;
            }
            Event::CData(e) => {
                let text = e
                    .decode()
                    .map_err(|err| DecodeError::xml(position, err.to_string()))?;
                push_text(&mut stack, text.into_owned(), position)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, DOCTYPE
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::xml(
            reader.buffer_position() as u64,
            format!("unclosed element <{}>", open.name),
        ));
    }

    let root = root.ok_or_else(|| DecodeError::xml(0, "document has no root element"))?;
    Ok(Document { root })
}

fn namespace_uri(resolved: &ResolveResult<'_>) -> Result<String, String> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(String::from_utf8_lossy(ns.0).into_owned()),
        ResolveResult::Unbound => Ok(String::new()),
        ResolveResult::Unknown(prefix) => Err(format!(
            "undeclared namespace prefix '{}'",
            String::from_utf8_lossy(prefix)
        )),
    }
}

fn check_open(
    has_root: bool,
    depth: usize,
    options: &DecodeOptions,
    position: u64,
) -> Result<(), DecodeError> {
    if has_root && depth == 0 {
        return Err(DecodeError::xml(position, "content after the root element"));
    }
    // SEC-003: Reject excessively nested documents
    if options.max_depth > 0 && depth >= options.max_depth {
        return Err(DecodeError::MaxDepthExceeded(options.max_depth));
    }
    Ok(())
}

fn open_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart<'_>,
    namespace: Result<String, String>,
    options: &DecodeOptions,
    position: u64,
) -> Result<Element, DecodeError> {
    let namespace = namespace.map_err(|msg| DecodeError::xml(position, msg))?;
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DecodeError::xml(position, e.to_string()))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| DecodeError::xml(position, e.to_string()))?;
        attributes.push(Attribute {
            name: String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
            value: value.into_owned(),
        });
    }

    Ok(Element::new(name, namespace, attributes, options.trim_text))
}

fn close_element(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.push_element(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: String, position: u64) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(DecodeError::xml(position, "text outside the root element")),
    }
}
