//! Build an [`OdfDom`] from ODF XML.
//!
//! Accepts a whole `content.xml` or any well-formed fragment (several root
//! elements, bare text). Namespace prefixes are resolved while reading, so
//! the tree only ever holds [`Namespace`] values.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use super::arena::{NodeId, OdfDom};
use super::names::{Attribute, Namespace, QName};
use crate::error::{Error, Result};

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

impl OdfDom {
    /// Parse XML text into a new tree.
    ///
    /// Whitespace is kept exactly as written. Adjacent character data,
    /// entity references and CDATA sections become a single text run;
    /// comments and processing instructions are dropped.
    pub fn parse(xml: &str) -> Result<OdfDom> {
        TreeBuilder::new().run(xml)
    }

    /// Parse XML bytes, which must be UTF-8.
    pub fn parse_bytes(bytes: &[u8]) -> Result<OdfDom> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        Self::parse(std::str::from_utf8(bytes)?)
    }

    /// Read and parse an XML file such as an unpacked `content.xml`.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<OdfDom> {
        let bytes = std::fs::read(path)?;
        Self::parse_bytes(&bytes)
    }
}

struct TreeBuilder {
    dom: OdfDom,
    /// Open elements, innermost last.
    open: Vec<NodeId>,
    /// Prefix bindings per open element; `None` prefix is the default namespace.
    scopes: Vec<Vec<(Option<String>, Namespace)>>,
    pending_text: String,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            dom: OdfDom::new(),
            open: Vec::new(),
            scopes: Vec::new(),
            pending_text: String::new(),
        }
    }

    fn run(mut self, xml: &str) -> Result<OdfDom> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let id = self.start_element(&e)?;
                    self.open.push(id);
                }
                Event::Empty(e) => {
                    self.start_element(&e)?;
                    self.scopes.pop();
                }
                Event::End(e) => {
                    self.flush_text();
                    if self.open.pop().is_none() {
                        let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                        return Err(Error::UnexpectedEnd(name));
                    }
                    self.scopes.pop();
                }
                Event::Text(e) => {
                    self.pending_text.push_str(std::str::from_utf8(e.as_ref())?);
                }
                Event::CData(e) => {
                    self.pending_text.push_str(std::str::from_utf8(&e)?);
                }
                Event::GeneralRef(e) => {
                    let entity = std::str::from_utf8(e.as_ref())?;
                    let resolved = resolve_entity(entity)
                        .ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;
                    self.pending_text.push(resolved);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(&unclosed) = self.open.last() {
            let name = self
                .dom
                .element_name(unclosed)
                .map(ToString::to_string)
                .unwrap_or_default();
            return Err(Error::Unclosed(name));
        }
        self.flush_text();

        tracing::debug!(nodes = self.dom.len(), "parsed ODF tree");
        Ok(self.dom)
    }

    fn parent(&self) -> NodeId {
        self.open.last().copied().unwrap_or(self.dom.document())
    }

    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending_text);
        let parent = self.parent();
        self.dom.append_text(parent, text);
    }

    /// Create the element for a start or empty tag and push its namespace scope.
    fn start_element(&mut self, e: &BytesStart<'_>) -> Result<NodeId> {
        self.flush_text();

        let mut bindings = Vec::new();
        let mut raw_attrs = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let value = unescape(std::str::from_utf8(&attr.value)?)?.into_owned();
            if key == "xmlns" {
                bindings.push((None, Namespace::from_uri(&value)));
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                bindings.push((Some(prefix.to_string()), Namespace::from_uri(&value)));
            } else {
                raw_attrs.push((key.to_string(), value));
            }
        }
        self.scopes.push(bindings);

        let name = self.resolve(std::str::from_utf8(e.name().as_ref())?, true)?;
        let attrs = raw_attrs
            .into_iter()
            .map(|(key, value)| -> Result<Attribute> {
                Ok(Attribute::new(self.resolve(&key, false)?, value))
            })
            .collect::<Result<Vec<_>>>()?;

        let parent = self.parent();
        Ok(self.dom.append_element(parent, name, attrs))
    }

    /// Resolve a lexical name against the open scopes.
    ///
    /// Unprefixed attributes are in no namespace; unprefixed elements take
    /// the default namespace.
    fn resolve(&self, raw: &str, is_element: bool) -> Result<QName> {
        let (prefix, local) = match raw.split_once(':') {
            Some((prefix, local)) => (Some(prefix), local),
            None => (None, raw),
        };

        if prefix.is_none() && !is_element {
            return Ok(QName::new(Namespace::None, local));
        }
        if prefix == Some("xml") {
            return Ok(QName::new(Namespace::from_uri(XML_NS), local));
        }

        let bound = self
            .scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter())
            .find(|(p, _)| p.as_deref() == prefix)
            .map(|(_, ns)| ns.clone());

        match (bound, prefix) {
            (Some(ns), _) => Ok(QName::new(ns, local)),
            (None, None) => Ok(QName::new(Namespace::None, local)),
            (None, Some(prefix)) => Err(Error::UnboundPrefix(prefix.to_string())),
        }
    }
}

/// Resolve an XML entity reference (without `&` and `;`).
fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "apos" => return Some('\''),
        "quot" => return Some('"'),
        "lt" => return Some('<'),
        "gt" => return Some('>'),
        "amp" => return Some('&'),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
