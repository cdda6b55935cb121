//! Error types for odftext operations.
//!
//! Tree queries never fail; only reading XML into an [`OdfDom`](crate::dom::OdfDom)
//! and the command line tool produce errors.

use thiserror::Error;

/// Errors that can occur while building a tree from XML.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Unbound namespace prefix: {0}")]
    UnboundPrefix(String),

    #[error("Unknown entity reference: &{0};")]
    UnknownEntity(String),

    #[error("Unexpected end tag: </{0}>")]
    UnexpectedEnd(String),

    #[error("Unclosed element: <{0}>")]
    Unclosed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
