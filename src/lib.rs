//! # odftext
//!
//! Whitespace collapsing and paragraph traversal for OpenDocument text.
//!
//! ODF text content collapses whitespace: runs of spaces, tabs and newlines
//! inside `text:p` render as at most one space, and whitespace at the end of
//! a paragraph disappears. Deciding whether one particular whitespace char
//! survives needs context that can be arbitrarily far away: earlier and later
//! text runs, nested `text:span` elements, tabs and line breaks. This crate
//! answers that question and exposes the tree walks it is built on.
//!
//! ## Features
//!
//! - Arena document tree with an XML reader ([`dom`])
//! - Role predicates, reading-order traversal and character scans ([`text`])
//! - Significant and trailing whitespace detection
//! - Text runs covered by a range
//! - `fo:` length attribute parsing ([`length`])
//!
//! ## Quick Start
//!
//! ```
//! use odftext::dom::OdfDom;
//! use odftext::text::significant_whitespace_offsets;
//!
//! let xml = r#"<text:p xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">one   two </text:p>"#;
//! let dom = OdfDom::parse(xml).unwrap();
//! let run = dom.find(|node| matches!(node.data, odftext::dom::NodeData::Text(_))).unwrap();
//!
//! // Only the first space after "one" survives; the final space trails.
//! assert_eq!(significant_whitespace_offsets(&dom, run), vec![3]);
//! ```

pub mod dom;
pub mod error;
pub mod length;
pub mod text;

pub use dom::{NodeId, OdfDom};
pub use error::{Error, Result};
pub use length::{Length, LengthUnit};
