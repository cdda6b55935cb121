//! Text layout queries over paragraphs.
//!
//! All functions here are read-only and stateless: they take the tree by
//! shared reference and recompute from scratch on every call. Scans are
//! bounded by the enclosing paragraph.
//!
//! # Example
//!
//! ```
//! use odftext::dom::OdfDom;
//! use odftext::text::{is_significant_whitespace, is_trailing_whitespace};
//!
//! let xml = r#"<text:p xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">a <text:span>b  </text:span></text:p>"#;
//! let dom = OdfDom::parse(xml).unwrap();
//! let runs: Vec<_> = dom
//!     .descendants(dom.document())
//!     .filter(|&id| dom.is_text(id))
//!     .collect();
//!
//! assert!(is_significant_whitespace(&dom, runs[0], 1));
//! assert!(is_trailing_whitespace(&dom, runs[1], 1));
//! ```

mod classify;
mod scan;
mod selection;
mod traverse;
mod whitespace;

pub use classify::{
    first_non_whitespace_child, is_character_element, is_grouping_element, is_list_item,
    is_odf_whitespace, is_odf_whitespace_char, is_paragraph, paragraph_element,
};
pub use scan::{
    LeftCharacter, look_left_for_character, look_right_for_character,
    scan_left_for_any_character, scan_left_for_non_whitespace, scan_right_for_any_character,
};
pub use selection::get_text_nodes;
pub use traverse::{first_child, last_child, next_node, previous_node};
pub use whitespace::{
    is_significant_whitespace, is_trailing_whitespace, significant_whitespace_offsets,
};
