//! Host document tree.
//!
//! An arena of ODF nodes addressed by [`NodeId`], plus the range and
//! tree-walking primitives that selection queries need. Trees are built
//! programmatically or read from XML with [`OdfDom::parse`].

mod arena;
mod names;
mod range;
mod walker;
mod xml;

pub use arena::{Children, Descendants, Node, NodeData, NodeId, OdfDom};
pub use names::{
    AttrKey, Attribute, DRAW_NS, ElementKind, FO_NS, Namespace, OFFICE_NS, QName, STYLE_NS,
    SVG_NS, TABLE_NS, TEXT_NS, XLINK_NS,
};
pub use range::{BoundaryComparison, BoundaryPoint, Range, compare_points, tree_order};
pub use walker::{FilterResult, TreeWalker};
