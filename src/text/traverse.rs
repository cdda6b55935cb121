//! Reading-order navigation inside a paragraph.
//!
//! Grouping elements are transparent: stepping left or right descends into
//! them instead of stopping. Paragraphs are hard boundaries that a step never
//! crosses.

use super::classify::{is_grouping_element, is_paragraph};
use crate::dom::{NodeId, OdfDom};

/// Deepest first descendant reachable through grouping elements.
///
/// Returns `node` itself when it is not a grouping element or is empty.
pub fn first_child(dom: &OdfDom, node: NodeId) -> NodeId {
    let mut node = node;
    while is_grouping_element(dom, node) {
        match dom.first_child(node) {
            Some(child) => node = child,
            None => break,
        }
    }
    node
}

/// Deepest last descendant reachable through grouping elements.
pub fn last_child(dom: &OdfDom, node: NodeId) -> NodeId {
    let mut node = node;
    while is_grouping_element(dom, node) {
        match dom.last_child(node) {
            Some(child) => node = child,
            None => break,
        }
    }
    node
}

/// The atom immediately before `node` in its paragraph.
///
/// `None` once the paragraph start is reached, or when `node` has no
/// paragraph ancestor at all.
pub fn previous_node(dom: &OdfDom, node: NodeId) -> Option<NodeId> {
    let mut node = node;
    loop {
        if is_paragraph(dom, node) {
            return None;
        }
        if let Some(sibling) = dom.previous_sibling(node) {
            return Some(last_child(dom, sibling));
        }
        node = dom.parent(node)?;
    }
}

/// The atom immediately after `node` in its paragraph.
pub fn next_node(dom: &OdfDom, node: NodeId) -> Option<NodeId> {
    let mut node = node;
    loop {
        if is_paragraph(dom, node) {
            return None;
        }
        if let Some(sibling) = dom.next_sibling(node) {
            return Some(first_child(dom, sibling));
        }
        node = dom.parent(node)?;
    }
}
