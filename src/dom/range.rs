//! Boundary points and ranges over an [`OdfDom`].
//!
//! Offsets follow the DOM convention: a char offset inside a text run, or a
//! child index inside any other node.

use std::cmp::Ordering;

use super::arena::{NodeId, OdfDom};

/// A position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryPoint {
    pub node: NodeId,
    pub offset: usize,
}

impl BoundaryPoint {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Which boundary of each range [`Range::compare_boundary_points`] compares.
///
/// Named after the DOM constants: the first half names the boundary of the
/// source range, the second half the boundary of `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryComparison {
    /// `self.start` against `source.start`.
    StartToStart,
    /// `self.end` against `source.start`.
    StartToEnd,
    /// `self.end` against `source.end`.
    EndToEnd,
    /// `self.start` against `source.end`.
    EndToStart,
}

/// A contiguous span of the tree between two boundary points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: BoundaryPoint,
    pub end: BoundaryPoint,
}

impl Range {
    /// Create a range. `start` must not come after `end`.
    pub fn new(start: BoundaryPoint, end: BoundaryPoint) -> Self {
        Self { start, end }
    }

    /// Range spanning `start_offset` in `start_node` to `end_offset` in `end_node`.
    pub fn between(start_node: NodeId, start_offset: usize, end_node: NodeId, end_offset: usize) -> Self {
        Self::new(
            BoundaryPoint::new(start_node, start_offset),
            BoundaryPoint::new(end_node, end_offset),
        )
    }

    /// Empty range at a single point.
    pub fn collapsed(point: BoundaryPoint) -> Self {
        Self::new(point, point)
    }

    /// Range covering the contents of `node`.
    pub fn select_node_contents(dom: &OdfDom, node: NodeId) -> Self {
        Self::between(node, 0, node, dom.node_length(node))
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Deepest node containing both boundary points.
    pub fn common_ancestor_container(&self, dom: &OdfDom) -> NodeId {
        let mut ancestor = self.start.node;
        while !dom.is_inclusive_ancestor(ancestor, self.end.node) {
            match dom.parent(ancestor) {
                Some(parent) => ancestor = parent,
                None => break,
            }
        }
        ancestor
    }

    /// Compare one boundary of `self` with one boundary of `source`.
    pub fn compare_boundary_points(
        &self,
        dom: &OdfDom,
        how: BoundaryComparison,
        source: &Range,
    ) -> Ordering {
        let (this, other) = match how {
            BoundaryComparison::StartToStart => (self.start, source.start),
            BoundaryComparison::StartToEnd => (self.end, source.start),
            BoundaryComparison::EndToEnd => (self.end, source.end),
            BoundaryComparison::EndToStart => (self.start, source.end),
        };
        compare_points(dom, this, other)
    }
}

/// Order of two boundary points in the tree.
pub fn compare_points(dom: &OdfDom, a: BoundaryPoint, b: BoundaryPoint) -> Ordering {
    if a.node == b.node {
        return a.offset.cmp(&b.offset);
    }
    if tree_order(dom, a.node, b.node) == Ordering::Greater {
        return compare_after_node(dom, b, a).reverse();
    }
    compare_after_node(dom, a, b)
}

/// `a.node` precedes `b.node` in tree order.
fn compare_after_node(dom: &OdfDom, a: BoundaryPoint, b: BoundaryPoint) -> Ordering {
    if dom.is_inclusive_ancestor(a.node, b.node) {
        let mut child = b.node;
        while let Some(parent) = dom.parent(child) {
            if parent == a.node {
                break;
            }
            child = parent;
        }
        if dom.index_in_parent(child) < a.offset {
            return Ordering::Greater;
        }
    }
    Ordering::Less
}

/// Pre-order position of two nodes.
///
/// Nodes in different detached subtrees are ordered by their roots.
pub fn tree_order(dom: &OdfDom, a: NodeId, b: NodeId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let path_a = path_from_root(dom, a);
    let path_b = path_from_root(dom, b);

    if path_a[0] != path_b[0] {
        return path_a[0].cmp(&path_b[0]);
    }

    let shared = path_a
        .iter()
        .zip(&path_b)
        .take_while(|(x, y)| x == y)
        .count();

    match (path_a.get(shared), path_b.get(shared)) {
        // One is an ancestor of the other
        (None, _) => Ordering::Less,
        (_, None) => Ordering::Greater,
        (Some(&x), Some(&y)) => dom.index_in_parent(x).cmp(&dom.index_in_parent(y)),
    }
}

fn path_from_root(dom: &OdfDom, node: NodeId) -> Vec<NodeId> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(parent) = dom.parent(current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
