//! Filtered pre-order traversal.

use super::arena::{NodeId, OdfDom};

/// Verdict of a [`TreeWalker`] filter for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// Yield the node and descend into it.
    Accept,
    /// Descend into the node without yielding it.
    Skip,
    /// Neither yield nor descend.
    Reject,
}

/// Pre-order walk over the descendants of `root` with a per-node filter.
///
/// The root itself is never yielded. Each node reached is passed to the
/// filter exactly once.
pub struct TreeWalker<'a, F> {
    dom: &'a OdfDom,
    root: NodeId,
    current: NodeId,
    filter: F,
}

impl<'a, F> TreeWalker<'a, F>
where
    F: FnMut(NodeId) -> FilterResult,
{
    pub fn new(dom: &'a OdfDom, root: NodeId, filter: F) -> Self {
        Self {
            dom,
            root,
            current: root,
            filter,
        }
    }

    /// Node the walker is positioned at.
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    /// Move to the next accepted node in document order.
    pub fn next_node(&mut self) -> Option<NodeId> {
        let mut node = self.current;
        let mut result = FilterResult::Accept;

        loop {
            // Descend unless the last verdict pruned this subtree
            while result != FilterResult::Reject {
                let Some(child) = self.dom.first_child(node) else {
                    break;
                };
                node = child;
                result = (self.filter)(node);
                if result == FilterResult::Accept {
                    self.current = node;
                    return Some(node);
                }
            }

            let mut temporary = node;
            let sibling = loop {
                if temporary == self.root {
                    return None;
                }
                if let Some(sibling) = self.dom.next_sibling(temporary) {
                    break sibling;
                }
                temporary = self.dom.parent(temporary)?;
            };

            node = sibling;
            result = (self.filter)(node);
            if result == FilterResult::Accept {
                self.current = node;
                return Some(node);
            }
        }
    }
}

impl<F> Iterator for TreeWalker<'_, F>
where
    F: FnMut(NodeId) -> FilterResult,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node()
    }
}
