//! Arena-based tree for ODF text content.
//!
//! All nodes live in one vector and refer to each other by [`NodeId`], so
//! queries borrow the whole tree immutably and never chase pointers.

use super::names::{AttrKey, Attribute, ElementKind, QName};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Tree root.
    Document,
    /// Element with its resolved kind and attributes.
    Element {
        name: QName,
        /// Pre-classified so predicates never look at the name.
        kind: ElementKind,
        attrs: Vec<Attribute>,
    },
    /// Text run.
    Text(String),
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-based document tree.
///
/// Nodes are never freed; detaching is not supported. Handles stay valid for
/// the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct OdfDom {
    nodes: Vec<Node>,
    document: NodeId,
}

impl OdfDom {
    /// Create a new tree holding only the document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId(0),
        };
        dom.document = dom.alloc(Node::new(NodeData::Document));
        dom
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Document root.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a detached element.
    pub fn create_element(&mut self, name: QName, attrs: Vec<Attribute>) -> NodeId {
        let kind = ElementKind::classify(&name);
        self.alloc(Node::new(NodeData::Element { name, kind, attrs }))
    }

    /// Create a detached text run.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text.into())))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// `child` must be detached.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).and_then(|n| n.last_child);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = Some(parent);
            child_node.prev_sibling = last_child;
            child_node.next_sibling = None;
        }

        if let Some(last) = last_child.and_then(|id| self.get_mut(id)) {
            last.next_sibling = Some(child);
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = Some(child);
            }
            parent_node.last_child = Some(child);
        }
    }

    /// Insert detached `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let Some((parent, prev)) = self.get(sibling).map(|n| (n.parent, n.prev_sibling)) else {
            return;
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = Some(sibling);
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = Some(new_node);
        }

        match prev {
            Some(prev) => {
                if let Some(p) = self.get_mut(prev) {
                    p.next_sibling = Some(new_node);
                }
            }
            None => {
                if let Some(par) = parent.and_then(|id| self.get_mut(id)) {
                    par.first_child = Some(new_node);
                }
            }
        }
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, name: QName, attrs: Vec<Attribute>) -> NodeId {
        let id = self.create_element(name, attrs);
        self.append(parent, id);
        id
    }

    /// Create a text run and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = self.create_text(text);
        self.append(parent, id);
        id
    }

    /// Number of nodes, including the document root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds only the document root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.first_child
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.last_child
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.prev_sibling
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next_sibling
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            dom: self,
            current: self.first_child(parent),
        }
    }

    /// Iterate over `root` and all its descendants in document order.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            root,
            next: self.get(root).map(|_| root),
        }
    }

    /// Find the first node matching a predicate, in document order.
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants(self.document)
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// Find the first element of the given kind.
    pub fn find_by_kind(&self, kind: ElementKind) -> Option<NodeId> {
        self.find(|node| matches!(&node.data, NodeData::Element { kind: k, .. } if *k == kind))
    }
}

impl Default for OdfDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct Children<'a> {
    dom: &'a OdfDom,
    current: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.dom.next_sibling(id);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    dom: &'a OdfDom,
    root: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = match self.dom.first_child(id) {
            Some(child) => Some(child),
            None => {
                let mut node = id;
                loop {
                    if node == self.root {
                        break None;
                    }
                    if let Some(sibling) = self.dom.next_sibling(node) {
                        break Some(sibling);
                    }
                    match self.dom.parent(node) {
                        Some(parent) => node = parent,
                        None => break None,
                    }
                }
            }
        };
        Some(id)
    }
}

/// Convenience accessors.
impl OdfDom {
    /// Element's qualified name.
    pub fn element_name(&self, id: NodeId) -> Option<&QName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        })
    }

    /// Element's resolved kind.
    pub fn element_kind(&self, id: NodeId) -> Option<ElementKind> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    /// Get an attribute value.
    pub fn attr(&self, id: NodeId, key: &AttrKey) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| &a.key == key)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Text(_)))
    }

    /// Character data of a text run.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Node length in the DOM sense: chars for a text run, child count otherwise.
    pub fn node_length(&self, id: NodeId) -> usize {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(s)) => s.chars().count(),
            Some(_) => self.children(id).count(),
            None => 0,
        }
    }

    /// Position of a node among its siblings.
    pub fn index_in_parent(&self, id: NodeId) -> usize {
        let mut index = 0;
        let mut current = self.previous_sibling(id);
        while let Some(prev) = current {
            index += 1;
            current = self.previous_sibling(prev);
        }
        index
    }

    /// Check whether `ancestor` is `node` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Concatenated text of all text runs under `id`.
    pub fn text_of(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|n| self.text_content(n))
            .collect()
    }
}
