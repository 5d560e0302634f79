//! Arena-based element tree used as the quire rendering surface.
//!
//! This crate provides the concrete widget tree the paginator is rendered
//! into: a flat arena of nodes addressed by [`NodeId`] indices, with
//! parent/child/sibling links kept consistent by the mutation methods.
//!
//! # Design
//!
//! Arena allocation with index handles gives O(1) access and traversal in
//! any direction without borrow checker issues, and lets other components
//! hold on to `NodeId`s across mutations. Detached nodes stay allocated;
//! they simply become unreachable from the root until (re)attached.
//!
//! Beyond tree structure, nodes carry the two pieces of presentation state
//! pagination needs: a space-separated `class` attribute with token-level
//! manipulation, and a per-node hidden flag toggled by [`ElementTree::show`]
//! and [`ElementTree::hide`].

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// The attribute holding an element's space-separated class list.
const CLASS_ATTR: &str = "class";

/// A type-safe index into the element tree.
///
/// Handles stay valid for the lifetime of the tree: nodes are never
/// deallocated, only detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single node in the tree: its payload plus structural links.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with the per-kind payload.
    pub node_type: NodeType,

    /// The node this one is attached under, or `None` while detached.
    pub parent: Option<NodeId>,

    /// Attached children, in document order.
    pub children: Vec<NodeId>,

    /// The sibling immediately after this node under the same parent.
    pub next_sibling: Option<NodeId>,

    /// The sibling immediately before this node under the same parent.
    pub prev_sibling: Option<NodeId>,

    /// Whether the node is currently hidden from presentation.
    ///
    /// Hiding is a rendering concern only: a hidden node keeps its place
    /// in the tree and its children.
    pub hidden: bool,
}

/// The kind of a node.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The unique tree root. Never created by callers, never a child.
    Root,
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// A run of text, e.g. a control label.
    Text(String),
}

/// Element-specific data: tag name and attribute map.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// The element's tag name (`div`, `a`, ...).
    pub tag_name: String,
    /// The element's attributes, including its `class` list.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with the given tag and no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Whether `class` appears as a token in the `class` attribute.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get(CLASS_ATTR)
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Add `class` to the `class` attribute; no-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let entry = self.attrs.entry(CLASS_ATTR.to_string()).or_default();
        if entry.is_empty() {
            entry.push_str(class);
        } else {
            entry.push(' ');
            entry.push_str(class);
        }
    }

    /// Remove `class` from the `class` attribute; no-op if absent.
    pub fn remove_class(&mut self, class: &str) {
        let Some(list) = self.attrs.get(CLASS_ATTR) else {
            return;
        };
        let kept = list
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = self.attrs.insert(CLASS_ATTR.to_string(), kept);
    }
}

/// Arena-based element tree with O(1) node access and traversal.
///
/// All nodes live in one contiguous vector; every relationship is an index.
/// The root node is allocated at construction and is always
/// [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct ElementTree {
    /// All nodes ever allocated, indexed by `NodeId`.
    nodes: Vec<Node>,
}

impl ElementTree {
    /// Create a new tree holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        ElementTree {
            nodes: vec![Node {
                node_type: NodeType::Root,
                parent: None,
                children: Vec::new(),
                next_sibling: None,
                prev_sibling: None,
                hidden: false,
            }],
        }
    }

    /// The root node's ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Total number of nodes ever allocated (attached or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes. Always `false` in practice, since
    /// the root is allocated at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new detached node and return its ID.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
            hidden: false,
        });
        id
    }

    /// Allocate a detached element with the given tag and no attributes.
    pub fn alloc_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(tag)))
    }

    /// Allocate a detached text node.
    pub fn alloc_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeType::Text(text.to_string()))
    }

    /// Append `child` as the last child of `parent`, updating sibling links.
    ///
    /// `child` must be detached; use [`ElementTree::detach`] first when
    /// relocating an attached node.
    ///
    /// # Panics
    /// Panics if either ID is out of bounds, or if `child` is still
    /// attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[child.0].parent.is_none(),
            "append_child: child is still attached"
        );

        let prev_last = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Insert `new_child` into `parent`'s children immediately before
    /// `reference`.
    ///
    /// # Panics
    /// Panics if an ID is out of bounds, if `new_child` is still attached,
    /// or if `reference` is not a child of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, new_child: NodeId, reference: NodeId) {
        assert!(
            self.nodes[new_child.0].parent.is_none(),
            "insert_before: new child is still attached"
        );
        let position = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == reference)
            .expect("insert_before: reference is not a child of parent");

        self.nodes[parent.0].children.insert(position, new_child);
        self.nodes[new_child.0].parent = Some(parent);

        // Link into the sibling chain around the reference node.
        let before = self.nodes[reference.0].prev_sibling;
        if let Some(before_id) = before {
            self.nodes[before_id.0].next_sibling = Some(new_child);
        }
        self.nodes[new_child.0].prev_sibling = before;
        self.nodes[new_child.0].next_sibling = Some(reference);
        self.nodes[reference.0].prev_sibling = Some(new_child);
    }

    /// Remove `child` from `parent`, leaving `child` detached with its
    /// subtree intact.
    ///
    /// # Panics
    /// Panics if an ID is out of bounds or `child` is not a child of
    /// `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let position = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == child)
            .expect("remove_child: not a child of parent");
        let _ = self.nodes[parent.0].children.remove(position);

        // Bridge the sibling chain across the gap.
        let before = self.nodes[child.0].prev_sibling;
        let after = self.nodes[child.0].next_sibling;
        if let Some(before_id) = before {
            self.nodes[before_id.0].next_sibling = after;
        }
        if let Some(after_id) = after {
            self.nodes[after_id.0].prev_sibling = before;
        }

        self.nodes[child.0].parent = None;
        self.nodes[child.0].prev_sibling = None;
        self.nodes[child.0].next_sibling = None;
    }

    /// Detach `node` from its parent, if it has one. Subtree stays intact.
    ///
    /// # Panics
    /// Panics if the ID is out of bounds.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent {
            self.remove_child(parent, node);
        }
    }

    /// Move every child of `from` to the end of `to`'s children, keeping
    /// their relative order.
    ///
    /// # Panics
    /// Panics if an ID is out of bounds.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        let moved = std::mem::take(&mut self.nodes[from.0].children);
        for &child in &moved {
            self.nodes[child.0].parent = None;
            self.nodes[child.0].prev_sibling = None;
            self.nodes[child.0].next_sibling = None;
        }
        for child in moved {
            self.append_child(to, child);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Whether the node is an element (as opposed to text or the root).
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.as_element(id).is_some()
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Set an attribute on an element; no-op on non-element nodes.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(data) = self.as_element_mut(id) {
            let _ = data.attrs.insert(name.to_string(), value.to_string());
        }
    }

    /// Read an attribute from an element.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.as_element(id)
            .and_then(|data| data.attrs.get(name).map(String::as_str))
    }

    /// Whether an element carries `class` in its class list. `false` for
    /// non-element nodes.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.as_element(id).is_some_and(|data| data.has_class(class))
    }

    /// Add a class token to an element; no-op on non-element nodes.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.as_element_mut(id) {
            data.add_class(class);
        }
    }

    /// Remove a class token from an element; no-op on non-element nodes.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(data) = self.as_element_mut(id) {
            data.remove_class(class);
        }
    }

    /// Mark a node hidden from presentation.
    ///
    /// # Panics
    /// Panics if the ID is out of bounds.
    pub fn hide(&mut self, id: NodeId) {
        self.nodes[id.0].hidden = true;
    }

    /// Mark a node visible again.
    ///
    /// # Panics
    /// Panics if the ID is out of bounds.
    pub fn show(&mut self, id: NodeId) {
        self.nodes[id.0].hidden = false;
    }

    /// Whether the node itself is marked hidden (ancestors not considered).
    #[must_use]
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.hidden)
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a subtree to stdout, one node per line, indented by depth.
///
/// Elements render as `<tag class="...">` with a trailing `[hidden]`
/// marker when hidden; text nodes render quoted.
pub fn print_tree(tree: &ElementTree, id: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    let Some(node) = tree.get(id) else {
        return;
    };

    match &node.node_type {
        NodeType::Root => println!("{indent}#root"),
        NodeType::Element(data) => {
            let class = data
                .attrs
                .get(CLASS_ATTR)
                .map(|c| format!(" class=\"{c}\""))
                .unwrap_or_default();
            let hidden = if node.hidden { " [hidden]" } else { "" };
            println!("{indent}<{}{class}>{hidden}", data.tag_name);
        }
        NodeType::Text(text) => println!("{indent}\"{text}\""),
    }

    for &child in tree.children(id) {
        print_tree(tree, child, depth + 1);
    }
}
