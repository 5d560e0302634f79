//! The rendering-surface capability interface.
//!
//! The engine never names a concrete widget toolkit; everything it needs
//! from the host document is collected in the narrow [`Surface`] trait:
//! element creation, attachment, visibility, and class toggling. The
//! arena tree from `quire-dom` implements it and is what the tests and
//! the CLI run against, but any document representation that can satisfy
//! these operations can host a paginator.

use quire_dom::{ElementTree, NodeId};

/// Operations the pagination engine requires from a host document.
///
/// Handles are small copyable tokens naming nodes; the surface owns the
/// nodes themselves. `append_child` has DOM-style move semantics: an
/// attached node is detached from its current parent first, so appending
/// is also how elements relocate between containers.
pub trait Surface {
    /// Node handle type. Must stay valid across mutations.
    type Handle: Copy + Eq;

    /// Create a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> Self::Handle;

    /// Create a detached text node, e.g. a control label.
    fn create_text(&mut self, text: &str) -> Self::Handle;

    /// Append `child` as the last child of `parent`, detaching it from
    /// any current parent first.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// Detach `node` from its parent; the subtree stays intact.
    fn remove(&mut self, node: Self::Handle);

    /// Snapshot the children of `node`, in document order.
    fn children(&self, node: Self::Handle) -> Vec<Self::Handle>;

    /// Whether `node` is an element (text nodes are not paginated).
    fn is_element(&self, node: Self::Handle) -> bool;

    /// Move every child of `from` to the end of `to`, preserving order.
    fn move_children(&mut self, from: Self::Handle, to: Self::Handle);

    /// Make `node` visible.
    fn show(&mut self, node: Self::Handle);

    /// Hide `node` from presentation.
    fn hide(&mut self, node: Self::Handle);

    /// Add a class token to `node`.
    fn add_class(&mut self, node: Self::Handle, class: &str);

    /// Remove a class token from `node`.
    fn remove_class(&mut self, node: Self::Handle, class: &str);

    /// Whether `node` carries the class token.
    fn has_class(&self, node: Self::Handle, class: &str) -> bool;

    /// Set an attribute on `node`.
    fn set_attribute(&mut self, node: Self::Handle, name: &str, value: &str);
}

impl Surface for ElementTree {
    type Handle = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc_element(tag)
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc_text(text)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // The arena's append requires a detached child; the trait promises
        // move semantics.
        self.detach(child);
        ElementTree::append_child(self, parent, child);
    }

    fn remove(&mut self, node: NodeId) {
        self.detach(node);
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        ElementTree::children(self, node).to_vec()
    }

    fn is_element(&self, node: NodeId) -> bool {
        ElementTree::is_element(self, node)
    }

    fn move_children(&mut self, from: NodeId, to: NodeId) {
        ElementTree::move_children(self, from, to);
    }

    fn show(&mut self, node: NodeId) {
        ElementTree::show(self, node);
    }

    fn hide(&mut self, node: NodeId) {
        ElementTree::hide(self, node);
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        ElementTree::add_class(self, node, class);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        ElementTree::remove_class(self, node, class);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        ElementTree::has_class(self, node, class)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        ElementTree::set_attribute(self, node, name, value);
    }
}
