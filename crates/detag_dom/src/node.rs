//! DomNode definition.

use crate::tags::preserves_whitespace;

/// The kind of a document tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root.
    Document,
    /// An element carrying a tag name and children.
    Element,
    /// A text node carrying raw, entity-decoded character data.
    Text,
}

/// A node in the document tree.
///
/// Nodes are allocated in a [`DomArena`](crate::DomArena); the `'a`
/// lifetime ties each node to its arena so child slices and string data
/// remain valid for the tree's whole life. The tree is read-only once
/// built.
#[derive(Debug, Clone, Copy)]
pub struct DomNode<'a> {
    /// The kind of this node.
    pub kind: NodeKind,

    /// Lowercase tag name (elements only).
    pub name: Option<&'a str>,

    /// Whether this element's content keeps its whitespace verbatim.
    ///
    /// Resolved once at construction from the tag table, so traversal
    /// never needs to consult tag names again.
    pub preserve: bool,

    /// Child nodes in stored (document) order.
    pub children: &'a [DomNode<'a>],

    /// Raw character data (text nodes only).
    pub value: Option<&'a str>,
}

impl<'a> DomNode<'a> {
    /// Creates the document root node.
    #[inline]
    pub const fn new_document(children: &'a [DomNode<'a>]) -> Self {
        Self {
            kind: NodeKind::Document,
            name: None,
            preserve: false,
            children,
            value: None,
        }
    }

    /// Creates an element node. The preserve-whitespace flag is looked up
    /// from the tag table.
    #[inline]
    pub fn new_element(name: &'a str, children: &'a [DomNode<'a>]) -> Self {
        Self {
            kind: NodeKind::Element,
            name: Some(name),
            preserve: preserves_whitespace(name),
            children,
            value: None,
        }
    }

    /// Creates a text node.
    #[inline]
    pub const fn new_text(value: &'a str) -> Self {
        Self {
            kind: NodeKind::Text,
            name: None,
            preserve: false,
            children: &[],
            value: Some(value),
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Returns true if this node is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Returns the raw text of this node, if it is a text node.
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomArena;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_document() {
        let node = DomNode::new_document(&[]);
        assert_eq!(node.kind, NodeKind::Document);
        assert!(!node.has_children());
        assert!(node.name.is_none());
    }

    #[test]
    fn test_new_element() {
        let arena = DomArena::new();
        let child = arena.alloc(DomNode::new_text("hello"));
        let children = arena.alloc_slice_copy(&[*child]);
        let node = DomNode::new_element("p", children);

        assert_eq!(node.kind, NodeKind::Element);
        assert_eq!(node.name, Some("p"));
        assert!(!node.preserve);
        assert!(node.has_children());
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_new_element_resolves_preserve_flag() {
        let node = DomNode::new_element("pre", &[]);
        assert!(node.preserve);

        let node = DomNode::new_element("div", &[]);
        assert!(!node.preserve);
    }

    #[test]
    fn test_new_text() {
        let node = DomNode::new_text("hello");

        assert_eq!(node.kind, NodeKind::Text);
        assert!(node.is_text());
        assert_eq!(node.text(), Some("hello"));
        assert!(!node.has_children());
    }

    #[test]
    fn test_nested_elements() {
        let arena = DomArena::new();

        let text = arena.alloc(DomNode::new_text("Foo"));
        let span_children = arena.alloc_slice_copy(&[*text]);
        let span = arena.alloc(DomNode::new_element("span", span_children));
        let div_children = arena.alloc_slice_copy(&[*span]);
        let div = DomNode::new_element("div", div_children);

        assert_eq!(div.name, Some("div"));
        assert_eq!(div.children[0].name, Some("span"));
        assert_eq!(div.children[0].children[0].value, Some("Foo"));
    }

    #[test]
    fn test_text_method_on_element() {
        let node = DomNode::new_element("div", &[]);
        assert!(node.text().is_none());
        assert!(node.is_element());
        assert!(!node.is_text());
    }
}
