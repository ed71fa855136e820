//! Visitor pattern for document tree traversal.
//!
//! [`walk_node`] performs a strict pre-order depth-first walk, visiting
//! every node exactly once and children in stored order. Element entry and
//! exit are reported separately so a visitor can track ancestor context
//! (the extractor uses this for its preserve-whitespace stack).
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use detag_dom::{DomArena, DomNode, Visitor, VisitResult, walk_node};
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_text(&mut self, node: &DomNode<'a>) -> VisitResult {
//!         if let Some(text) = node.value {
//!             self.texts.push(text);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = DomArena::new();
//! let text = arena.alloc(DomNode::new_text("hello"));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let doc = DomNode::new_document(children);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! let _ = walk_node(&mut collector, &doc);
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```

use std::ops::ControlFlow;

use crate::{DomNode, NodeKind};

/// Result of a visit callback. `Break` stops the traversal.
pub type VisitResult = ControlFlow<()>;

/// Read-only traversal over a document tree.
///
/// All callbacks default to continuing, so implementations override only
/// what they need.
pub trait Visitor<'a> {
    /// Called before an element's children are walked.
    fn enter_element(&mut self, node: &DomNode<'a>) -> VisitResult {
        let _ = node;
        ControlFlow::Continue(())
    }

    /// Called after an element's children have been walked.
    fn leave_element(&mut self, node: &DomNode<'a>) {
        let _ = node;
    }

    /// Called for every text node.
    fn visit_text(&mut self, node: &DomNode<'a>) -> VisitResult {
        let _ = node;
        ControlFlow::Continue(())
    }
}

/// Walks `node` and its descendants in document order.
pub fn walk_node<'a, V: Visitor<'a>>(visitor: &mut V, node: &DomNode<'a>) -> VisitResult {
    match node.kind {
        NodeKind::Document => walk_children(visitor, node),
        NodeKind::Element => {
            visitor.enter_element(node)?;
            let flow = walk_children(visitor, node);
            visitor.leave_element(node);
            flow
        }
        NodeKind::Text => visitor.visit_text(node),
    }
}

/// Walks all children of `node` in stored order.
pub fn walk_children<'a, V: Visitor<'a>>(visitor: &mut V, node: &DomNode<'a>) -> VisitResult {
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}
