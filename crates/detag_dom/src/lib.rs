//! # detag_dom
//!
//! Document tree definitions for detag.
//!
//! This crate provides the read-only tree the text extractor walks: a
//! `DomNode` variant over document, element, and text nodes, together with
//! the preserve-whitespace tag table and a visitor for document-order
//! traversal.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation
//! - All nodes for one parsed document live in a single arena
//! - Nodes are `Copy` and reference their children as arena slices
//! - Memory is freed all at once when the arena is dropped
//!
//! ## Example
//!
//! ```rust
//! use detag_dom::{DomArena, DomNode};
//!
//! let arena = DomArena::new();
//! let text = arena.alloc(DomNode::new_text("hello"));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let paragraph = DomNode::new_element("p", children);
//! assert!(!paragraph.preserve);
//! ```

mod arena;
mod node;
mod tags;
pub mod visitor;

pub use arena::DomArena;
pub use node::{DomNode, NodeKind};
pub use tags::{contains_data, preserves_whitespace};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, walk_children, walk_node};
