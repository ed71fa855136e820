//! HTML parser using html5ever.
//!
//! This parser runs html5ever's spec-conformant tree construction into an
//! `RcDom`, then converts the rcdom tree into arena-allocated `DomNode`s.
//! Doctypes, comments, and processing instructions carry no visible text
//! and are dropped during conversion, as are the bodies of data elements
//! (`script`, `style`); character references are already decoded by the
//! tokenizer.

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use detag_dom::{DomArena, DomNode, contains_data};

use crate::{ParseError, Parser};

/// HTML parser implementation.
///
/// html5ever recovers from malformed markup the way browsers do, so
/// parsing never fails on bad input; it yields the repaired tree instead.
pub struct HtmlParser;

impl HtmlParser {
    /// Creates a new HTML parser.
    pub fn new() -> Self {
        Self
    }

    fn parse_options() -> ParseOpts {
        ParseOpts {
            tree_builder: TreeBuilderOpts {
                drop_doctype: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Converts an rcdom node to a DomNode, or `None` for node kinds that
    /// contribute no visible text.
    fn convert_node<'a>(&self, arena: &'a DomArena, handle: &Handle) -> Option<DomNode<'a>> {
        match &handle.data {
            NodeData::Document => {
                let children = self.convert_children(arena, handle);
                Some(DomNode::new_document(children))
            }

            NodeData::Element { name, .. } => {
                let tag = arena.alloc_str(&name.local);
                // Script and style bodies are embedded data, not visible
                // text; their subtrees are dropped here.
                let children = if contains_data(tag) {
                    &[]
                } else {
                    self.convert_children(arena, handle)
                };
                Some(DomNode::new_element(tag, children))
            }

            NodeData::Text { contents } => {
                let value = arena.alloc_str(&contents.borrow());
                Some(DomNode::new_text(value))
            }

            NodeData::Doctype { .. }
            | NodeData::Comment { .. }
            | NodeData::ProcessingInstruction { .. } => None,
        }
    }

    fn convert_children<'a>(&self, arena: &'a DomArena, handle: &Handle) -> &'a [DomNode<'a>] {
        let converted: Vec<DomNode<'a>> = handle
            .children
            .borrow()
            .iter()
            .filter_map(|child| self.convert_node(arena, child))
            .collect();
        arena.alloc_slice_copy(&converted)
    }
}

impl Parser for HtmlParser {
    fn name(&self) -> &str {
        "html"
    }

    fn extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn parse<'a>(&self, arena: &'a DomArena, source: &str) -> Result<DomNode<'a>, ParseError> {
        let dom = parse_document(RcDom::default(), Self::parse_options())
            .one(StrTendril::from(source));

        self.convert_node(arena, &dom.document)
            .ok_or_else(|| ParseError::internal("document root missing"))
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
