//! Document-order text extraction.
//!
//! The extractor walks the document tree in a strict pre-order
//! depth-first traversal, normalizes each text fragment according to the
//! whitespace mode inherited from its enclosing elements, and emits every
//! non-blank fragment as a trimmed, CRLF-terminated line. Element
//! boundaries themselves insert nothing; two adjacent text nodes always
//! become two lines.

use std::ops::ControlFlow;

use detag_dom::{DomNode, VisitResult, Visitor, walk_node};

use crate::normalize::{last_char_is_space, normalize};

/// Line terminator appended after every emitted fragment.
pub const CRLF: &str = "\r\n";

/// How many enclosing elements the preserve-whitespace lookup inspects.
///
/// Only the six nearest enclosing elements are consulted; a
/// preserve-whitespace element further out does not apply.
// TODO: revisit the depth cap; preformatted content nested more than six
// elements deep falls back to collapsing.
const PRESERVE_LOOKUP_DEPTH: usize = 6;

/// Extracts the visible text of a document tree.
///
/// Returns zero or more trimmed, non-blank lines in document order, each
/// terminated with CRLF. Whitespace-only text nodes contribute nothing.
/// The input tree is never mutated and extraction cannot fail.
pub fn extract_text(root: &DomNode<'_>) -> String {
    let mut extractor = TextExtractor::new();
    let _ = walk_node(&mut extractor, root);
    extractor.into_output()
}

/// Visitor that accumulates normalized text lines.
struct TextExtractor {
    /// Preserve flags of the currently open elements, innermost last.
    element_stack: Vec<bool>,
    output: String,
}

impl TextExtractor {
    fn new() -> Self {
        Self {
            element_stack: Vec::new(),
            output: String::new(),
        }
    }

    fn into_output(self) -> String {
        self.output
    }

    /// Whether the current position is inside a preserve-whitespace
    /// element, looking at the nearest [`PRESERVE_LOOKUP_DEPTH`] enclosing
    /// elements only.
    fn in_preserve_context(&self) -> bool {
        self.element_stack
            .iter()
            .rev()
            .take(PRESERVE_LOOKUP_DEPTH)
            .any(|&preserve| preserve)
    }
}

impl<'a> Visitor<'a> for TextExtractor {
    fn enter_element(&mut self, node: &DomNode<'a>) -> VisitResult {
        self.element_stack.push(node.preserve);
        ControlFlow::Continue(())
    }

    fn leave_element(&mut self, _node: &DomNode<'a>) {
        self.element_stack.pop();
    }

    fn visit_text(&mut self, node: &DomNode<'a>) -> VisitResult {
        if let Some(raw) = node.value {
            let preserve = self.in_preserve_context();
            let normalized = normalize(raw, preserve, last_char_is_space(raw));

            // Line-level trim applies to both modes; preserve mode keeps
            // internal runs verbatim but still emits a trimmed line.
            let line = normalized.trim();
            if !line.is_empty() {
                self.output.push_str(line);
                self.output.push_str(CRLF);
            }
        }
        ControlFlow::Continue(())
    }
}
