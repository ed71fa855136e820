//! Parser trait definition.

use detag_dom::{DomArena, DomNode};

use crate::ParseError;

/// Trait for parsing raw markup into a document tree.
///
/// Implementations allocate every node, tag name, and text value in the
/// caller's arena; the returned root borrows from it.
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions do not include the leading dot (e.g. `["html", "htm"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the markup into a document tree.
    ///
    /// # Arguments
    ///
    /// * `arena` - The arena allocator for tree nodes
    /// * `source` - The raw markup to parse
    ///
    /// # Returns
    ///
    /// The root `DomNode` of the parsed tree, or an error if parsing fails.
    fn parse<'a>(&self, arena: &'a DomArena, source: &str) -> Result<DomNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
