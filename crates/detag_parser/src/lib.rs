//! # detag_parser
//!
//! Parser abstraction layer for detag.
//!
//! This crate provides:
//! - A `Parser` trait for markup front ends
//! - The built-in HTML parser using `html5ever`
//!
//! ## Architecture
//!
//! Parsers convert raw markup into the arena-allocated document tree from
//! `detag_dom`. Tag semantics (the preserve-whitespace flag) are resolved
//! during this conversion, so the extraction engine never inspects tag
//! names itself.
//!
//! ## Example
//!
//! ```rust
//! use detag_dom::DomArena;
//! use detag_parser::{HtmlParser, Parser};
//!
//! let arena = DomArena::new();
//! let parser = HtmlParser::new();
//! let root = parser.parse(&arena, "<p>Hello</p>").unwrap();
//! assert!(root.has_children());
//! ```

mod error;
mod html;
mod traits;

pub use error::ParseError;
pub use html::HtmlParser;
pub use traits::Parser;
