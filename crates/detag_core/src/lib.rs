//! # detag_core
//!
//! Core conversion engine for detag.
//!
//! This crate provides:
//! - Document-order text extraction with whitespace normalization
//! - Parallel file discovery
//! - Single-file and batch HTML-to-text conversion
//!
//! ## Example
//!
//! ```rust,ignore
//! use detag_core::{ConvertOptions, Converter};
//!
//! let converter = Converter::new(ConvertOptions::default());
//! let (results, failures) = converter.run(&[path]);
//! for result in results {
//!     println!("{} -> {}", result.path.display(), result.output_path.display());
//! }
//! ```

mod converter;
mod error;
pub mod extract;
pub mod normalize;
mod result;
pub mod walker;

pub use converter::{
    ConvertFilesResult, ConvertOptions, Converter, MAX_FILE_SIZE, sibling_text_path,
};
pub use error::ConvertError;
pub use extract::{CRLF, extract_text};
pub use normalize::normalize;
pub use result::ConvertResult;
pub use walker::{FileWalker, WalkConfig};
