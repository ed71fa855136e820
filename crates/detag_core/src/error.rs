//! Converter error types.

use thiserror::Error;

/// Errors that can occur while converting files.
///
/// The extraction engine itself has no failure modes; everything here
/// belongs to the file and parse plumbing around it.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// File error (missing, not a regular file, oversized, not UTF-8).
    #[error("File error: {0}")]
    File(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn helpers_build_the_matching_variant() {
        assert_eq!(
            ConvertError::file("missing").to_string(),
            "File error: missing"
        );
        assert_eq!(
            ConvertError::parse("bad markup").to_string(),
            "Parse error: bad markup"
        );
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConvertError::from(io);
        assert!(matches!(error, ConvertError::Io(_)));
    }
}
