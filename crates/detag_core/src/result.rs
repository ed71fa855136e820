//! Conversion result types.

use std::path::PathBuf;

use serde::Serialize;

use crate::extract::CRLF;

/// Result of converting a single file.
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    /// Path to the converted source file.
    pub path: PathBuf,

    /// Path the plain-text output belongs to.
    pub output_path: PathBuf,

    /// Number of text lines extracted.
    pub lines: usize,

    /// Whether the output file was actually written (false in dry-run mode).
    pub written: bool,

    /// The extracted text. Not serialized; reports carry paths and counts.
    #[serde(skip)]
    pub text: String,
}

impl ConvertResult {
    /// Creates a result for an output that was written to disk.
    pub fn written(path: PathBuf, output_path: PathBuf, text: String) -> Self {
        Self {
            path,
            output_path,
            lines: count_lines(&text),
            written: true,
            text,
        }
    }

    /// Creates a result for a dry run, where nothing was written.
    pub fn dry_run(path: PathBuf, output_path: PathBuf, text: String) -> Self {
        Self {
            path,
            output_path,
            lines: count_lines(&text),
            written: false,
            text,
        }
    }
}

/// Counts CRLF-terminated lines in extracted text.
pub(crate) fn count_lines(text: &str) -> usize {
    text.matches(CRLF).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn written_result_counts_lines() {
        let result = ConvertResult::written(
            PathBuf::from("a.html"),
            PathBuf::from("a.txt"),
            "one\r\ntwo\r\n".to_string(),
        );
        assert_eq!(result.lines, 2);
        assert!(result.written);
    }

    #[test]
    fn dry_run_result_is_not_written() {
        let result = ConvertResult::dry_run(
            PathBuf::from("a.html"),
            PathBuf::from("a.txt"),
            String::new(),
        );
        assert_eq!(result.lines, 0);
        assert!(!result.written);
    }

    #[test]
    fn serialization_skips_text() {
        let result = ConvertResult::written(
            PathBuf::from("a.html"),
            PathBuf::from("a.txt"),
            "secret\r\n".to_string(),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("a.html"));
        assert!(!json.contains("secret"));
    }
}
