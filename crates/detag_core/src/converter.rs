//! HTML-to-text conversion pipeline.
//!
//! Single-file conversion plus the batch orchestration around it: file
//! discovery, parallel fan-out with rayon, and success/failure
//! partitioning. Each output lands next to its source as a `.txt`
//! sibling.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use detag_dom::DomArena;
use detag_parser::{HtmlParser, Parser};

use crate::error::ConvertError;
use crate::extract::extract_text;
use crate::result::{ConvertResult, count_lines};
use crate::walker::{FileWalker, WalkConfig};

/// Largest source file the converter will read.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Result type for batch conversion.
///
/// Contains a tuple of:
/// - Successful conversion results
/// - Failed files with their errors (path and error)
pub type ConvertFilesResult = (Vec<ConvertResult>, Vec<(PathBuf, ConvertError)>);

/// Returns the output path for a source file: the same path with a `.txt`
/// extension.
pub fn sibling_text_path(path: &Path) -> PathBuf {
    path.with_extension("txt")
}

/// Options controlling a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Extract and report, but write no output files.
    pub dry_run: bool,
    /// Directory traversal settings.
    pub walk: WalkConfig,
}

/// The conversion engine.
///
/// Orchestrates file discovery, parsing, text extraction, and output
/// writing.
pub struct Converter {
    options: ConvertOptions,
    parser: HtmlParser,
}

impl Converter {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            parser: HtmlParser::new(),
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Discovers the files to convert from a mix of file and directory
    /// paths.
    ///
    /// Explicitly named files are taken as-is; directories are walked and
    /// filtered to files the parser recognizes by extension. A path that
    /// does not exist is an error.
    pub fn discover(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, ConvertError> {
        let mut files = Vec::new();
        let mut directories = Vec::new();

        for path in paths {
            if path.is_file() {
                files.push(path.clone());
            } else if path.is_dir() {
                directories.push(path.clone());
            } else {
                return Err(ConvertError::file(format!(
                    "No such file or directory: {}",
                    path.display()
                )));
            }
        }

        if !directories.is_empty() {
            let walker = FileWalker::new(self.options.walk.clone());
            for path in walker.walk(&directories) {
                let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if self.parser.can_parse(extension) {
                    files.push(path);
                }
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to convert", files.len());
        Ok(files)
    }

    /// Converts a single file.
    ///
    /// Reads the source, extracts its text, and writes the `.txt` sibling
    /// unless dry-run mode is active.
    pub fn convert_file(&self, path: &Path) -> Result<ConvertResult, ConvertError> {
        debug!("Converting {}", path.display());

        let metadata = fs::metadata(path).map_err(|e| {
            ConvertError::file(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(ConvertError::file(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConvertError::file(format!(
                "File size exceeds limit of {} bytes: {}",
                MAX_FILE_SIZE,
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConvertError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        let arena = DomArena::new();
        let root = self
            .parser
            .parse(&arena, &content)
            .map_err(|e| ConvertError::parse(e.to_string()))?;

        let text = extract_text(&root);
        let output_path = sibling_text_path(path);

        if self.options.dry_run {
            info!(
                "Dry run: would write {} ({} lines)",
                output_path.display(),
                count_lines(&text)
            );
            return Ok(ConvertResult::dry_run(
                path.to_path_buf(),
                output_path,
                text,
            ));
        }

        fs::write(&output_path, &text)?;
        debug!("Wrote {}", output_path.display());

        Ok(ConvertResult::written(path.to_path_buf(), output_path, text))
    }

    /// Converts a list of files in parallel using rayon.
    ///
    /// Returns a tuple of (successful results, failed files with errors).
    /// A failing file never aborts the batch.
    pub fn convert_files(&self, paths: &[PathBuf]) -> ConvertFilesResult {
        let results: Vec<Result<ConvertResult, (PathBuf, ConvertError)>> = paths
            .par_iter()
            .map(|path| self.convert_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(convert_result) => successes.push(convert_result),
                Err((path, error)) => {
                    warn!("Failed to convert {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        (successes, failures)
    }

    /// Discovers and converts everything under the given paths.
    pub fn run(&self, paths: &[PathBuf]) -> Result<ConvertFilesResult, ConvertError> {
        let files = self.discover(paths)?;
        Ok(self.convert_files(&files))
    }
}
