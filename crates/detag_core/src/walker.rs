//! Parallel file discovery using the `ignore` crate.
//!
//! Walks directory trees with `ignore::WalkBuilder`'s parallel traversal
//! and collects regular files through a crossbeam channel. Gitignore
//! handling is opt-in: conversion input often lives outside any
//! repository, so nothing is skipped unless the caller asks for it.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use ignore::{DirEntry, Error, ParallelVisitor, ParallelVisitorBuilder, WalkBuilder, WalkState};
use tracing::{debug, info};

/// Configuration for parallel file walking.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Whether to respect `.gitignore` files.
    /// Default: false
    pub respect_gitignore: bool,
    /// Whether to include hidden files (files starting with `.`).
    /// Default: false (excludes hidden files)
    pub include_hidden: bool,
    /// Number of threads to use for parallel walking.
    /// Default: 0 (uses all available CPUs)
    pub threads: usize,
    /// Whether to follow symbolic links.
    /// Default: false
    pub follow_links: bool,
    /// Maximum directory depth to traverse.
    /// Default: None (no limit)
    pub max_depth: Option<usize>,
    /// Glob patterns to exclude.
    pub exclude_patterns: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            include_hidden: false,
            threads: 0,
            follow_links: false,
            max_depth: None,
            exclude_patterns: Vec::new(),
        }
    }
}

impl WalkConfig {
    /// Creates a new `WalkConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables `.gitignore` support.
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }

    /// Enables or disables hidden file inclusion.
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }

    /// Sets the number of threads for parallel walking.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = n;
        self
    }

    /// Sets whether to follow symbolic links.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Sets the maximum directory depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Adds an exclude glob pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }
}

/// Parallel file walker built on `ignore::WalkBuilder`.
pub struct FileWalker {
    config: WalkConfig,
}

impl FileWalker {
    /// Creates a new `FileWalker` with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Creates a new `FileWalker` with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(WalkConfig::default())
    }

    /// Walks the given paths in parallel and returns all discovered files.
    pub fn walk(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        if paths.is_empty() {
            return Vec::new();
        }

        let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(1024);

        let mut builder = WalkBuilder::new(&paths[0]);
        for path in &paths[1..] {
            builder.add(path);
        }

        builder
            .git_ignore(self.config.respect_gitignore)
            .git_global(self.config.respect_gitignore)
            .git_exclude(self.config.respect_gitignore)
            .hidden(!self.config.include_hidden)
            .follow_links(self.config.follow_links)
            .threads(self.config.threads);

        if let Some(depth) = self.config.max_depth {
            builder.max_depth(Some(depth));
        }

        let exclude_matcher = Arc::new(ExcludeMatcher::new(&self.config.exclude_patterns));

        // Collect on a separate thread; with the bounded channel, workers
        // would block once 1024 paths are in flight if collection waited
        // for visit() to finish.
        let receiver_handle = Self::spawn_receiver(rx);

        let mut visitor_builder = FileVisitorBuilder {
            tx,
            exclude_matcher,
        };

        let walker = builder.build_parallel();
        walker.visit(&mut visitor_builder);

        // Drop the sender to close the channel
        drop(visitor_builder);

        let results = receiver_handle.join().unwrap_or_default();

        info!("FileWalker: discovered {} files", results.len());

        results
    }

    fn spawn_receiver(rx: Receiver<PathBuf>) -> thread::JoinHandle<Vec<PathBuf>> {
        thread::spawn(move || rx.iter().collect())
    }

    /// Walks a single path in parallel.
    pub fn walk_path(&self, path: impl AsRef<Path>) -> Vec<PathBuf> {
        self.walk(&[path.as_ref().to_path_buf()])
    }
}

/// Visitor builder for parallel walking.
struct FileVisitorBuilder {
    tx: Sender<PathBuf>,
    exclude_matcher: Arc<ExcludeMatcher>,
}

impl<'s> ParallelVisitorBuilder<'s> for FileVisitorBuilder {
    fn build(&mut self) -> Box<dyn ParallelVisitor + 's> {
        Box::new(FileVisitor {
            tx: self.tx.clone(),
            exclude_matcher: Arc::clone(&self.exclude_matcher),
        })
    }
}

/// Per-thread visitor for parallel walking.
struct FileVisitor {
    tx: Sender<PathBuf>,
    exclude_matcher: Arc<ExcludeMatcher>,
}

impl ParallelVisitor for FileVisitor {
    fn visit(&mut self, entry: Result<DirEntry, Error>) -> WalkState {
        match entry {
            Ok(dir_entry) => {
                if dir_entry.file_type().is_some_and(|ft| ft.is_file()) {
                    let path = dir_entry.path();
                    if self.exclude_matcher.should_include(path) {
                        let _ = self.tx.send(path.to_path_buf());
                    }
                }
            }
            Err(e) => {
                debug!("Walk error: {}", e);
            }
        }
        WalkState::Continue
    }
}

/// Exclude-pattern matcher for filtering discovered files.
struct ExcludeMatcher {
    exclude_set: Option<globset::GlobSet>,
}

impl ExcludeMatcher {
    fn new(exclude_patterns: &[String]) -> Self {
        Self {
            exclude_set: Self::build_globset(exclude_patterns),
        }
    }

    /// Builds a GlobSet from a list of patterns.
    ///
    /// Returns `None` if the pattern list is empty.
    /// Logs a warning for any invalid patterns.
    fn build_globset(patterns: &[String]) -> Option<globset::GlobSet> {
        use globset::{Glob, GlobSetBuilder};

        if patterns.is_empty() {
            return None;
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    tracing::warn!("Invalid exclude glob pattern {:?}: {}", pattern, e);
                }
            }
        }
        match builder.build() {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::warn!("Failed to build exclude glob set: {}", e);
                None
            }
        }
    }

    fn should_include(&self, path: &Path) -> bool {
        match self.exclude_set {
            Some(ref exclude) => !exclude.is_match(path),
            None => true,
        }
    }
}
