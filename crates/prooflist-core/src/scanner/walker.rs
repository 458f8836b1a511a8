//! File walker: Discovers files under a root path

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::pipeline::DiskFile;

/// Scanner for discovering files to hash
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    skip_hidden: bool,
    respect_ignore: bool,
}

impl Scanner {
    /// Create a new scanner for a file or directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_hidden: false,
            respect_ignore: true,
        }
    }

    /// Skip dot-files and dot-directories
    #[must_use]
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Whether .gitignore and friends are honoured
    #[must_use]
    pub fn respect_ignore(mut self, respect: bool) -> Self {
        self.respect_ignore = respect;
        self
    }

    /// Walk the root and return the files found, sorted by name per directory
    pub fn scan(&self) -> impl Iterator<Item = DiskFile> + '_ {
        WalkBuilder::new(&self.root)
            .hidden(self.skip_hidden)
            .git_ignore(self.respect_ignore)
            .git_global(self.respect_ignore)
            .git_exclude(self.respect_ignore)
            .ignore(self.respect_ignore)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| DiskFile::new(entry.into_path()))
    }

    /// Get the root being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
