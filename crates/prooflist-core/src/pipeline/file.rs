//! File-like inputs for the hashing pipeline

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use futures::FutureExt;

/// A named blob of bytes the pipeline can hash
pub trait FileSource: Send + Sync {
    /// File name as supplied by the user, extension included
    fn name(&self) -> &str;

    /// Size in bytes as reported by the source
    fn size(&self) -> u64;

    /// Materialize the full contents
    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>>;
}

impl<T: FileSource + ?Sized> FileSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        (**self).read()
    }
}

impl<T: FileSource + ?Sized> FileSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        (**self).read()
    }
}

/// A file whose contents are already in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl FileSource for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        future::ready(Ok(self.bytes.clone())).boxed()
    }
}

/// A file on disk, read lazily when its turn in the batch comes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl DiskFile {
    /// Create a disk file; size is taken from the current metadata (0 if unavailable)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        Self::with_size(path, size)
    }

    /// Create a disk file with an already known size
    #[must_use]
    pub fn with_size(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name, size }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileSource for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        tokio::fs::read(&self.path).boxed()
    }
}
