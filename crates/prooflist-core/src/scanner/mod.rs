//! Scanner module: Turns paths on disk into hashable files
//!
//! Walks a file or directory tree, respecting .gitignore, and yields
//! [`DiskFile`](crate::pipeline::DiskFile)s in a stable order.

mod walker;

pub use walker::Scanner;
