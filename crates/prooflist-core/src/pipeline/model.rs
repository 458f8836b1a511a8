//! Result records

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a result; never reused
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(String);

impl ResultId {
    pub(crate) fn generate() -> Self {
        Self(format!("file-{}", Uuid::new_v4()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResultId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ResultId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One successfully hashed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// Unique identifier
    pub id: ResultId,
    /// Normalized base name
    pub name: String,
    /// Extension without the leading period (may be empty)
    pub extension: String,
    /// Lowercase hex SHA-256
    pub hash: String,
}

impl FileResult {
    /// `name.extension`, or just `name` when there is no extension
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }
}

/// The `(hash, name, extension)` triple handed to export formatters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub hash: String,
    pub name: String,
    pub extension: String,
}

impl From<&FileResult> for ExportRow {
    fn from(result: &FileResult) -> Self {
        Self {
            hash: result.hash.clone(),
            name: result.name.clone(),
            extension: result.extension.clone(),
        }
    }
}
