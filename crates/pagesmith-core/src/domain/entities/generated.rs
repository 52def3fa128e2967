use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::RelativePath, error::DomainError, value_objects::FileKind,
};

/// One output file, ready to be written verbatim under a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: RelativePath,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

impl GeneratedFile {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        kind: FileKind,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            content: content.into(),
            kind,
        })
    }

    pub fn component(path: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(path, content, FileKind::Component)
    }

    pub fn config(path: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(path, content, FileKind::Config)
    }

    pub fn style(path: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(path, content, FileKind::Style)
    }

    pub fn test(path: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(path, content, FileKind::Test)
    }

    pub fn documentation(path: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(path, content, FileKind::Documentation)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Reject two files for the same path within one export.
pub fn ensure_unique_paths(files: &[GeneratedFile]) -> Result<(), DomainError> {
    let mut seen = std::collections::HashSet::new();
    for file in files {
        if !seen.insert(file.path.as_str()) {
            return Err(DomainError::DuplicatePath {
                path: file.path.to_string(),
            });
        }
    }
    Ok(())
}
