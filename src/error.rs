//! Export error taxonomy.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of an export run.
///
/// Every variant aborts the run. Files written before the failure stay on
/// disk and are not reported.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Path is not a repository, or its history or diffs cannot be read.
    #[error("cannot read repository at {}: {message}", path.display())]
    RepositoryAccess { path: PathBuf, message: String },

    /// Output directory or a page could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Wraps a git failure, keeping the full context chain as the message.
    pub(crate) fn repository(path: &Path, err: anyhow::Error) -> Self {
        Self::RepositoryAccess {
            path: path.to_path_buf(),
            message: format!("{:#}", err),
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true for repository access failures.
    pub fn is_repository_access(&self) -> bool {
        matches!(self, Self::RepositoryAccess { .. })
    }

    /// Returns true for output write failures.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_keeps_context_chain() {
        // Arrange
        let inner = anyhow::anyhow!("not a git repository").context("Failed to open repository");

        // Act
        let err = ExportError::repository(Path::new("/tmp/nowhere"), inner);

        // Assert
        assert!(err.is_repository_access());
        let text = err.to_string();
        assert!(text.contains("/tmp/nowhere"));
        assert!(text.contains("Failed to open repository: not a git repository"));
    }

    #[test]
    fn test_write_error_exposes_source() {
        // Arrange
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

        // Act
        let err = ExportError::write(Path::new("out/1_commit_abc_.html"), io);

        // Assert
        assert!(err.is_write());
        assert!(!err.is_repository_access());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("1_commit_abc_.html"));
    }
}
