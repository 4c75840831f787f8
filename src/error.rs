//! Errors raised while scanning a source tree

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("root directory does not exist: {0:?}")]
    RootNotFound(PathBuf),

    #[error("root is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// Traversal failed partway, e.g. a subdirectory is unreadable.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// CMake paths are text; a lossy rendering would name a file that does not exist.
    #[error("path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),
}
