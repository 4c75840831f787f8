use crate::error::ScanError;
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lazy, single-pass sequence of every file below a root directory.
///
/// Yields paths in whatever order the underlying traversal produces them.
/// Nothing is filtered out: hidden files and `.gitignore`d files are included.
pub struct FileWalker {
    inner: Walk,
}

impl Iterator for FileWalker {
    type Item = Result<PathBuf, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(ScanError::Walk(err))),
            };

            let Some(ft) = entry.file_type() else {
                continue;
            };
            if ft.is_file() {
                return Some(Ok(entry.into_path()));
            }
            // Symlinks are not descended into, but a link to a regular file counts.
            if ft.is_symlink() {
                if entry.path().is_file() {
                    return Some(Ok(entry.into_path()));
                }
                debug!(path = %entry.path().display(), "skipping symlink that does not point to a file");
            }
        }
    }
}

pub fn walk_files(root: &Path) -> Result<FileWalker, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);

    Ok(FileWalker {
        inner: builder.build(),
    })
}
