//! Core types shared across srclist modules

use std::path::Path;

/// Kind of file tracked in the generated lists, decided by file name suffix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// `*.cpp`
    Source,
    /// `*.h`
    Header,
}

impl FileCategory {
    pub const SOURCE_SUFFIX: &'static str = ".cpp";
    pub const HEADER_SUFFIX: &'static str = ".h";

    /// Case-sensitive suffix match; files matching neither suffix return `None`.
    pub fn classify(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        if name.ends_with(Self::SOURCE_SUFFIX) {
            Some(Self::Source)
        } else if name.ends_with(Self::HEADER_SUFFIX) {
            Some(Self::Header)
        } else {
            None
        }
    }
}

/// Rendered paths grouped by category, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLists {
    pub headers: Vec<String>,
    pub sources: Vec<String>,
}

impl FileLists {
    pub fn push(&mut self, category: FileCategory, path: String) {
        match category {
            FileCategory::Header => self.headers.push(path),
            FileCategory::Source => self.sources.push(path),
        }
    }

    pub fn sort(&mut self) {
        self.headers.sort();
        self.sources.sort();
    }

    pub fn len(&self) -> usize {
        self.headers.len() + self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
