//! Single pass over the source tree that partitions files into header and source lists.

use crate::config::GenConfig;
use crate::core::{FileCategory, FileLists};
use crate::error::ScanError;
use crate::fs::walk_files;
use std::path::{Component, Path};
use tracing::{debug, info};

/// Render `path` relative to `root`, with `/` separators and the root replaced by `placeholder`.
///
/// Fails with [`ScanError::NonUtf8Path`] if any component below the root is not valid UTF-8.
pub fn portable_path(root: &Path, path: &Path, placeholder: &str) -> Result<String, ScanError> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut rendered = String::from(placeholder);
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| ScanError::NonUtf8Path(path.to_path_buf()))?;
            rendered.push('/');
            rendered.push_str(&part.replace('\\', "/"));
        }
    }
    Ok(rendered)
}

/// Walk `config.root` and collect every `.h` and `.cpp` file.
///
/// The first traversal error aborts the scan; no partial lists are returned.
pub fn collect_files(config: &GenConfig) -> Result<FileLists, ScanError> {
    let root = config.root.as_path();
    let mut lists = FileLists::default();
    let mut skipped = 0usize;

    for path in walk_files(root)? {
        let path = path?;
        match FileCategory::classify(&path) {
            Some(category) => {
                debug!(?category, path = %path.display(), "matched");
                lists.push(category, portable_path(root, &path, &config.placeholder)?);
            }
            None => skipped += 1,
        }
    }

    if config.sort {
        lists.sort();
    }

    info!(
        headers = lists.headers.len(),
        sources = lists.sources.len(),
        skipped,
        "scan complete"
    );
    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_portable_path() {
        let root = PathBuf::from("/repo");
        let path = PathBuf::from("/repo/engine/render/Vertex.h");
        assert_eq!(
            portable_path(&root, &path, "${ROOT}").unwrap(),
            "${ROOT}/engine/render/Vertex.h"
        );
    }

    #[test]
    fn test_portable_path_relative_root() {
        let root = PathBuf::from(".");
        let path = PathBuf::from("./a/x.cpp");
        assert_eq!(portable_path(&root, &path, "@").unwrap(), "@/a/x.cpp");
    }

    #[cfg(unix)]
    #[test]
    fn test_portable_path_rewrites_backslashes() {
        let root = PathBuf::from("/repo");
        let path = PathBuf::from("/repo/odd\\name.h");
        assert_eq!(portable_path(&root, &path, "@").unwrap(), "@/odd/name.h");
    }

    #[cfg(unix)]
    #[test]
    fn test_portable_path_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = PathBuf::from("/repo");
        let path = root.join(OsStr::from_bytes(b"bad\xffname.h"));
        let err = portable_path(&root, &path, "@").err();
        assert!(matches!(err, Some(ScanError::NonUtf8Path(p)) if p == path));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_collect_files_non_utf8_match_is_fatal() -> anyhow::Result<()> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::write(root.join("good.h"), "")?;
        // Only files that would be listed need a UTF-8 name.
        fs::write(root.join(OsStr::from_bytes(b"notes\xff.txt")), "")?;

        let config = GenConfig {
            root: root.to_path_buf(),
            ..Default::default()
        };
        assert_eq!(collect_files(&config)?.headers.len(), 1);

        fs::write(root.join(OsStr::from_bytes(b"bad\xffname.h")), "")?;
        let err = collect_files(&config).err();
        assert!(matches!(err, Some(ScanError::NonUtf8Path(_))));
        Ok(())
    }

    #[test]
    fn test_collect_files_partitions() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a"))?;
        fs::create_dir_all(root.join("b"))?;
        fs::write(root.join("a/x.cpp"), "")?;
        fs::write(root.join("a/x.h"), "")?;
        fs::write(root.join("b/y.cpp"), "")?;
        fs::write(root.join("readme.txt"), "")?;

        let config = GenConfig {
            root: root.to_path_buf(),
            placeholder: "ROOT".to_string(),
            sort: true,
            ..Default::default()
        };
        let lists = collect_files(&config)?;

        assert_eq!(lists.headers, vec!["ROOT/a/x.h"]);
        assert_eq!(lists.sources, vec!["ROOT/a/x.cpp", "ROOT/b/y.cpp"]);
        Ok(())
    }

    #[test]
    fn test_collect_files_missing_root() {
        let config = GenConfig {
            root: PathBuf::from("non_existent_path_xyz_123"),
            ..Default::default()
        };
        assert!(collect_files(&config).is_err());
    }
}
