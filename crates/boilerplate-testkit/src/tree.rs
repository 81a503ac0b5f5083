//! Helpers for building template trees on disk and inspecting generated output

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Write `(relative path, content)` pairs under `root`, creating parents
///
/// A path ending in `/` creates an empty directory instead of a file.
///
/// # Panics
///
/// Panics on any I/O failure.
pub fn write_tree(root: &Path, entries: &[(&str, &str)]) {
    for (rel, content) in entries {
        if let Some(dir) = rel.strip_suffix('/') {
            std::fs::create_dir_all(root.join(dir)).expect("Failed to create directory");
            continue;
        }

        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }
}

/// Directories and files found below a root, keyed by path relative to it
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeSnapshot {
    pub dirs: BTreeSet<PathBuf>,
    pub files: BTreeMap<PathBuf, Vec<u8>>,
}

impl TreeSnapshot {
    /// Content of a file as UTF-8 text, if present
    pub fn text(&self, rel: impl AsRef<Path>) -> Option<String> {
        self.files
            .get(rel.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

/// Read everything below `root` (the root itself excluded)
///
/// # Panics
///
/// Panics on any I/O failure.
pub fn snapshot_tree(root: &Path) -> TreeSnapshot {
    let mut snapshot = TreeSnapshot::default();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.expect("Failed to walk directory");
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir entry outside root")
            .to_path_buf();

        if entry.file_type().is_dir() {
            snapshot.dirs.insert(rel);
        } else {
            let bytes = std::fs::read(entry.path()).expect("Failed to read file");
            snapshot.files.insert(rel, bytes);
        }
    }

    snapshot
}
