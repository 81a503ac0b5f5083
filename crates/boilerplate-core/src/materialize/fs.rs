//! Output filesystem abstraction

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Writable hierarchical store the materializer emits into
pub trait OutputFs {
    /// Create a directory and all missing parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate a file and write `content`
    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// The local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl OutputFs for LocalFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(content)?;
        file.flush()
    }
}

/// In-memory filesystem for dry runs and tests
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dirs(&self) -> BTreeSet<PathBuf> {
        self.lock().dirs.clone()
    }

    pub fn files(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.lock().files.clone()
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    pub fn is_empty(&self) -> bool {
        let state = self.lock();
        state.dirs.is_empty() && state.files.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OutputFs for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if state.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "a file exists at this path",
            ));
        }
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut state = self.lock();
        let parent_exists = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => state.dirs.contains(parent),
            _ => true,
        };
        if !parent_exists {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "parent directory does not exist",
            ));
        }
        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "a directory exists at this path",
            ));
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boilerplate_testkit::temp_dir_in_workspace;

    #[test]
    fn test_local_fs_write_truncates() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("file.txt");
        std::fs::write(&path, "a much longer previous content").unwrap();

        LocalFs.write_file(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_local_fs_create_dir_all_is_idempotent() {
        let temp = temp_dir_in_workspace();
        let dir = temp.path().join("a/b/c");
        LocalFs.create_dir_all(&dir).unwrap();
        LocalFs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_memory_fs_tracks_ancestors() {
        let fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/out/demo/cmd")).unwrap();
        let dirs = fs.dirs();
        assert!(dirs.contains(Path::new("/out")));
        assert!(dirs.contains(Path::new("/out/demo")));
        assert!(dirs.contains(Path::new("/out/demo/cmd")));
    }

    #[test]
    fn test_memory_fs_write_requires_parent() {
        let fs = MemoryFs::new();
        let err = fs.write_file(Path::new("/out/a.txt"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/a.txt"), b"x").unwrap();
        fs.write_file(Path::new("/out/a.txt"), b"y").unwrap();
        assert_eq!(fs.read("/out/a.txt"), Some(b"y".to_vec()));
    }

    #[test]
    fn test_memory_fs_file_and_dir_conflict() {
        let fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/out/dir")).unwrap();
        assert!(fs.write_file(Path::new("/out/dir"), b"x").is_err());

        fs.write_file(Path::new("/out/file"), b"x").unwrap();
        assert!(fs.create_dir_all(Path::new("/out/file")).is_err());
    }
}
