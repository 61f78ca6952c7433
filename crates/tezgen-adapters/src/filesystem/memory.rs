//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use tezgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TezgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// service and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    cwd: PathBuf,
}

impl Default for MemoryFilesystemInner {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
            directories: BTreeSet::new(),
            read_only: HashSet::new(),
            cwd: PathBuf::from("/memory"),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem rooted at `/memory`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Use `cwd` as the working directory for [`Filesystem::absolute`].
    pub fn with_cwd(self, cwd: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.cwd = cwd.into();
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(&normalize(path)).cloned()
    }

    /// `true` when `path` is a recorded file or directory (testing helper).
    pub fn exists(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(&path) || inner.directories.contains(&path))
            .unwrap_or(false)
    }

    /// Place a file without creating its parents.
    pub fn seed_file(&self, path: &Path, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(normalize(path), content.to_string());
        }
    }

    /// Refuse any write at or below `path`.
    pub fn set_read_only(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(normalize(path));
        }
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, including intermediate ones, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.read_only.clear();
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|ro| path.starts_with(ro))
    }
}

/// Drop `.` components so `./Foo` and `Foo` are the same key.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TezgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let path = normalize(path);
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::PathConflict {
                    path: current,
                    reason: "a file exists where a directory is expected".into(),
                }
                .into());
            }
            if inner.directories.contains(&current) {
                continue;
            }
            if inner.is_read_only(&current) {
                return Err(ApplicationError::Filesystem {
                    path: current,
                    operation: "create directory",
                    reason: "permission denied".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TezgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let path = normalize(path);

        if inner.directories.contains(&path) {
            return Err(ApplicationError::PathConflict {
                path,
                reason: "a directory exists where a file is expected".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.clone(),
                    operation: "write file",
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.is_read_only(&path) {
            return Err(ApplicationError::Filesystem {
                path,
                operation: "write file",
                reason: "permission denied".into(),
            }
            .into());
        }

        inner.files.insert(path, content.to_string());
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(&path))
            .unwrap_or(false)
    }

    fn absolute(&self, path: &Path) -> TezgenResult<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.cwd.join(normalize(path)))
    }
}
