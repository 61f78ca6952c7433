//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tezgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{TezgenError, TezgenResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TezgenResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TezgenResult<()> {
        trace!(path = %path.display(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn absolute(&self, path: &Path) -> TezgenResult<PathBuf> {
        std::path::absolute(path).map_err(|e| map_io_error(path, e, "resolve absolute path"))
    }
}

/// Translate an `io::Error` into the core error taxonomy.
///
/// `create_dir_all` through an existing file fails with `NotADirectory` or
/// `AlreadyExists` depending on the platform, and writing a file over a
/// directory fails with `IsADirectory`; all of these are conflicts.
fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> TezgenError {
    match e.kind() {
        io::ErrorKind::NotADirectory
        | io::ErrorKind::IsADirectory
        | io::ErrorKind::AlreadyExists => ApplicationError::PathConflict {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into(),
        _ => ApplicationError::Filesystem {
            path: path.to_path_buf(),
            operation,
            reason: e.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        let fs_adapter = LocalFilesystem::new();

        fs_adapter.create_dir_all(&dir).unwrap();
        fs_adapter.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_dir_all_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Runtime/Source");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Log.cxx"), "// keep me").unwrap();

        LocalFilesystem::new().create_dir_all(&dir).unwrap();
        assert_eq!(fs::read_to_string(dir.join("Log.cxx")).unwrap(), "// keep me");
    }

    #[test]
    fn write_file_truncates_previous_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("CMakeLists.txt");
        fs::write(&file, "a much longer previous content").unwrap();

        LocalFilesystem::new().write_file(&file, "short").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    #[cfg(unix)]
    fn directory_through_file_is_a_conflict() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("Foo");
        fs::write(&blocker, "not a directory").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("Runtime"))
            .unwrap_err();
        assert!(matches!(
            err,
            TezgenError::Application(ApplicationError::PathConflict { .. })
        ));
    }

    #[test]
    fn is_file_only_for_regular_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("x.txt");
        fs::write(&file, "").unwrap();
        let fs_adapter = LocalFilesystem::new();

        assert!(!fs_adapter.is_file(temp.path()));
        assert!(fs_adapter.is_file(&file));
        assert!(!fs_adapter.is_file(&temp.path().join("missing")));
    }

    #[test]
    fn absolute_prefixes_working_directory() {
        let abs = LocalFilesystem::new().absolute(Path::new("Foo")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("Foo"));
        assert_eq!(abs, std::env::current_dir().unwrap().join("Foo"));
    }
}
