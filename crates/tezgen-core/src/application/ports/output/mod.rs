//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tezgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::TezgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tezgen_adapters::filesystem::LocalFilesystem` (production)
/// - `tezgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_dir_all` succeeds when the directory already exists and never
///   touches existing contents.
/// - `write_file` replaces any existing file at `path` without asking.
/// - A path component that exists as a file is reported as
///   `ApplicationError::PathConflict`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> TezgenResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> TezgenResult<()>;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Absolute form of `path` relative to the working directory, without
    /// resolving symlinks.
    fn absolute(&self, path: &Path) -> TezgenResult<PathBuf>;
}
