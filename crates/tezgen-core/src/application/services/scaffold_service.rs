//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Plan the target structure (pure domain work)
//! 2. Ensure every directory exists
//! 3. Write the build file, replacing any previous one
//! 4. Report what was done
//!
//! There is no rollback. A failure half-way leaves the directories created
//! so far in place, and re-running is safe because directory creation is
//! idempotent.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{FsEntry, ProjectStructure, TargetName},
    error::TezgenResult,
};

/// Outcome of a scaffold run, or of a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Target name, verbatim.
    pub target: TargetName,
    /// Target root as planned (relative to the working directory unless the
    /// output directory or the name is absolute).
    pub root: PathBuf,
    /// Absolute location of the target root.
    pub location: PathBuf,
    /// Leaf directories, including the root prefix.
    pub directories: Vec<PathBuf>,
    /// Path of the generated build file, including the root prefix.
    pub build_file: PathBuf,
    /// `true` when a build file already existed and was replaced (or would
    /// be replaced, for a dry run).
    pub build_file_overwritten: bool,
    /// `true` when nothing was written.
    pub dry_run: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use tezgen_core::{application::ScaffoldService, domain::TargetName};
    /// # fn fs() -> Box<dyn tezgen_core::application::ports::Filesystem> { unimplemented!() }
    ///
    /// let service = ScaffoldService::new(fs());
    /// let name = TargetName::new("Audio").unwrap();
    /// let report = service.scaffold(&name, Path::new("")).unwrap();
    /// println!("{}", report.location.display());
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Compute the structure for `name` below `output_dir` without any I/O.
    pub fn plan(name: &TargetName, output_dir: &Path) -> TezgenResult<ProjectStructure> {
        Ok(ProjectStructure::for_target(name, output_dir)?)
    }

    /// Create the target directories and write its build file.
    ///
    /// # Errors
    /// Domain errors for names that cannot be laid out, and filesystem
    /// errors from the adapter, unchanged.
    #[instrument(
        skip_all,
        fields(target_name = %name, output_dir = %output_dir.display())
    )]
    pub fn scaffold(&self, name: &TargetName, output_dir: &Path) -> TezgenResult<ScaffoldReport> {
        info!("Scaffolding target");

        let structure = Self::plan(name, output_dir)?;

        let overwritten = self.build_file_exists(&structure);
        self.write_all(&structure)?;

        let report = self.report(name, &structure, overwritten, false)?;
        info!(location = %report.location.display(), "Scaffold completed successfully");
        Ok(report)
    }

    /// Describe what [`Self::scaffold`] would do without writing anything.
    #[instrument(
        skip_all,
        fields(target_name = %name, output_dir = %output_dir.display())
    )]
    pub fn preview(&self, name: &TargetName, output_dir: &Path) -> TezgenResult<ScaffoldReport> {
        let structure = Self::plan(name, output_dir)?;

        let overwritten = self.build_file_exists(&structure);
        self.report(name, &structure, overwritten, true)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn build_file_exists(&self, structure: &ProjectStructure) -> bool {
        structure
            .files()
            .any(|file| self.filesystem.is_file(&structure.root.join(&file.path)))
    }

    /// Write all entries in the structure, root first.
    fn write_all(&self, structure: &ProjectStructure) -> TezgenResult<()> {
        self.filesystem.create_dir_all(&structure.root)?;

        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root.join(&dir.path);
                    debug!(path = %path.display(), "Ensuring directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        if parent != structure.root {
                            self.filesystem.create_dir_all(parent)?;
                        }
                    }

                    if self.filesystem.is_file(&path) {
                        info!(path = %path.display(), "Overwriting existing file");
                    }
                    debug!(path = %path.display(), bytes = file.content.len(), "Writing file");
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    fn report(
        &self,
        name: &TargetName,
        structure: &ProjectStructure,
        build_file_overwritten: bool,
        dry_run: bool,
    ) -> TezgenResult<ScaffoldReport> {
        let root = structure.root.clone();
        let location = self.filesystem.absolute(&root)?;

        let directories = structure
            .directories()
            .map(|dir| root.join(&dir.path))
            .collect();
        let build_file = structure
            .files()
            .map(|file| root.join(&file.path))
            .next()
            .unwrap_or_else(|| root.clone());

        Ok(ScaffoldReport {
            target: name.clone(),
            root,
            location,
            directories,
            build_file,
            build_file_overwritten,
            dry_run,
        })
    }
}
