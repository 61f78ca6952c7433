//! Core domain layer for tezgen.
//!
//! This module contains pure logic with no I/O. Everything that touches the
//! filesystem goes through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Static layout**: The target shape is a data table ([`LAYOUT`])
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    build_file::{BUILD_FILE_NAME, BuildFile, RenderContext},
    common::RelativePath,
    layout::{DirectoryPlan, LAYOUT, LayoutRule},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    target_name::TargetName,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FolderKind, ModuleSpec, NAMESPACE, Visibility};
