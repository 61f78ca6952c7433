//! tezgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `tezgen`, the
//! tool that scaffolds new Tez engine targets.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           tezgen-cli (CLI)              │
//! │   (argument parsing, prompt, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tezgen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (TargetName, LAYOUT, BuildFile, Plan)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tezgen_core::prelude::*;
//! # fn filesystem() -> Box<dyn Filesystem> { unimplemented!() }
//!
//! let name = TargetName::new("Renderer").unwrap();
//! let service = ScaffoldService::new(filesystem());
//! let report = service.scaffold(&name, Path::new("")).unwrap();
//! assert_eq!(report.directories.len(), 6);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldReport, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        BUILD_FILE_NAME, BuildFile, DirectoryPlan, LAYOUT, ModuleSpec, ProjectStructure,
        TargetName, Visibility,
    };
    pub use crate::error::{TezgenError, TezgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
