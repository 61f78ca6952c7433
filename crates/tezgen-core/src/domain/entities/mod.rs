pub mod build_file;
pub mod common;
pub mod layout;
pub mod project_structure;
pub mod target_name;

pub use crate::domain::DomainError;
pub use build_file::{BuildFile, RenderContext};
pub use layout::{DirectoryPlan, LAYOUT, LayoutRule};
pub use project_structure::ProjectStructure;
pub use target_name::TargetName;
