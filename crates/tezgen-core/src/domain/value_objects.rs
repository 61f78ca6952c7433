//! Value objects describing the fixed shape of a Tez target.
//!
//! None of these are user-configurable. They exist so the layout table in
//! [`crate::domain::entities::layout`] can name its rows with types instead
//! of bare strings.

use std::fmt;

use serde::Serialize;

/// Namespace directory inserted between a visibility folder and the target
/// name, so headers are included as `<Tez/<Target>/Header.hxx>`.
pub const NAMESPACE: &str = "Tez";

/// Sub-module created for every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModuleSpec {
    /// Code shipped with the engine at runtime.
    Runtime,
    /// Editor and tooling code.
    Editor,
}

impl ModuleSpec {
    /// Every module, in generation order.
    pub const ALL: [ModuleSpec; 2] = [ModuleSpec::Runtime, ModuleSpec::Editor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Runtime => "Runtime",
            Self::Editor => "Editor",
        }
    }
}

impl fmt::Display for ModuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folder kind inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FolderKind {
    /// Implementation files.
    Source,
    /// Headers, split by [`Visibility`].
    Include,
}

impl FolderKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Include => "Include",
        }
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    /// Headers for consumers of the target.
    Public,
    /// Headers internal to the target.
    Private,
}

impl Visibility {
    pub const ALL: [Visibility; 2] = [Visibility::Public, Visibility::Private];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_order_is_runtime_then_editor() {
        assert_eq!(ModuleSpec::ALL, [ModuleSpec::Runtime, ModuleSpec::Editor]);
    }

    #[test]
    fn display_matches_directory_names() {
        assert_eq!(ModuleSpec::Runtime.to_string(), "Runtime");
        assert_eq!(ModuleSpec::Editor.to_string(), "Editor");
        assert_eq!(FolderKind::Source.to_string(), "Source");
        assert_eq!(FolderKind::Include.to_string(), "Include");
        assert_eq!(Visibility::Public.to_string(), "Public");
        assert_eq!(Visibility::Private.to_string(), "Private");
    }
}
