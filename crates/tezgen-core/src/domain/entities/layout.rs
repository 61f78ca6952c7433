//! Static layout table for a target.
//!
//! The `{module × folder × visibility}` combination is data, not control
//! flow. Each [`LayoutRule`] names one leaf directory; [`DirectoryPlan`]
//! resolves every rule against a [`TargetName`].
//!
//! ```text
//! <Target>/
//!   Runtime/Source/
//!   Runtime/Include/Public/Tez/<Target>/
//!   Runtime/Include/Private/Tez/<Target>/
//!   Editor/Source/
//!   Editor/Include/Public/Tez/<Target>/
//!   Editor/Include/Private/Tez/<Target>/
//! ```

use crate::domain::{
    entities::{common::RelativePath, target_name::TargetName},
    error::DomainError,
    value_objects::{FolderKind, ModuleSpec, NAMESPACE, Visibility},
};

/// One leaf directory of the target layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRule {
    pub module: ModuleSpec,
    pub folder: FolderKind,
    /// Only set for [`FolderKind::Include`].
    pub visibility: Option<Visibility>,
}

impl LayoutRule {
    pub const fn source(module: ModuleSpec) -> Self {
        Self {
            module,
            folder: FolderKind::Source,
            visibility: None,
        }
    }

    pub const fn include(module: ModuleSpec, visibility: Visibility) -> Self {
        Self {
            module,
            folder: FolderKind::Include,
            visibility: Some(visibility),
        }
    }

    /// Resolve this rule to a path relative to the target root.
    ///
    /// Source rules ignore the name; include rules end in
    /// `<Visibility>/Tez/<leaf>` (see [`TargetName::include_leaf`]).
    pub fn resolve(&self, name: &TargetName) -> Result<RelativePath, DomainError> {
        let base = RelativePath::new(self.module.as_str()).try_join(self.folder.as_str())?;
        match self.visibility {
            None => Ok(base),
            Some(visibility) => base
                .try_join(visibility.as_str())?
                .try_join(NAMESPACE)?
                .try_join(name.include_leaf()),
        }
    }
}

/// Leaf directories created for every target, in creation order.
pub const LAYOUT: &[LayoutRule] = &[
    LayoutRule::source(ModuleSpec::Runtime),
    LayoutRule::include(ModuleSpec::Runtime, Visibility::Public),
    LayoutRule::include(ModuleSpec::Runtime, Visibility::Private),
    LayoutRule::source(ModuleSpec::Editor),
    LayoutRule::include(ModuleSpec::Editor, Visibility::Public),
    LayoutRule::include(ModuleSpec::Editor, Visibility::Private),
];

/// Leaf directories derived from a target name. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    directories: Vec<RelativePath>,
}

impl DirectoryPlan {
    /// Resolve [`LAYOUT`] for `name`.
    ///
    /// # Errors
    /// [`DomainError::AbsolutePathNotAllowed`] if the name has no normal
    /// component to name the include folders after, such as `/`.
    pub fn for_target(name: &TargetName) -> Result<Self, DomainError> {
        Self::from_rules(LAYOUT, name)
    }

    /// Resolve an arbitrary rule table. Used by tests and by
    /// [`Self::for_target`].
    pub fn from_rules(rules: &[LayoutRule], name: &TargetName) -> Result<Self, DomainError> {
        let directories = rules
            .iter()
            .map(|rule| rule.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { directories })
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

impl IntoIterator for DirectoryPlan {
    type Item = RelativePath;
    type IntoIter = std::vec::IntoIter<RelativePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.directories.into_iter()
    }
}
