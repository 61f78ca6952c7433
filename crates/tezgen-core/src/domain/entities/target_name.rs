//! The `TargetName` value object.
//!
//! The name is used twice: as the folder name of the target root and of the
//! namespaced include folders, and as the identifier written into the build
//! file. The only invariant is non-emptiness. Whitespace is kept verbatim
//! and no character validation happens here; callers that want to warn
//! about odd names use [`TargetName::is_blank`],
//! [`TargetName::has_path_separator`] and [`TargetName::is_rooted`].
//!
//! A rooted name such as `/work/Audio` places the target root at that path.
//! Its include folders are named after the last component (`Audio`), since
//! the full path cannot sit below `Tez/`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Name of a new Tez target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetName(String);

impl TargetName {
    /// Accept any non-empty string.
    ///
    /// # Errors
    /// [`DomainError::EmptyTargetName`] if `name` is the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyTargetName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the name consists only of whitespace.
    ///
    /// Such a name is accepted and produces a directory whose name is
    /// whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.chars().all(char::is_whitespace)
    }

    /// `true` when the name contains `/` or `\`, meaning the target root
    /// ends up nested rather than directly under the output directory.
    pub fn has_path_separator(&self) -> bool {
        self.0.contains(['/', '\\'])
    }

    /// `true` when the name is an absolute or rooted path. The target root
    /// is then the name itself instead of a folder below the output
    /// directory.
    pub fn is_rooted(&self) -> bool {
        let path = Path::new(&self.0);
        path.has_root() || matches!(path.components().next(), Some(Component::Prefix(_)))
    }

    /// Folder name used below `Include/<Visibility>/Tez/`.
    ///
    /// The name verbatim, or for a rooted name its last normal component.
    /// A name made only of roots (`/`) is returned unchanged and rejected
    /// later by the layout.
    pub fn include_leaf(&self) -> &Path {
        let path = Path::new(&self.0);
        if !self.is_rooted() {
            return path;
        }
        path.components()
            .rev()
            .find_map(|component| match component {
                Component::Normal(segment) => Some(Path::new(segment)),
                _ => None,
            })
            .unwrap_or(path)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TargetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TargetName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TargetName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
