//! Starter `CMakeLists.txt` for a new target.
//!
//! The template is a fixed string with `{{VARIABLE}}` placeholders filled
//! by a [`RenderContext`]. The file only embeds the target name and the
//! module list.

use std::collections::HashMap;

use crate::domain::{
    entities::{common::RelativePath, target_name::TargetName},
    value_objects::ModuleSpec,
};

/// File name of the generated build file, relative to the target root.
pub const BUILD_FILE_NAME: &str = "CMakeLists.txt";

/// Build file template.
///
/// | Variable          | Value                                           |
/// |-------------------|-------------------------------------------------|
/// | `TARGET_NAME`     | The target name, verbatim                       |
/// | `SUBDIRECTORIES`  | One commented `add_subdirectory` per module     |
const CMAKE_TEMPLATE: &str = "\
# CMakeLists.txt for {{TARGET_NAME}}
project({{TARGET_NAME}} LANGUAGES CXX)

# Add your subdirectories or target logic here
{{SUBDIRECTORIES}}";

/// Variables available to the build file template.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context with the built-in variables for `name`.
    pub fn new(name: &TargetName) -> Self {
        let subdirectories: String = ModuleSpec::ALL
            .iter()
            .map(|module| format!("# add_subdirectory({module})\n"))
            .collect();

        let mut variables = HashMap::new();
        variables.insert("TARGET_NAME".to_string(), name.as_str().to_string());
        variables.insert("SUBDIRECTORIES".to_string(), subdirectories);

        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in one left-to-right pass.
    ///
    /// Substituted values are never rescanned, so a target name that itself
    /// contains `{{SUBDIRECTORIES}}` is written literally. Unknown
    /// placeholders and unterminated `{{` are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            let key = &after_open[..end];
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// A rendered build file, ready to be written below the target root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    pub path: RelativePath,
    pub content: String,
}

impl BuildFile {
    pub fn render(name: &TargetName) -> Self {
        Self {
            path: RelativePath::new(BUILD_FILE_NAME),
            content: RenderContext::new(name).render(CMAKE_TEMPLATE),
        }
    }
}
