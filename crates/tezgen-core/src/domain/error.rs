use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them around)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Target name cannot be empty.")]
    EmptyTargetName,

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Project structure for '{target}' is empty")]
    EmptyStructure { target: String },

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed inside a target: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTargetName => vec![
                "Pass the target name as the first argument: tezgen <NAME>".into(),
                "Or run tezgen without arguments and type it at the prompt".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{path}' cannot be used as a folder inside the target"),
                "Use a target name that ends in a folder name, such as 'Core'".into(),
            ],
            Self::EmptyStructure { .. } | Self::DuplicatePath { .. } => vec![
                "The built-in layout table is inconsistent".into(),
                "This is a bug in tezgen, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyTargetName | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyStructure { .. } | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
