// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside pipeline reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Blank project names are rejected at prompt time and re-asked.
    #[error("Please enter a valid project name.")]
    EmptyProjectName,

    #[error("Could not parse template reference '{reference}': {reason}")]
    InvalidRemoteReference { reference: String, reason: String },

    #[error("Unsupported template host '{site}'")]
    UnsupportedSite { site: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "The project name is used as the folder name".into(),
                "Examples: my-dapp, gumball-front-end".into(),
            ],
            Self::InvalidRemoteReference { reference, .. } => vec![
                format!("Reference: {}", reference),
                "Expected form: [site:]user/repo[/sub/dir][#ref]".into(),
                "Check templates.base_namespace in your configuration".into(),
            ],
            Self::UnsupportedSite { .. } => vec![
                "Supported hosts: github, gitlab, bitbucket".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName => ErrorCategory::Validation,
            Self::InvalidRemoteReference { .. } | Self::UnsupportedSite { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_message_matches_prompt_text() {
        assert_eq!(
            DomainError::EmptyProjectName.to_string(),
            "Please enter a valid project name."
        );
    }

    #[test]
    fn reference_errors_are_configuration_problems() {
        let err = DomainError::UnsupportedSite {
            site: "sourceforge".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("github")));
    }
}
