//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while collecting answers or materializing a template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The terminal prompt could not be rendered or read.
    #[error("prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user interrupted a prompt.
    #[error("prompt cancelled")]
    PromptCancelled,

    /// A selection index did not match any registry entry.
    #[error("selection {index} is out of range")]
    SelectionOutOfRange { index: usize },

    /// The template tarball could not be downloaded.
    #[error("could not download {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// The download finished but had no entries under the requested subdirectory.
    #[error("could not find directory '{subdir}' in {reference}")]
    SubdirectoryNotFound { reference: String, subdir: String },

    /// The template source does not exist (local mirror).
    #[error("template source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Destination has content and overwriting was not requested.
    #[error("destination directory is not empty: {path}")]
    DestinationNotEmpty { path: PathBuf },

    /// Writing the template to disk failed.
    #[error("could not write {path}: {reason}")]
    ExtractionFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PromptFailed { .. } => vec![
                "create-radix-dapp must be run in an interactive terminal".into(),
                "Check that stdin is not redirected".into(),
            ],
            Self::PromptCancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            Self::DownloadFailed { .. } => vec![
                "Check your network connection".into(),
                "Try again in a moment".into(),
            ],
            Self::SubdirectoryNotFound { reference, .. } => vec![
                format!("The template {} may have moved", reference),
                "Set templates.base_namespace to point at another repository".into(),
            ],
            Self::SourceNotFound { path } => vec![
                format!("Nothing found at {}", path.display()),
                "Check templates.local_mirror in your configuration".into(),
            ],
            Self::DestinationNotEmpty { path } => vec![
                format!("Directory already has content: {}", path.display()),
                "Set templates.force = true to overwrite".into(),
                "Choose a different project name".into(),
            ],
            Self::ExtractionFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check the project name is a valid directory name".into(),
            ],
            Self::SelectionOutOfRange { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::PromptCancelled => ErrorCategory::Cancelled,
            Self::SelectionOutOfRange { .. } => ErrorCategory::Internal,
            Self::DownloadFailed { .. } => ErrorCategory::Network,
            Self::SubdirectoryNotFound { .. } | Self::SourceNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::DestinationNotEmpty { .. } => ErrorCategory::Validation,
            Self::ExtractionFailed { .. } => ErrorCategory::Internal,
        }
    }
}
