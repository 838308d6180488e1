//! Application layer for create-radix-dapp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AnswerCollector, ScaffoldPipeline)
//! - **Ports**: Interface definitions (traits) for external collaborators
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain but holds no rules itself.
//! Directory derivation and outcome classification live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AnswerCollector, MaterializationFailurePolicy, PipelineSettings, ScaffoldPipeline,
    ScaffoldReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{PackageManager, PhaseIndicator, ProgressReporter, Prompter, TemplateFetcher};

pub use error::ApplicationError;
