//! Core domain layer for create-radix-dapp.
//!
//! This module contains pure logic with no I/O. Prompts, downloads, and
//! subprocesses are reached through ports defined in the application layer.
//!
//! ## Contents
//!
//! - **Template registry**: the static table of starter projects
//! - **Answers**: project name and selected template, plus directory derivation
//! - **Remote references**: degit-style `user/repo/sub/dir#ref` parsing
//! - **Outcomes**: phase results and the stderr classification rule
//!
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    answers::UserAnswers,
    outcome::{InstallationOutcome, MaterializationOutcome, ProcessReport, StderrPolicy},
    remote::{RemoteReference, Site},
    template::{BUILTIN_TEMPLATES, DEFAULT_BASE_NAMESPACE, TemplateDescriptor, TemplateRegistry},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{DependencyRoot, ProjectName};
