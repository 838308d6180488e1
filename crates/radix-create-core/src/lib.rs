//! create-radix-dapp core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the
//! `create-radix-dapp` scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        radix-create-cli (CLI)           │
//! │   (dialoguer prompts, indicatif status) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (AnswerCollector, ScaffoldPipeline)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Prompter, TemplateFetcher, PackageMgr) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   radix-create-adapters (Infra)         │
//! │ (TarballFetcher, NpmPackageManager)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use radix_create_core::prelude::*;
//! # fn demo(
//! #     prompter: &dyn Prompter,
//! #     fetcher: Box<dyn TemplateFetcher>,
//! #     package_manager: Box<dyn PackageManager>,
//! #     progress: Box<dyn ProgressReporter>,
//! # ) -> CreateResult<()> {
//! let answers = AnswerCollector::new(prompter).collect(&TemplateRegistry::builtin())?;
//!
//! let pipeline = ScaffoldPipeline::new(fetcher, package_manager, progress);
//! let report = pipeline.run(&answers);
//! if let Some(next_step) = &report.next_step {
//!     println!("To start the app run: {next_step}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnswerCollector, MaterializationFailurePolicy, PipelineSettings, ScaffoldPipeline,
        ScaffoldReport,
        ports::{PackageManager, PhaseIndicator, ProgressReporter, Prompter, TemplateFetcher},
    };
    pub use crate::domain::{
        DependencyRoot, InstallationOutcome, MaterializationOutcome, ProcessReport, ProjectName,
        RemoteReference, StderrPolicy, TemplateDescriptor, TemplateRegistry, UserAnswers,
    };
    pub use crate::error::{CreateError, CreateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
