//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `radix-create-adapters` crate provides the fetchers and the package
//! manager; the CLI provides the prompter and the progress reporter.

use std::path::Path;

use crate::domain::{ProcessReport, RemoteReference};
use crate::error::CreateResult;

/// Port for interactive questions.
///
/// Implemented by:
/// - `DialoguerPrompter` in the `create-radix-dapp` binary (terminal)
///
/// Every call blocks until the user answers. Interrupts surface as
/// `ApplicationError::PromptCancelled`.
pub trait Prompter {
    /// Ask a free-text question and return the raw answer.
    fn text(&self, message: &str) -> CreateResult<String>;

    /// Ask a single-choice question and return the chosen index.
    fn select(&self, message: &str, choices: &[&str]) -> CreateResult<usize>;

    /// Tell the user their last answer was rejected.
    fn reject(&self, reason: &str) -> CreateResult<()>;
}

/// Port for template materialization.
///
/// Implemented by:
/// - `radix_create_adapters::fetcher::TarballFetcher` (network, no cache)
/// - `radix_create_adapters::fetcher::LocalMirrorFetcher` (offline/testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateFetcher: Send + Sync {
    /// Write the tree at `reference` into `destination`, relative to the
    /// current working directory.
    fn fetch(&self, reference: &RemoteReference, destination: &Path) -> CreateResult<()>;
}

/// Port for dependency installation.
///
/// Implemented by:
/// - `radix_create_adapters::package_manager::NpmPackageManager`
///
/// Implementations report every failure inside the [`ProcessReport`]; this
/// call cannot fail on its own.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager: Send + Sync {
    /// Program name used in the next-step instruction (`npm`, `pnpm`, ...).
    fn program(&self) -> String;

    /// Run the install command in `working_dir` and wait for it to exit.
    fn install(&self, working_dir: &Path) -> ProcessReport;
}

/// Port that hands out one status indicator per phase.
///
/// Implemented by:
/// - `SpinnerReporter` in the `create-radix-dapp` binary (indicatif)
pub trait ProgressReporter: Send + Sync {
    fn phase(&self) -> Box<dyn PhaseIndicator>;
}

/// A transient in-place status line.
pub trait PhaseIndicator: Send {
    fn start(&mut self, label: &str);
    fn succeed(&mut self, label: &str);
    fn fail(&mut self, label: &str);
}
