//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `radix-create-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: Interactive questions
//!   - `TemplateFetcher`: Remote template download
//!   - `PackageManager`: Dependency installation subprocess
//!   - `ProgressReporter` / `PhaseIndicator`: Status lines

pub mod output;

pub use output::{PackageManager, PhaseIndicator, ProgressReporter, Prompter, TemplateFetcher};

#[cfg(test)]
pub use output::{MockPackageManager, MockTemplateFetcher};
