//! Scaffold Pipeline - materialize the template, then install dependencies.
//!
//! The pipeline coordinates a run:
//! 1. Fetch `base_namespace + remote_path` into `./<project>`
//! 2. Report the materialization outcome
//! 3. Apply the [`MaterializationFailurePolicy`]
//! 4. Run the package manager in the dependency root
//! 5. Classify and report the installation outcome
//!
//! Every failure is converted into a status line where it happens; `run`
//! itself cannot fail.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    application::ports::{PackageManager, PhaseIndicator, ProgressReporter, TemplateFetcher},
    domain::{
        DEFAULT_BASE_NAMESPACE, InstallationOutcome, MaterializationOutcome, RemoteReference,
        StderrPolicy, UserAnswers,
    },
    error::CreateError,
};

pub const TEMPLATE_CREATED: &str = "Template created successfully.";
pub const INSTALLING: &str = "Installing dependencies...";
pub const DEPENDENCIES_INSTALLED: &str = "Dependencies installed successfully.";

/// What happens to the install phase when materialization fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterializationFailurePolicy {
    /// Install anyway, into whatever is on disk. The installer then reports
    /// its own failure if the directory is missing.
    #[default]
    Continue,
    /// Stop after the failed fetch.
    Abort,
}

/// Tunables for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub base_namespace: String,
    pub stderr_policy: StderrPolicy,
    pub on_materialization_failure: MaterializationFailurePolicy,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            base_namespace: DEFAULT_BASE_NAMESPACE.to_string(),
            stderr_policy: StderrPolicy::default(),
            on_materialization_failure: MaterializationFailurePolicy::default(),
        }
    }
}

/// Combined result of both phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Fully qualified template path that was fetched.
    pub reference: String,
    pub materialization: MaterializationOutcome,
    /// `None` when the install phase was skipped by policy.
    pub installation: Option<InstallationOutcome>,
    /// Command that starts the dev server, set on full success.
    pub next_step: Option<String>,
}

impl ScaffoldReport {
    /// `true` when dependencies were installed.
    pub fn succeeded(&self) -> bool {
        matches!(self.installation, Some(InstallationOutcome::Succeeded))
    }
}

/// Main orchestrator.
pub struct ScaffoldPipeline {
    fetcher: Box<dyn TemplateFetcher>,
    package_manager: Box<dyn PackageManager>,
    progress: Box<dyn ProgressReporter>,
    settings: PipelineSettings,
}

impl ScaffoldPipeline {
    /// Create a pipeline with default settings.
    pub fn new(
        fetcher: Box<dyn TemplateFetcher>,
        package_manager: Box<dyn PackageManager>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self::with_settings(fetcher, package_manager, progress, PipelineSettings::default())
    }

    pub fn with_settings(
        fetcher: Box<dyn TemplateFetcher>,
        package_manager: Box<dyn PackageManager>,
        progress: Box<dyn ProgressReporter>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            fetcher,
            package_manager,
            progress,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run both phases for `answers`.
    #[instrument(
        skip_all,
        fields(
            project = %answers.project_name,
            template = answers.selected_template.display_name,
        )
    )]
    pub fn run(&self, answers: &UserAnswers) -> ScaffoldReport {
        let reference = answers
            .selected_template
            .qualified_path(&self.settings.base_namespace);

        // Both indicators exist before either phase starts.
        let mut fetch_status = self.progress.phase();
        let mut install_status = self.progress.phase();

        let materialization =
            self.materialize(&reference, answers.project_dir(), fetch_status.as_mut());

        if !materialization.is_success()
            && self.settings.on_materialization_failure == MaterializationFailurePolicy::Abort
        {
            info!("Materialization failed, skipping dependency installation");
            return ScaffoldReport {
                reference,
                materialization,
                installation: None,
                next_step: None,
            };
        }

        let installation = self.install(&answers.install_dir(), install_status.as_mut());
        let next_step = (!installation.error_occurred()).then(|| self.next_step(answers));

        ScaffoldReport {
            reference,
            materialization,
            installation: Some(installation),
            next_step,
        }
    }

    /// Fetch the template into `destination` and report the outcome.
    fn materialize(
        &self,
        reference: &str,
        destination: &Path,
        status: &mut dyn PhaseIndicator,
    ) -> MaterializationOutcome {
        status.start(&format!("Cloning template {reference}..."));

        let result = RemoteReference::parse(reference)
            .map_err(CreateError::from)
            .and_then(|parsed| self.fetcher.fetch(&parsed, destination));

        match result {
            Ok(()) => {
                info!(destination = %destination.display(), "Template materialized");
                status.succeed(TEMPLATE_CREATED);
                MaterializationOutcome::Created
            }
            Err(e) => {
                let message = e.to_string();
                info!(error = %message, "Template materialization failed");
                status.fail(&format!("Failed to clone template: {message}"));
                MaterializationOutcome::Failed { message }
            }
        }
    }

    /// Run the package manager in `working_dir` and report the outcome.
    fn install(&self, working_dir: &Path, status: &mut dyn PhaseIndicator) -> InstallationOutcome {
        status.start(INSTALLING);

        let report = self.package_manager.install(working_dir);
        let outcome = InstallationOutcome::classify(&report, self.settings.stderr_policy);

        match outcome.error_message() {
            None => {
                info!(working_dir = %working_dir.display(), "Dependencies installed");
                status.succeed(DEPENDENCIES_INSTALLED);
            }
            Some(message) => {
                info!(working_dir = %working_dir.display(), %outcome, "Dependency installation failed");
                status.fail(&format!(
                    "Error installing dependencies: {}",
                    message.trim_end()
                ));
            }
        }

        outcome
    }

    fn next_step(&self, answers: &UserAnswers) -> String {
        format!(
            "cd {} && {} run dev",
            answers.project_name,
            self.package_manager.program()
        )
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
