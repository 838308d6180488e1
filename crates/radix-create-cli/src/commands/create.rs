//! The one command: ask, fetch, install.
//!
//! Responsibility: wire adapters from configuration, run the core services,
//! and print the closing hint. No business logic lives here.

use tracing::{info, instrument};

use radix_create_adapters::{LocalMirrorFetcher, NpmPackageManager, TarballFetcher};
use radix_create_core::prelude::*;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::SpinnerReporter,
};

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Dependencies installed.
    Completed,
    /// A phase failed; its status line has been shown.
    Failed,
}

/// Execute an interactive scaffold.
///
/// 1. Ask for the project name and template
/// 2. Build the fetcher and package manager from configuration
/// 3. Run the pipeline
/// 4. Print how to start the dev server
#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<RunStatus> {
    let answers = collect_answers(output)?;
    let pipeline = build_pipeline(config, output)?;

    info!(
        project = %answers.project_name,
        namespace = %pipeline.settings().base_namespace,
        "Scaffold started"
    );
    let report = pipeline.run(&answers);
    finish(&report, output)
}

#[cfg(feature = "interactive")]
fn collect_answers(output: &OutputManager) -> CliResult<UserAnswers> {
    let prompter = crate::prompt::DialoguerPrompter::new(output.supports_color());
    AnswerCollector::new(&prompter)
        .collect(&TemplateRegistry::builtin())
        .map_err(CliError::from)
}

#[cfg(not(feature = "interactive"))]
fn collect_answers(_output: &OutputManager) -> CliResult<UserAnswers> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Wire adapters according to `config`.
pub fn build_pipeline(config: &AppConfig, output: &OutputManager) -> CliResult<ScaffoldPipeline> {
    let force = config.templates.force;
    let fetcher: Box<dyn TemplateFetcher> = match &config.templates.local_mirror {
        Some(root) => {
            info!(mirror = %root.display(), "Using local template mirror");
            Box::new(LocalMirrorFetcher::new(root).with_force(force))
        }
        None => Box::new(TarballFetcher::with_options(force, config.network.timeout())?),
    };

    let mut npm = NpmPackageManager::new().with_args(config.install.args.iter().cloned());
    if let Some(program) = &config.install.program {
        npm = npm.with_program(program);
    }

    let progress = SpinnerReporter::new(output.is_quiet(), output.supports_color());

    Ok(ScaffoldPipeline::with_settings(
        fetcher,
        Box::new(npm),
        Box::new(progress),
        config.pipeline_settings(),
    ))
}

fn finish(report: &ScaffoldReport, output: &OutputManager) -> CliResult<RunStatus> {
    if report.installation.is_none() {
        output.warning("Dependency installation skipped.")?;
    }

    match &report.next_step {
        Some(command) if report.succeeded() => {
            info!(reference = %report.reference, "Scaffold completed");
            output.next_step(command)?;
            Ok(RunStatus::Completed)
        }
        _ => {
            info!(reference = %report.reference, "Scaffold ended in failure");
            Ok(RunStatus::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use tempfile::TempDir;
    use tracing_subscriber::EnvFilter;

    use super::*;
    use crate::cli::GlobalArgs;
    use crate::logging::{derive_level, filter_directives};

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            quiet: true,
            no_color: true,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn answers_for(project: &Path) -> UserAnswers {
        UserAnswers::new(
            ProjectName::parse(project.to_string_lossy().into_owned()).unwrap(),
            TemplateRegistry::builtin().templates()[0],
        )
    }

    fn mirror_with_template() -> TempDir {
        let mirror = TempDir::new().unwrap();
        let template = mirror
            .path()
            .join("radixdlt/official-examples/getting-started/vanilla-js-dapp");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("package.json"), "{}").unwrap();
        mirror
    }

    /// fmt output shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run a failing scaffold under the filter `args` selects and return
    /// everything logged.
    fn failed_run_logs(args: &GlobalArgs, config: &AppConfig, project: &Path) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter_directives(derive_level(args))))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let output = quiet_output();
            let pipeline = build_pipeline(config, &output).unwrap();
            let report = pipeline.run(&answers_for(project));
            assert_eq!(finish(&report, &output).unwrap(), RunStatus::Failed);
        });

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn report(installation: Option<InstallationOutcome>, next_step: Option<&str>) -> ScaffoldReport {
        ScaffoldReport {
            reference: "radixdlt/official-examples/getting-started/vanilla-js-dapp".into(),
            materialization: MaterializationOutcome::Created,
            installation,
            next_step: next_step.map(str::to_string),
        }
    }

    #[test]
    fn successful_report_completes() {
        let status = finish(
            &report(
                Some(InstallationOutcome::Succeeded),
                Some("cd my-app && npm run dev"),
            ),
            &quiet_output(),
        )
        .unwrap();
        assert_eq!(status, RunStatus::Completed);
    }

    #[test]
    fn failed_install_is_a_failed_run() {
        let status = finish(
            &report(
                Some(InstallationOutcome::StderrReported {
                    stderr: "npm warn deprecated".into(),
                }),
                None,
            ),
            &quiet_output(),
        )
        .unwrap();
        assert_eq!(status, RunStatus::Failed);
    }

    #[test]
    fn skipped_install_is_a_failed_run() {
        let status = finish(&report(None, None), &quiet_output()).unwrap();
        assert_eq!(status, RunStatus::Failed);
    }

    #[test]
    fn pipeline_uses_configured_settings() {
        let mut config = AppConfig::default();
        config.templates.base_namespace = "fork/".into();
        config.install.stderr_policy = StderrPolicy::Ignore;

        let pipeline = build_pipeline(&config, &quiet_output()).unwrap();
        assert_eq!(pipeline.settings().base_namespace, "fork/");
        assert_eq!(pipeline.settings().stderr_policy, StderrPolicy::Ignore);
    }

    #[cfg(unix)]
    #[test]
    fn mirror_pipeline_scaffolds_offline() {
        let mirror = mirror_with_template();
        let work = TempDir::new().unwrap();
        let project = work.path().join("my-app");

        let mut config = AppConfig::default();
        config.templates.local_mirror = Some(mirror.path().to_path_buf());
        config.install.program = Some("sh".into());
        config.install.args = vec!["-c".into(), "test -f package.json".into()];

        let pipeline = build_pipeline(&config, &quiet_output()).unwrap();
        let report = pipeline.run(&answers_for(&project));

        assert!(report.materialization.is_success(), "{report:?}");
        assert!(report.succeeded(), "{report:?}");
        assert!(project.join("package.json").is_file());
    }

    #[test]
    fn failed_fetch_logs_nothing_at_default_verbosity() {
        let empty_mirror = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let project = work.path().join("my-app");

        let mut config = AppConfig::default();
        config.templates.local_mirror = Some(empty_mirror.path().to_path_buf());

        let logs = failed_run_logs(&GlobalArgs::default(), &config, &project);
        assert!(logs.is_empty(), "{logs}");

        let verbose = GlobalArgs {
            verbose: 1,
            ..GlobalArgs::default()
        };
        let logs = failed_run_logs(&verbose, &config, &project);
        assert!(logs.contains("Template materialization failed"), "{logs}");
    }

    #[cfg(unix)]
    #[test]
    fn failed_install_logs_nothing_at_default_verbosity() {
        let mirror = mirror_with_template();
        let work = TempDir::new().unwrap();
        let project = work.path().join("my-app");

        let mut config = AppConfig::default();
        config.templates.local_mirror = Some(mirror.path().to_path_buf());
        config.install.program = Some("sh".into());
        config.install.args = vec!["-c".into(), "exit 1".into()];

        let logs = failed_run_logs(&GlobalArgs::default(), &config, &project);
        assert!(logs.is_empty(), "{logs}");
        assert!(project.join("package.json").is_file());
    }
}
