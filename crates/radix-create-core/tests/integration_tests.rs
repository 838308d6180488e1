//! Integration tests for radix-create-core.
//!
//! Drives answer collection and the pipeline end to end through hand-written
//! port implementations.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use radix_create_core::application::ApplicationError;
use radix_create_core::prelude::*;

// ── Fakes ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Fetch { reference: String, destination: PathBuf },
    Install { working_dir: PathBuf },
}

type Journal = Arc<Mutex<Vec<Call>>>;

struct FakeFetcher {
    journal: Journal,
    fail_with: Option<String>,
}

impl TemplateFetcher for FakeFetcher {
    fn fetch(&self, reference: &RemoteReference, destination: &Path) -> CreateResult<()> {
        self.journal.lock().unwrap().push(Call::Fetch {
            reference: reference.to_string(),
            destination: destination.to_path_buf(),
        });
        match &self.fail_with {
            Some(reason) => Err(ApplicationError::DownloadFailed {
                url: reference.tarball_url(),
                reason: reason.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

struct FakeNpm {
    journal: Journal,
    /// Reports for directories the fake "finds"; anything else fails to spawn.
    existing_dirs: Vec<PathBuf>,
    stderr: String,
}

impl PackageManager for FakeNpm {
    fn program(&self) -> String {
        "npm".into()
    }

    fn install(&self, working_dir: &Path) -> ProcessReport {
        self.journal.lock().unwrap().push(Call::Install {
            working_dir: working_dir.to_path_buf(),
        });
        if self.existing_dirs.iter().any(|d| d == working_dir) {
            ProcessReport::success("added 42 packages", self.stderr.clone())
        } else {
            ProcessReport::failed(
                format!(
                    "spawn npm in {}: No such file or directory (os error 2)",
                    working_dir.display()
                ),
                "",
            )
        }
    }
}

#[derive(Default, Clone)]
struct StatusLog(Arc<Mutex<Vec<String>>>);

struct StatusLine(Arc<Mutex<Vec<String>>>);

impl ProgressReporter for StatusLog {
    fn phase(&self) -> Box<dyn PhaseIndicator> {
        Box::new(StatusLine(Arc::clone(&self.0)))
    }
}

impl PhaseIndicator for StatusLine {
    fn start(&mut self, label: &str) {
        self.0.lock().unwrap().push(format!("… {label}"));
    }
    fn succeed(&mut self, label: &str) {
        self.0.lock().unwrap().push(format!("✔ {label}"));
    }
    fn fail(&mut self, label: &str) {
        self.0.lock().unwrap().push(format!("✖ {label}"));
    }
}

struct Keyboard {
    lines: RefCell<VecDeque<String>>,
    choice: usize,
}

impl Keyboard {
    fn new(lines: &[&str], choice: usize) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|l| l.to_string()).collect()),
            choice,
        }
    }
}

impl Prompter for Keyboard {
    fn text(&self, _message: &str) -> CreateResult<String> {
        self.lines
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApplicationError::PromptCancelled.into())
    }

    fn select(&self, _message: &str, _choices: &[&str]) -> CreateResult<usize> {
        Ok(self.choice)
    }

    fn reject(&self, _reason: &str) -> CreateResult<()> {
        Ok(())
    }
}

fn template_index(display_name: &str) -> usize {
    TemplateRegistry::builtin()
        .display_names()
        .iter()
        .position(|n| *n == display_name)
        .unwrap()
}

struct Run {
    report: Option<ScaffoldReport>,
    calls: Vec<Call>,
    status: Vec<String>,
}

fn run(keys: Keyboard, fetch_error: Option<&str>, existing_dirs: &[PathBuf]) -> Run {
    let journal = Journal::default();
    let status = StatusLog::default();

    let answers = AnswerCollector::new(&keys).collect(&TemplateRegistry::builtin());
    let report = answers.ok().map(|answers| {
        let pipeline = ScaffoldPipeline::new(
            Box::new(FakeFetcher {
                journal: Arc::clone(&journal),
                fail_with: fetch_error.map(str::to_string),
            }),
            Box::new(FakeNpm {
                journal: Arc::clone(&journal),
                existing_dirs: existing_dirs.to_vec(),
                stderr: String::new(),
            }),
            Box::new(status.clone()),
        );
        pipeline.run(&answers)
    });

    let calls = journal.lock().unwrap().clone();
    let status = status.0.lock().unwrap().clone();
    Run {
        report,
        calls,
        status,
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn scenario_a_vanilla_js() {
    let run = run(
        Keyboard::new(&["my-app"], template_index("Vanilla - JS")),
        None,
        &[PathBuf::from("my-app")],
    );

    assert_eq!(
        run.calls,
        vec![
            Call::Fetch {
                reference: "radixdlt/official-examples/getting-started/vanilla-js-dapp".into(),
                destination: PathBuf::from("my-app"),
            },
            Call::Install {
                working_dir: PathBuf::from("my-app"),
            },
        ]
    );
    let report = run.report.unwrap();
    assert!(report.succeeded());
    assert!(report.next_step.unwrap().contains("cd my-app && npm run dev"));
}

#[test]
fn scenario_b_gumball_machine() {
    let client = PathBuf::from("demo").join("client");
    let run = run(
        Keyboard::new(&["demo"], template_index("Fullstack Gumball Machine - JS")),
        None,
        &[client.clone()],
    );

    assert_eq!(
        run.calls,
        vec![
            Call::Fetch {
                reference: "radixdlt/official-examples/step-by-step/10-gumball-machine-front-end"
                    .into(),
                destination: PathBuf::from("demo"),
            },
            Call::Install {
                working_dir: client
            },
        ]
    );
    assert!(run.report.unwrap().succeeded());
}

#[test]
fn scenario_c_empty_name_never_reaches_the_network() {
    let run = run(Keyboard::new(&[""], 0), None, &[]);

    assert!(run.report.is_none());
    assert!(run.calls.is_empty());
    assert!(run.status.is_empty());
}

#[test]
fn scenario_d_transport_error_still_installs() {
    for (display_name, expected_dir) in [
        ("React - JS", PathBuf::from("x")),
        ("Fullstack Radiswap JS", PathBuf::from("x").join("client")),
    ] {
        let run = run(
            Keyboard::new(&["x"], template_index(display_name)),
            Some("simulated transport error"),
            &[],
        );

        assert_eq!(run.calls.len(), 2, "{display_name}");
        assert_eq!(
            run.calls[1],
            Call::Install {
                working_dir: expected_dir
            }
        );

        let report = run.report.unwrap();
        assert!(!report.materialization.is_success());
        assert!(matches!(
            report.installation,
            Some(InstallationOutcome::ProcessFailed { .. })
        ));

        assert_eq!(run.status.len(), 4);
        assert!(run.status[1].starts_with("✖ Failed to clone template:"));
        assert!(run.status[1].contains("simulated transport error"));
        assert!(run.status[3].starts_with("✖ Error installing dependencies:"));
    }
}

#[test]
fn blank_then_valid_name_scaffolds_valid_name() {
    let run = run(
        Keyboard::new(&["", "  ", "final"], 0),
        None,
        &[PathBuf::from("final")],
    );
    assert_eq!(
        run.calls[0],
        Call::Fetch {
            reference: "radixdlt/official-examples/getting-started/vanilla-js-dapp".into(),
            destination: PathBuf::from("final"),
        }
    );
}

#[test]
fn every_template_installs_in_its_dependency_root() {
    for (index, template) in TemplateRegistry::builtin().templates().iter().enumerate() {
        let run = run(Keyboard::new(&["p"], index), None, &[]);
        let expected = match template.dependency_root {
            DependencyRoot::ProjectRoot => PathBuf::from("p"),
            DependencyRoot::ClientSubdirectory => PathBuf::from("p").join("client"),
        };
        assert_eq!(
            run.calls[1],
            Call::Install {
                working_dir: expected
            },
            "{}",
            template.display_name
        );
    }
}
