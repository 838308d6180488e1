//! Phase outcomes and the rules that classify them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal state of the materialization phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializationOutcome {
    Created,
    Failed { message: String },
}

impl MaterializationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Raw completion of a package-manager child process: the process-level
/// error (spawn failure or non-zero exit) and both output streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub process_error: Option<String>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessReport {
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            process_error: None,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn failed(message: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            process_error: Some(message.into()),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// How text on the child's error stream is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StderrPolicy {
    /// Any non-empty stderr fails the step, whatever the exit status.
    #[default]
    Strict,
    /// Only the process-level error decides.
    Ignore,
}

/// Result of the dependency-installation phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationOutcome {
    Succeeded,
    /// The process could not be started or exited unsuccessfully.
    ProcessFailed { message: String },
    /// The process wrote to stderr.
    StderrReported { stderr: String },
}

impl InstallationOutcome {
    /// Classify a process report. The process error wins over stderr text.
    pub fn classify(report: &ProcessReport, policy: StderrPolicy) -> Self {
        if let Some(message) = &report.process_error {
            return Self::ProcessFailed {
                message: message.clone(),
            };
        }
        if policy == StderrPolicy::Strict && !report.stderr.is_empty() {
            return Self::StderrReported {
                stderr: report.stderr.clone(),
            };
        }
        Self::Succeeded
    }

    pub fn error_occurred(&self) -> bool {
        !matches!(self, Self::Succeeded)
    }

    /// Message shown on the failure status line.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Succeeded => None,
            Self::ProcessFailed { message } => Some(message),
            Self::StderrReported { stderr } => Some(stderr),
        }
    }

    pub fn stderr_text(&self) -> Option<&str> {
        match self {
            Self::StderrReported { stderr } => Some(stderr),
            _ => None,
        }
    }
}

impl fmt::Display for InstallationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str("succeeded"),
            Self::ProcessFailed { message } => write!(f, "process failed: {message}"),
            Self::StderrReported { stderr } => write!(f, "stderr: {}", stderr.trim_end()),
        }
    }
}
