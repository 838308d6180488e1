//! npm install adapter using `std::process::Command`.
//!
//! The child inherits this process's environment, runs in the dependency
//! root, and is waited on to completion. Both streams are captured and
//! handed back unjudged; classification happens in the core.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use radix_create_core::{application::ports::PackageManager, domain::ProcessReport};

/// Arguments passed when none are configured.
pub const DEFAULT_INSTALL_ARGS: &[&str] = &["install", "--loglevel=error"];

/// Runs `npm install --loglevel=error` (or a configured equivalent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmPackageManager {
    program: String,
    args: Vec<String>,
}

impl NpmPackageManager {
    pub fn new() -> Self {
        Self::with_command(default_program(), DEFAULT_INSTALL_ARGS.iter().copied())
    }

    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// `program arg1 arg2 ...`, as shown in failure messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NpmPackageManager {
    fn default() -> Self {
        Self::new()
    }
}

/// npm ships as a batch shim on Windows.
fn default_program() -> &'static str {
    if cfg!(windows) { "npm.cmd" } else { "npm" }
}

impl PackageManager for NpmPackageManager {
    fn program(&self) -> String {
        self.program
            .strip_suffix(".cmd")
            .unwrap_or(&self.program)
            .to_string()
    }

    #[instrument(skip(self), fields(command = %self.command_line()))]
    fn install(&self, working_dir: &Path) -> ProcessReport {
        debug!(working_dir = %working_dir.display(), "Spawning package manager");

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                return ProcessReport::failed(
                    format!(
                        "Command failed: {} in {}: {e}",
                        self.command_line(),
                        working_dir.display()
                    ),
                    "",
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(status = %output.status, stderr_bytes = stderr.len(), "Package manager exited");

        if output.status.success() {
            return ProcessReport::success(stdout, stderr);
        }

        let mut message = format!("Command failed: {} ({})", self.command_line(), output.status);
        if !stderr.trim().is_empty() {
            message.push('\n');
            message.push_str(stderr.trim_end());
        }
        ProcessReport {
            process_error: Some(message),
            stdout,
            stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_command_line() {
        let npm = NpmPackageManager::new();
        assert!(npm.command_line().ends_with(" install --loglevel=error"));
        assert_eq!(npm.program(), "npm");
    }

    #[test]
    fn cmd_suffix_is_hidden_from_program_name() {
        let npm = NpmPackageManager::with_command("npm.cmd", ["install"]);
        assert_eq!(npm.program(), "npm");
    }

    #[test]
    fn builders_replace_program_and_args() {
        let pm = NpmPackageManager::new()
            .with_program("pnpm")
            .with_args(["install", "--silent"]);
        assert_eq!(pm.command_line(), "pnpm install --silent");
        assert_eq!(pm.program(), "pnpm");
    }

    #[test]
    fn missing_working_dir_is_a_process_error() {
        let tmp = TempDir::new().unwrap();
        let report = NpmPackageManager::new().install(&tmp.path().join("does-not-exist"));
        let message = report.process_error.unwrap();
        assert!(message.starts_with("Command failed:"), "{message}");
    }

    #[test]
    fn missing_program_is_a_process_error() {
        let tmp = TempDir::new().unwrap();
        let pm = NpmPackageManager::with_command("definitely-not-a-package-manager", ["install"]);
        let report = pm.install(tmp.path());
        assert!(report.process_error.is_some());
        assert!(report.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn clean_exit_captures_both_streams() {
        let tmp = TempDir::new().unwrap();
        let pm = NpmPackageManager::with_command("sh", ["-c", "echo out; echo warn >&2"]);
        let report = pm.install(tmp.path());
        assert_eq!(report.process_error, None);
        assert_eq!(report.stdout, "out\n");
        assert_eq!(report.stderr, "warn\n");
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), "{}").unwrap();
        let pm = NpmPackageManager::with_command("sh", ["-c", "ls"]);
        let report = pm.install(tmp.path());
        assert!(report.stdout.contains("package.json"));
    }

    #[cfg(unix)]
    #[test]
    fn inherits_environment() {
        let tmp = TempDir::new().unwrap();
        let pm = NpmPackageManager::with_command("sh", ["-c", "printf %s \"$PATH\""]);
        let report = pm.install(tmp.path());
        assert!(!report.stdout.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_reports_status_and_stderr() {
        let tmp = TempDir::new().unwrap();
        let pm = NpmPackageManager::with_command("sh", ["-c", "echo 'ERR! code E404' >&2; exit 1"]);
        let report = pm.install(tmp.path());
        let message = report.process_error.unwrap();
        assert!(message.contains("exit status: 1"), "{message}");
        assert!(message.ends_with("ERR! code E404"), "{message}");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_without_stderr() {
        let tmp = TempDir::new().unwrap();
        let pm = NpmPackageManager::with_command("sh", ["-c", "exit 3"]);
        let report = pm.install(tmp.path());
        assert!(report.process_error.is_some());
        assert!(report.stderr.is_empty());
    }
}
