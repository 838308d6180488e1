//! Terminal status lines backed by indicatif spinners.
//!
//! Each phase gets its own line on stderr: a spinner while the phase runs,
//! replaced by a green `✔` or red `✖` line once it ends. Spinners only
//! animate on a terminal; final lines are always written so piped output
//! still records what happened.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use radix_create_core::application::ports::{PhaseIndicator, ProgressReporter};

const TICK: Duration = Duration::from_millis(80);

/// Hands out one spinner per pipeline phase.
#[derive(Debug, Clone, Copy)]
pub struct SpinnerReporter {
    quiet: bool,
    color: bool,
}

impl SpinnerReporter {
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn phase(&self) -> Box<dyn PhaseIndicator> {
        Box::new(SpinnerPhase::new(self.quiet, self.color))
    }
}

/// One status line. Nothing is drawn until [`PhaseIndicator::start`].
pub struct SpinnerPhase {
    bar: Option<ProgressBar>,
    quiet: bool,
    color: bool,
    out: Box<dyn Write + Send>,
}

impl SpinnerPhase {
    fn new(quiet: bool, color: bool) -> Self {
        Self::with_writer(quiet, color, Box::new(io::stderr()))
    }

    /// Final lines go to `out`; the spinner itself always draws on stderr.
    fn with_writer(quiet: bool, color: bool, out: Box<dyn Write + Send>) -> Self {
        Self {
            bar: None,
            quiet,
            color,
            out,
        }
    }

    fn spinner(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let template = if self.color {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.enable_steady_tick(TICK);
        bar
    }

    /// Stop the spinner and print its replacement line.
    fn finish(&mut self, line: String, always: bool) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        if self.quiet && !always {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            debug!(error = %e, "Could not write status line");
        }
    }
}

impl PhaseIndicator for SpinnerPhase {
    fn start(&mut self, label: &str) {
        let bar = self.spinner();
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn succeed(&mut self, label: &str) {
        let line = success_line(label, self.color);
        self.finish(line, false);
    }

    // Failures stay visible in quiet mode.
    fn fail(&mut self, label: &str) {
        let line = failure_line(label, self.color);
        self.finish(line, true);
    }
}

fn success_line(label: &str, color: bool) -> String {
    if color {
        format!("{} {}", "\u{2714}".green().bold(), label.green())
    } else {
        format!("\u{2714} {label}") // ✔
    }
}

fn failure_line(label: &str, color: bool) -> String {
    if color {
        format!("{} {}", "\u{2716}".red().bold(), label.red())
    } else {
        format!("\u{2716} {label}") // ✖
    }
}
