//! Output management and formatting.
//!
//! Status lines for the two pipeline phases are drawn by
//! [`crate::progress`]; this covers everything printed around them.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Lead-in printed before the command that starts the dev server.
pub const NEXT_STEP_LEAD: &str = "To start the app run: ";

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// `To start the app run: <command>`, with the command in yellow.
    pub fn next_step(&self, command: &str) -> io::Result<()> {
        self.print(&self.next_step_line(command))
    }

    fn next_step_line(&self, command: &str) -> String {
        if self.no_color {
            format!("{NEXT_STEP_LEAD}{command}")
        } else {
            format!("{NEXT_STEP_LEAD}{}", command.yellow())
        }
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
