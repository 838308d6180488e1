//! Interactive prompts via dialoguer.

use std::io;

use console::Term;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use owo_colors::OwoColorize;

use radix_create_core::{
    application::{ApplicationError, ports::Prompter},
    error::{CreateError, CreateResult},
};

/// Asks questions on stderr so stdout stays clean for the final message.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    term: Term,
    color: bool,
}

impl DialoguerPrompter {
    pub fn new(color: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
            color,
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, message: &str) -> CreateResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(prompt_error)
    }

    fn select(&self, message: &str, choices: &[&str]) -> CreateResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(prompt_error)?
            .ok_or_else(|| ApplicationError::PromptCancelled.into())
    }

    fn reject(&self, reason: &str) -> CreateResult<()> {
        let line = if self.color {
            reason.red().to_string()
        } else {
            reason.to_string()
        };
        self.term
            .write_line(&line)
            .map_err(|e| prompt_error(dialoguer::Error::IO(e)))
    }
}

/// Ctrl-C and Esc surface as cancellation; anything else is a failure.
fn prompt_error(err: dialoguer::Error) -> CreateError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            ApplicationError::PromptCancelled.into()
        }
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_is_cancellation() {
        let err = prompt_error(dialoguer::Error::IO(io::Error::from(
            io::ErrorKind::Interrupted,
        )));
        assert!(matches!(
            err,
            CreateError::Application(ApplicationError::PromptCancelled)
        ));
    }

    #[test]
    fn other_io_errors_are_failures() {
        let err = prompt_error(dialoguer::Error::IO(io::Error::other("not a tty")));
        match err {
            CreateError::Application(ApplicationError::PromptFailed { reason }) => {
                assert!(reason.contains("not a tty"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
