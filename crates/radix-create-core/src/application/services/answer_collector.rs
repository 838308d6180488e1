//! Answer Collector - the two interactive questions of a run.
//!
//! Questions are asked in a fixed order: project name, then template.
//! Blank names are rejected and asked again; nothing else is validated.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Prompter},
    domain::{ProjectName, TemplateDescriptor, TemplateRegistry, UserAnswers},
    error::CreateResult,
};

pub const PROJECT_NAME_PROMPT: &str = "What is the name of your project?";
pub const TEMPLATE_PROMPT: &str = "Which template would you like to use?";

/// Gathers [`UserAnswers`] through a [`Prompter`].
pub struct AnswerCollector<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Ask both questions.
    #[instrument(skip_all)]
    pub fn collect(&self, registry: &TemplateRegistry) -> CreateResult<UserAnswers> {
        let project_name = self.collect_project_name()?;
        let selected_template = self.collect_template_selection(registry)?;

        info!(
            project = %project_name,
            template = selected_template.display_name,
            dependency_root = %selected_template.dependency_root,
            "Answers collected"
        );

        Ok(UserAnswers::new(project_name, selected_template))
    }

    /// Prompt until a non-blank name is entered.
    pub fn collect_project_name(&self) -> CreateResult<ProjectName> {
        loop {
            let raw = self.prompter.text(PROJECT_NAME_PROMPT)?;
            match ProjectName::parse(raw) {
                Ok(name) => return Ok(name),
                Err(e) => {
                    debug!("Project name rejected");
                    self.prompter.reject(&e.to_string())?;
                }
            }
        }
    }

    /// Present the registry and return the whole chosen descriptor.
    pub fn collect_template_selection(
        &self,
        registry: &TemplateRegistry,
    ) -> CreateResult<TemplateDescriptor> {
        let choices = registry.display_names();
        let index = self.prompter.select(TEMPLATE_PROMPT, &choices)?;

        registry
            .get(index)
            .copied()
            .ok_or_else(|| ApplicationError::SelectionOutOfRange { index }.into())
    }
}
