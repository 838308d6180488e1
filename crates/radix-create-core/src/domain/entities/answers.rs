//! The two answers a run is built from.

use std::path::{Path, PathBuf};

use crate::domain::{entities::template::TemplateDescriptor, value_objects::ProjectName};

/// Answers gathered by the interactive prompts. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAnswers {
    pub project_name: ProjectName,
    pub selected_template: TemplateDescriptor,
}

impl UserAnswers {
    pub fn new(project_name: ProjectName, selected_template: TemplateDescriptor) -> Self {
        Self {
            project_name,
            selected_template,
        }
    }

    /// Directory the template is materialized into.
    pub fn project_dir(&self) -> &Path {
        self.project_name.as_path()
    }

    /// Directory the package manager runs in.
    pub fn install_dir(&self) -> PathBuf {
        self.selected_template
            .dependency_root
            .resolve(self.project_dir())
    }
}
