//! Project metadata collected before assembly.

use std::path::{Component, Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

/// License used when none is given.
pub const DEFAULT_LICENSE: &str = "GPLv2";

/// Everything the assembler needs to know about the project being generated.
///
/// Built once, then only borrowed during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub project_name: String,
    pub developer_name: String,
    pub developer_email: String,
    pub description: String,
    pub license: String,
    pub template_dir: PathBuf,
    pub projects_dir: PathBuf,
}

impl ProjectMetadata {
    /// Trims every field, defaults the license and checks the required fields.
    ///
    /// # Errors
    /// * `Error::EmptyRequiredField` if a required field is blank
    /// * `Error::InvalidProjectName` if the name is not a single path component
    pub fn validated(mut self) -> Result<Self> {
        self.project_name = self.project_name.trim().to_string();
        self.developer_name = self.developer_name.trim().to_string();
        self.developer_email = self.developer_email.trim().to_string();
        self.description = self.description.trim().to_string();
        self.license = self.license.trim().to_string();

        let required = [
            ("project name", &self.project_name),
            ("developer name", &self.developer_name),
            ("developer e-mail", &self.developer_email),
            ("project description", &self.description),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(Error::EmptyRequiredField { field });
            }
        }

        if !is_single_component(&self.project_name) {
            return Err(Error::InvalidProjectName { name: self.project_name });
        }

        if self.license.is_empty() {
            self.license = DEFAULT_LICENSE.to_string();
        }

        Ok(self)
    }

    /// Directory the new project is created in, e.g. `~/Projects/MyProj`.
    pub fn project_dir(&self) -> PathBuf {
        self.projects_dir.join(&self.project_name)
    }

    /// Writes a summary of the project to the log.
    pub fn log_summary(&self, verbose: bool) {
        info!("Project....: {}", self.project_name);
        info!("Developer..: {}", self.developer_name);
        info!("Dev e-mail.: {}", self.developer_email);
        info!("Description: {}", self.description);
        info!("License....: {}", self.license);
        info!("Verbose....: {}", verbose);
        info!("Templates..: {}", self.template_dir.display());
        info!("Destination: {}", self.project_dir().display());
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
