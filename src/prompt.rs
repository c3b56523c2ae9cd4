//! Interactive collection of the project metadata.
//! Required fields are asked for until the user types something; the
//! prompting itself sits behind the `Prompter` trait.

use std::path::PathBuf;

use dialoguer::Input;
use log::{debug, info};

use crate::error::{print_error_message, Error, Result};
use crate::metadata::{ProjectMetadata, DEFAULT_LICENSE};

/// Asks the user for text.
pub trait Prompter {
    /// Reads one answer. An empty answer is returned as-is unless `default`
    /// is given, in which case the default is returned.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Tells the user an answer was rejected.
    fn reject(&self, message: &str, hint: &str);
}

/// Prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn reject(&self, message: &str, hint: &str) {
        print_error_message(message);
        println!("{}", hint);
    }
}

/// Metadata already known before prompting. `None` fields are asked for.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetadataAnswers {
    pub project_name: Option<String>,
    pub developer_name: Option<String>,
    pub developer_email: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub template_dir: PathBuf,
    pub projects_dir: PathBuf,
}

/// Asks until a non-blank answer is given.
pub fn ask_required(
    prompter: &dyn Prompter,
    prompt: &str,
    message: &str,
    hint: &str,
) -> Result<String> {
    loop {
        let answer = prompter.input(prompt, None)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        debug!("Empty answer for '{}'", prompt);
        prompter.reject(message, hint);
    }
}

fn ask_path(prompter: &dyn Prompter, prompt: &str, default: PathBuf) -> Result<PathBuf> {
    let default_str = default.display().to_string();
    let answer = prompter.input(prompt, Some(&default_str))?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default)
    } else {
        Ok(PathBuf::from(answer))
    }
}

/// Completes the metadata, prompting for whatever is missing.
///
/// # Arguments
/// * `prompter` - Source of the answers
/// * `known` - Values from the command line and the configuration file
/// * `interactive` - Also ask for the directories and the license, offering
///   the known values as defaults
///
/// # Errors
/// * `Error::PromptError` if reading an answer fails
/// * Any validation error of [`ProjectMetadata::validated`]
pub fn collect_metadata(
    prompter: &dyn Prompter,
    known: MetadataAnswers,
    interactive: bool,
) -> Result<ProjectMetadata> {
    info!("collect_metadata - begin");

    let developer_name = match known.developer_name {
        Some(name) => name,
        None => ask_required(
            prompter,
            "Developer name",
            "You didn't type a name!",
            "Please, type your name below",
        )?,
    };

    let developer_email = match known.developer_email {
        Some(email) => email,
        None => ask_required(
            prompter,
            "Developer e-mail",
            "You didn't type your e-mail!",
            "Please, type your e-mail below",
        )?,
    };

    let (template_dir, projects_dir) = if interactive {
        (
            ask_path(prompter, "Template directory", known.template_dir)?,
            ask_path(prompter, "Projects directory", known.projects_dir)?,
        )
    } else {
        (known.template_dir, known.projects_dir)
    };

    let project_name = match known.project_name {
        Some(name) => name,
        None => ask_required(
            prompter,
            "Project name",
            "You didn't type the name of your project!",
            "Please, type the name of the project below",
        )?,
    };

    let description = match known.description {
        Some(description) => description,
        None => ask_required(
            prompter,
            "Description",
            "You didn't type the description of your software!",
            "Please, type the description below",
        )?,
    };

    let license = match known.license {
        Some(license) => license,
        None if interactive => prompter.input("License", Some(DEFAULT_LICENSE))?,
        None => String::new(),
    };

    let metadata = ProjectMetadata {
        project_name,
        developer_name,
        developer_email,
        description,
        license,
        template_dir,
        projects_dir,
    }
    .validated()?;

    info!("collect_metadata - end");
    Ok(metadata)
}
