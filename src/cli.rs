//! Command-line interface implementation for mkcproj.
//! Provides argument parsing and merges the flags with the configuration file.

use clap::{error::ErrorKind, ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_DEBUG_LEVEL, LOG_FILE};
use crate::error::print_error_message;
use crate::logger::LogSettings;
use crate::prompt::MetadataAnswers;

/// Command-line arguments structure for mkcproj.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mkcproj: generator of new C projects",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Show the version and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// <FILE> is the path of the log file
    #[arg(short = 't', long = "trace", value_name = "FILE")]
    pub trace: Option<PathBuf>,

    /// <NUMBER> is the debug level, from 0 (off) to 5 (everything)
    #[arg(
        short = 'd',
        long = "debug-level",
        value_name = "NUMBER",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub debug_level: Option<u8>,

    /// Write a colored log
    #[arg(short = 'c', long)]
    pub colored_log: bool,

    /// <FILE> is the path of the .conf file of the software
    #[arg(short = 'C', long, value_name = "FILE")]
    pub conf_filename: Option<PathBuf>,

    /// <TEXT> is the name of the project
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub project_name: Option<String>,

    /// <TEXT> is the name of the developer
    #[arg(short = 'n', long, value_name = "TEXT")]
    pub dev_name: Option<String>,

    /// <TEXT> is the e-mail of the developer
    #[arg(short = 'e', long, value_name = "TEXT")]
    pub dev_email: Option<String>,

    /// <TEXT> is the project description
    #[arg(short = 'D', long, value_name = "TEXT")]
    pub project_description: Option<String>,

    /// <TEXT> is the license of the project
    #[arg(short = 'l', long, value_name = "TEXT")]
    pub license: Option<String>,

    /// Show the detailed creation of the project
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// <DIR> is the directory holding the template files
    #[arg(short = 'T', long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// <DIR> is the directory the new project is created in
    #[arg(short = 'P', long, value_name = "DIR")]
    pub projects_dir: Option<PathBuf>,

    /// Reuse an existing project directory and overwrite its files
    #[arg(short, long)]
    pub force: bool,

    /// Print the directories and files that would be created, write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Whether any project metadata came from the command line.
    ///
    /// A run without any is fully interactive.
    pub fn has_metadata_flags(&self) -> bool {
        self.project_name.is_some()
            || self.dev_name.is_some()
            || self.dev_email.is_some()
            || self.project_description.is_some()
            || self.license.is_some()
    }

    /// Log settings, flags taking precedence over the configuration file.
    pub fn log_settings(&self, config: &Config) -> LogSettings {
        LogSettings {
            file: self
                .trace
                .clone()
                .or_else(|| config.log_file.clone())
                .unwrap_or_else(|| PathBuf::from(LOG_FILE)),
            level: self.debug_level.or(config.debug_level).unwrap_or(DEFAULT_DEBUG_LEVEL),
            colored: self.colored_log || config.colored_log.unwrap_or(false),
        }
    }

    /// Metadata known before prompting, flags taking precedence over the
    /// configuration file. Blank values count as missing.
    pub fn known_metadata(&self, config: &Config) -> MetadataAnswers {
        MetadataAnswers {
            project_name: non_blank(&self.project_name),
            developer_name: non_blank(&self.dev_name).or_else(|| non_blank(&config.developer_name)),
            developer_email: non_blank(&self.dev_email)
                .or_else(|| non_blank(&config.developer_email)),
            description: non_blank(&self.project_description),
            license: non_blank(&self.license).or_else(|| non_blank(&config.license)),
            template_dir: self.template_dir.clone().unwrap_or_else(|| config.template_dir()),
            projects_dir: self.projects_dir.clone().unwrap_or_else(|| config.projects_dir()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

/// One-line report of a rejected command line, keeping clap's explanation.
pub fn invalid_option_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let detail = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error:").trim())
        .filter(|line| !line.is_empty())
        .or_else(|| err.kind().as_str())
        .unwrap_or("unknown argument");
    format!("Invalid option! {}", detail)
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help or version
/// * With status code 1 on an invalid option
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                print_error_message(&invalid_option_message(&e));
                println!("Please, see {} --help", env!("CARGO_PKG_NAME"));
                std::process::exit(1);
            }
        },
    }
}
