//! Error handling for the mkcproj application.
//! Defines the error taxonomy, the ordinal exit codes of the assembly steps
//! and the handler that reports a fatal error to the user.

use std::io;
use std::path::PathBuf;

use console::{style, Term};
use thiserror::Error;

use crate::artifact::{ArtifactKind, DirectoryKind};

/// Custom error types for mkcproj operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A flag word that does not name exactly one known artifact kind.
    #[error("Unknown artifact kind: {bits:#x}.")]
    UnknownArtifactKind { bits: u64 },

    /// A flag word that does not name exactly one known directory kind.
    #[error("Unknown directory kind: {bits:#x}.")]
    UnknownDirectoryKind { bits: u64 },

    /// Template unreadable or destination not writable.
    #[error("Impossible to create the {kind} '{}': {source}.", .path.display())]
    FileIoError {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Impossible to create the {kind} '{}': {source}.", .path.display())]
    DirectoryCreateError {
        kind: DirectoryKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target already present and overwriting was not requested.
    #[error("'{}' already exists, use --force to overwrite it.", .path.display())]
    DestinationExists { path: PathBuf },

    /// A required metadata field was left empty.
    #[error("The {field} must not be empty.")]
    EmptyRequiredField { field: &'static str },

    #[error("Invalid project name '{name}': it must be a single directory name.")]
    InvalidProjectName { name: String },

    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for mkcproj results.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Exit code identifying the failure.
    ///
    /// Assembly steps keep their ordinal: `-1..-6` for the directories in
    /// creation order, `-7..-31` for the artifacts in creation order.
    /// Everything else maps to `1`.
    pub fn code(&self) -> i32 {
        match self {
            Error::DirectoryCreateError { kind, .. } => -(kind.position() as i32 + 1),
            Error::FileIoError { kind, .. } => {
                -(DirectoryKind::CREATION_ORDER.len() as i32 + kind.index() as i32 + 1)
            }
            _ => 1,
        }
    }
}

/// Formats an error line the way it is shown on the terminal.
///
/// The `E:` marker is bold red when `colored` is set.
pub fn format_error_message(message: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", style("E:").red().bold().force_styling(true), message)
    } else {
        format!("E: {}", message)
    }
}

/// Prints an error line to stderr, coloured when the terminal supports it.
pub fn print_error_message(message: &str) {
    let colored = Term::stderr().features().colors_supported();
    eprintln!("{}", format_error_message(message, colored));
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Logs the failure, prints it to stderr and exits with [`Error::code`].
pub fn default_error_handler(err: Error) -> ! {
    let code = err.code();
    log::error!("main - end code == {}: {}", code, err);
    print_error_message(&err.to_string());
    std::process::exit(code);
}
