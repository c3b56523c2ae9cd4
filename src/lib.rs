//! mkcproj is a generator of new C projects.
//! It copies a fixed set of template files into a new directory tree and
//! stamps every source, header and build file with an author/license header.

/// Artifact and directory kinds a generated project is made of
pub mod artifact;

/// Project assembly orchestration
/// Creates the directories, then every artifact, aborting on first failure
pub mod assembler;

/// Command-line interface module for the mkcproj application
pub mod cli;

/// Configuration file handling
/// Supports JSON and YAML content (mkcproj.conf)
pub mod config;

/// Error types and handling for the mkcproj application
pub mod error;

/// Filesystem access used by the assembler
pub mod fs;

/// Log file setup
pub mod logger;

/// Project metadata and its validation
pub mod metadata;

/// Template and destination path resolution
pub mod paths;

/// User input and interaction handling
pub mod prompt;

/// Header comment generation
pub mod stamp;
