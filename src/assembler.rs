//! Project assembly: creates the directory tree, then every artifact, in a
//! fixed order. The run is all-or-nothing; the first failure aborts it.

use std::path::PathBuf;

use chrono::NaiveDate;
use log::{debug, error, info};

use crate::artifact::{ArtifactKind, DirectoryKind};
use crate::error::{Error, Result};
use crate::fs::Filesystem;
use crate::metadata::ProjectMetadata;
use crate::paths::ResolvedPaths;
use crate::stamp::{apply_header, stamp_header};

/// Progress of an assembly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Init,
    DirectoriesCreated,
    FilesCreated,
    Done,
    Aborted,
}

/// What a successful run created.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

pub struct Assembler<'a, F: Filesystem> {
    fs: &'a F,
    metadata: &'a ProjectMetadata,
    force: bool,
    verbose: bool,
    date: NaiveDate,
    state: AssemblyState,
}

impl<'a, F: Filesystem> Assembler<'a, F> {
    /// Creates an assembler stamping today's local date.
    pub fn new(fs: &'a F, metadata: &'a ProjectMetadata) -> Self {
        Self {
            fs,
            metadata,
            force: false,
            verbose: false,
            date: chrono::Local::now().date_naive(),
            state: AssemblyState::Init,
        }
    }

    /// Reuse an existing project directory and overwrite its files.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Print every created directory and file to stdout.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Date written into the headers.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Current step of the run.
    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// Path of one project directory under the projects root.
    pub fn directory_path(&self, kind: DirectoryKind) -> PathBuf {
        match kind {
            DirectoryKind::Project => self.metadata.project_dir(),
            _ => self.metadata.project_dir().join(kind.relative_path()),
        }
    }

    /// Directories to create, in creation order. Touches nothing.
    pub fn plan_directories(&self) -> Vec<(DirectoryKind, PathBuf)> {
        DirectoryKind::CREATION_ORDER
            .iter()
            .map(|kind| (*kind, self.directory_path(*kind)))
            .collect()
    }

    /// Resolved paths of every artifact, in creation order. Touches nothing.
    pub fn plan(&self) -> Vec<ResolvedPaths> {
        ArtifactKind::ALL
            .iter()
            .map(|kind| ResolvedPaths::resolve(*kind, self.metadata))
            .collect()
    }

    /// Runs the whole assembly.
    ///
    /// # Errors
    /// * `Error::DestinationExists` if the project directory exists and
    ///   `force` is not set
    /// * `Error::DirectoryCreateError` for the first directory that fails
    /// * `Error::FileIoError` for the first artifact that fails
    pub fn assemble(&mut self) -> Result<AssemblyReport> {
        info!("assemble - begin");

        match self.run() {
            Ok(report) => {
                self.state = AssemblyState::Done;
                info!(
                    "assemble - end: {} directories, {} files",
                    report.directories.len(),
                    report.files.len()
                );
                Ok(report)
            }
            Err(err) => {
                self.state = AssemblyState::Aborted;
                error!("assemble - aborted with code {}: {}", err.code(), err);
                Err(err)
            }
        }
    }

    fn run(&mut self) -> Result<AssemblyReport> {
        let project_dir = self.metadata.project_dir();
        if !self.force && self.fs.exists(&project_dir) {
            return Err(Error::DestinationExists { path: project_dir });
        }

        let mut report = AssemblyReport::default();

        for kind in DirectoryKind::CREATION_ORDER {
            report.directories.push(self.create_directory(kind)?);
        }
        self.state = AssemblyState::DirectoriesCreated;

        for kind in ArtifactKind::ALL {
            report.files.push(self.create_file(kind)?);
        }
        self.state = AssemblyState::FilesCreated;

        Ok(report)
    }

    /// Creates one directory of the project tree.
    pub fn create_directory(&self, kind: DirectoryKind) -> Result<PathBuf> {
        let path = self.directory_path(kind);

        if self.force && self.fs.is_dir(&path) {
            debug!("Reusing {}: {}", kind, path.display());
            return Ok(path);
        }

        debug!("Creating {}: {}", kind, path.display());
        self.fs
            .create_dir(&path)
            .map_err(|source| Error::DirectoryCreateError { kind, path: path.clone(), source })?;

        if self.verbose {
            println!("Created {}: '{}'", kind, path.display());
        }
        Ok(path)
    }

    /// Creates one artifact: stamped header followed by the template body.
    pub fn create_file(&self, kind: ArtifactKind) -> Result<PathBuf> {
        let resolved = ResolvedPaths::resolve(kind, self.metadata);
        debug!(
            "Creating {}: {} -> {}",
            kind,
            resolved.template_path.display(),
            resolved.new_file_path.display()
        );

        if !self.force && self.fs.exists(&resolved.new_file_path) {
            return Err(Error::DestinationExists { path: resolved.new_file_path });
        }

        let template = self.fs.read_to_string(&resolved.template_path).map_err(|source| {
            Error::FileIoError { kind, path: resolved.template_path.clone(), source }
        })?;

        let header = stamp_header(kind, self.metadata, self.date);
        let content = apply_header(kind, &header, &template);

        self.fs
            .write(&resolved.new_file_path, &content, kind.is_executable())
            .map_err(|source| Error::FileIoError {
                kind,
                path: resolved.new_file_path.clone(),
                source,
            })?;

        if self.verbose {
            println!("Created {}: '{}'", kind, resolved.new_file_path.display());
        }
        Ok(resolved.new_file_path)
    }
}
