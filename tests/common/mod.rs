//! Shared helpers for mkcproj integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mkcproj::artifact::ArtifactKind;
use mkcproj::error::{Error, Result};
use mkcproj::fs::Filesystem;
use mkcproj::metadata::ProjectMetadata;
use mkcproj::paths::template_path;
use mkcproj::prompt::Prompter;

/// Metadata of the reference scenario, rooted in the given directories.
pub fn foo_metadata(template_dir: &Path, projects_dir: &Path) -> ProjectMetadata {
    ProjectMetadata {
        project_name: "Foo".to_string(),
        developer_name: "Jane".to_string(),
        developer_email: "jane@x.com".to_string(),
        description: "demo".to_string(),
        license: String::new(),
        template_dir: template_dir.to_path_buf(),
        projects_dir: projects_dir.to_path_buf(),
    }
}

/// Body written into the stub template of `kind`.
pub fn template_body(kind: ArtifactKind) -> String {
    format!("body of {:?}\n", kind)
}

/// Writes one stub template per artifact kind under `root`.
pub fn write_templates(root: &Path) {
    for kind in ArtifactKind::ALL {
        let path = template_path(kind, root);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, template_body(kind)).unwrap();
    }
}

/// In-memory filesystem recording every operation, with injectable failures.
#[derive(Default)]
pub struct MemoryFilesystem {
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub fail_dir: Option<PathBuf>,
    pub fail_write: Option<PathBuf>,
}

impl MemoryFilesystem {
    /// Filesystem holding every stub template under `template_dir`.
    pub fn with_templates(template_dir: &Path) -> Self {
        let memory = Self::default();
        for kind in ArtifactKind::ALL {
            memory
                .files
                .borrow_mut()
                .insert(template_path(kind, template_dir), template_body(kind));
        }
        memory
    }

    pub fn written_under(&self, root: &Path) -> Vec<PathBuf> {
        self.files.borrow().keys().filter(|path| path.starts_with(root)).cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        if self.fail_dir.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"));
        }
        if self.exists(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "exists"));
        }
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, content: &str, _executable: bool) -> io::Result<()> {
        if self.fail_write.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Prompter replaying canned answers and recording rejections.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub rejections: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            prompts: RefCell::new(Vec::new()),
            rejections: RefCell::new(Vec::new()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        let answer = self
            .answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("no answer left for '{}'", prompt)))?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn reject(&self, message: &str, _hint: &str) {
        self.rejections.borrow_mut().push(message.to_string());
    }
}
