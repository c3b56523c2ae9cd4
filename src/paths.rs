//! Resolution of template and destination paths for each artifact kind.
//! Everything here is a pure function of the kind and the metadata; results
//! are owned by the caller and never cached.

use std::path::{Path, PathBuf};

use crate::artifact::ArtifactKind;
use crate::metadata::ProjectMetadata;

/// Name of the template file the artifact is produced from.
pub fn template_file_name(kind: ArtifactKind) -> &'static str {
    use ArtifactKind::*;
    match kind {
        Header => "template.h",
        Source => "template.c",
        Makefile => "Makefile",
        Mk => "mk",
        MkAll => "mkall",
        MkDebug => "mkd",
        MkDebugAll => "mkdall",
        MkClean => "mkclean",
        MkDistClean => "mkdistclean",
        MkInstall => "mkinstall",
        MkUninstall => "mkuninstall",
        MkStrip => "mkstrip",
        Install => "INSTALL",
        InstallScript => "install.sh",
        UninstallScript => "uninstall.sh",
        Authors => "AUTHORS",
        ChangeLog => "ChangeLog",
        License => "COPYRIGHT",
        News => "NEWS",
        Readme => "README_FILE",
        ReadmeMarkdown => "README.md",
        Todo => "TODO",
        AutocompleteScript => "_template_complete.sh",
        ConfigFile => "template.conf",
        ManPage => "template.1",
    }
}

/// Subdirectory holding the artifact, identical in the template tree and the
/// generated project.
pub fn subdirectory(kind: ArtifactKind) -> Option<&'static str> {
    match kind {
        ArtifactKind::Header => Some("include"),
        ArtifactKind::Source => Some("src"),
        ArtifactKind::ManPage => Some("man"),
        _ => None,
    }
}

/// Full path of the template, e.g. `~/Template/template/include/template.h`.
pub fn template_path(kind: ArtifactKind, template_root: &Path) -> PathBuf {
    join_in_subdirectory(kind, template_root, template_file_name(kind))
}

/// Name of the generated file. Only project-specific kinds use `project_name`.
pub fn new_file_name(kind: ArtifactKind, project_name: &str) -> String {
    match kind {
        ArtifactKind::Header => format!("{}.h", project_name),
        ArtifactKind::Source => format!("{}.c", project_name),
        ArtifactKind::AutocompleteScript => format!("_{}_complete.sh", project_name),
        ArtifactKind::ConfigFile => format!("{}.conf", project_name),
        ArtifactKind::ManPage => format!("{}.1", project_name),
        literal => template_file_name(literal).to_string(),
    }
}

/// Full path of the generated file, e.g. `~/Projects/MyProj/src/MyProj.c`.
pub fn new_file_path(kind: ArtifactKind, project_dir: &Path, project_name: &str) -> PathBuf {
    join_in_subdirectory(kind, project_dir, &new_file_name(kind, project_name))
}

fn join_in_subdirectory(kind: ArtifactKind, root: &Path, file_name: &str) -> PathBuf {
    match subdirectory(kind) {
        Some(subdir) => root.join(subdir).join(file_name),
        None => root.join(file_name),
    }
}

/// All four resolved names of one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub kind: ArtifactKind,
    pub template_file_name: &'static str,
    pub template_path: PathBuf,
    pub new_file_name: String,
    pub new_file_path: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(kind: ArtifactKind, metadata: &ProjectMetadata) -> Self {
        let project_dir = metadata.project_dir();
        Self {
            kind,
            template_file_name: template_file_name(kind),
            template_path: template_path(kind, &metadata.template_dir),
            new_file_name: new_file_name(kind, &metadata.project_name),
            new_file_path: new_file_path(kind, &project_dir, &metadata.project_name),
        }
    }
}
