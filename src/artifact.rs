//! Catalog of everything a generated project is made of.
//! Every file and directory kind carries a unique bit so callers can describe
//! a selection as a flag word, but all resolution works on one kind at a time.

use std::fmt;

use crate::error::{Error, Result};

/// One creatable file of a new C project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Header,
    Source,
    Makefile,
    Mk,
    MkAll,
    MkDebug,
    MkDebugAll,
    MkClean,
    MkDistClean,
    MkInstall,
    MkUninstall,
    MkStrip,
    Install,
    InstallScript,
    UninstallScript,
    Authors,
    ChangeLog,
    License,
    News,
    Readme,
    ReadmeMarkdown,
    Todo,
    AutocompleteScript,
    ConfigFile,
    ManPage,
}

/// How the generated header is written into an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// C block comment (`/** ... */`).
    Block,
    /// Line comment with the given prefix on every line.
    Line(&'static str),
    /// Copied verbatim, no header.
    None,
}

impl ArtifactKind {
    /// All kinds in the order the assembler creates them.
    pub const ALL: [ArtifactKind; 25] = [
        ArtifactKind::Header,
        ArtifactKind::Source,
        ArtifactKind::Makefile,
        ArtifactKind::Mk,
        ArtifactKind::MkAll,
        ArtifactKind::MkDebug,
        ArtifactKind::MkDebugAll,
        ArtifactKind::MkClean,
        ArtifactKind::MkDistClean,
        ArtifactKind::MkInstall,
        ArtifactKind::MkUninstall,
        ArtifactKind::MkStrip,
        ArtifactKind::Install,
        ArtifactKind::InstallScript,
        ArtifactKind::UninstallScript,
        ArtifactKind::Authors,
        ArtifactKind::ChangeLog,
        ArtifactKind::License,
        ArtifactKind::News,
        ArtifactKind::Readme,
        ArtifactKind::ReadmeMarkdown,
        ArtifactKind::Todo,
        ArtifactKind::AutocompleteScript,
        ArtifactKind::ConfigFile,
        ArtifactKind::ManPage,
    ];

    /// The flag bit identifying this kind.
    pub fn bits(self) -> u64 {
        1 << self.index()
    }

    /// Zero-based position in [`ArtifactKind::ALL`].
    pub fn index(self) -> usize {
        // ALL is declared in variant order.
        self as usize
    }

    /// Converts a single-bit flag word into its kind.
    ///
    /// # Errors
    /// * `Error::UnknownArtifactKind` if no bit, more than one bit or an
    ///   unassigned bit is set
    pub fn from_bits(bits: u64) -> Result<Self> {
        if bits.count_ones() != 1 {
            return Err(Error::UnknownArtifactKind { bits });
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.bits() == bits)
            .ok_or(Error::UnknownArtifactKind { bits })
    }

    /// Splits a flag word into the kinds it selects, in creation order.
    ///
    /// # Errors
    /// * `Error::UnknownArtifactKind` if the word is empty or carries bits
    ///   outside the catalog
    pub fn kinds_in(mask: u64) -> Result<Vec<Self>> {
        let known = Self::ALL.iter().fold(0u64, |acc, kind| acc | kind.bits());
        if mask == 0 || mask & !known != 0 {
            return Err(Error::UnknownArtifactKind { bits: mask });
        }
        Ok(Self::ALL.iter().copied().filter(|kind| mask & kind.bits() != 0).collect())
    }

    /// Comment syntax the header is written in.
    pub fn comment_style(self) -> CommentStyle {
        use ArtifactKind::*;
        match self {
            Header | Source => CommentStyle::Block,
            Makefile | Mk | MkAll | MkDebug | MkDebugAll | MkClean | MkDistClean
            | MkInstall | MkUninstall | MkStrip | InstallScript | UninstallScript
            | AutocompleteScript | ConfigFile => CommentStyle::Line("#"),
            ManPage => CommentStyle::Line(".\\\""),
            Install | Authors | ChangeLog | License | News | Readme | ReadmeMarkdown
            | Todo => CommentStyle::None,
        }
    }

    /// Whether the generated file is a script that must be runnable.
    pub fn is_executable(self) -> bool {
        use ArtifactKind::*;
        matches!(
            self,
            Mk | MkAll
                | MkDebug
                | MkDebugAll
                | MkClean
                | MkDistClean
                | MkInstall
                | MkUninstall
                | MkStrip
                | InstallScript
                | UninstallScript
                | AutocompleteScript
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Header => "header file",
            ArtifactKind::Source => "source file",
            ArtifactKind::Makefile => "Makefile",
            ArtifactKind::Mk => "mk script",
            ArtifactKind::MkAll => "mkall script",
            ArtifactKind::MkDebug => "mkd script",
            ArtifactKind::MkDebugAll => "mkdall script",
            ArtifactKind::MkClean => "mkclean script",
            ArtifactKind::MkDistClean => "mkdistclean script",
            ArtifactKind::MkInstall => "mkinstall script",
            ArtifactKind::MkUninstall => "mkuninstall script",
            ArtifactKind::MkStrip => "mkstrip script",
            ArtifactKind::Install => "INSTALL file",
            ArtifactKind::InstallScript => "install script",
            ArtifactKind::UninstallScript => "uninstall script",
            ArtifactKind::Authors => "AUTHORS file",
            ArtifactKind::ChangeLog => "ChangeLog file",
            ArtifactKind::License => "license file",
            ArtifactKind::News => "NEWS file",
            ArtifactKind::Readme => "README file",
            ArtifactKind::ReadmeMarkdown => "markdown README",
            ArtifactKind::Todo => "TODO file",
            ArtifactKind::AutocompleteScript => "autocomplete script",
            ArtifactKind::ConfigFile => "configuration file",
            ArtifactKind::ManPage => "man page",
        };
        f.write_str(name)
    }
}

/// One creatable directory of a new C project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryKind {
    Project,
    Src,
    Include,
    Doc,
    Man,
    Lib,
}

impl DirectoryKind {
    /// Directories in the order the assembler creates them.
    pub const CREATION_ORDER: [DirectoryKind; 6] = [
        DirectoryKind::Project,
        DirectoryKind::Src,
        DirectoryKind::Include,
        DirectoryKind::Lib,
        DirectoryKind::Man,
        DirectoryKind::Doc,
    ];

    /// The flag bit identifying this directory.
    pub fn bits(self) -> u64 {
        match self {
            DirectoryKind::Project => 0x001,
            DirectoryKind::Src => 0x002,
            DirectoryKind::Include => 0x004,
            DirectoryKind::Doc => 0x008,
            DirectoryKind::Man => 0x010,
            DirectoryKind::Lib => 0x020,
        }
    }

    /// # Errors
    /// * `Error::UnknownDirectoryKind` unless exactly one known bit is set
    pub fn from_bits(bits: u64) -> Result<Self> {
        Self::CREATION_ORDER
            .iter()
            .copied()
            .find(|kind| kind.bits() == bits)
            .ok_or(Error::UnknownDirectoryKind { bits })
    }

    /// Position in [`DirectoryKind::CREATION_ORDER`].
    pub fn position(self) -> usize {
        match self {
            DirectoryKind::Project => 0,
            DirectoryKind::Src => 1,
            DirectoryKind::Include => 2,
            DirectoryKind::Lib => 3,
            DirectoryKind::Man => 4,
            DirectoryKind::Doc => 5,
        }
    }

    /// Path relative to the new project directory. Empty for the project itself.
    pub fn relative_path(self) -> &'static str {
        match self {
            DirectoryKind::Project => "",
            DirectoryKind::Src => "src",
            DirectoryKind::Include => "include",
            DirectoryKind::Doc => "doc",
            DirectoryKind::Man => "man",
            DirectoryKind::Lib => "lib",
        }
    }
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryKind::Project => f.write_str("project directory"),
            other => write!(f, "{} directory", other.relative_path()),
        }
    }
}
