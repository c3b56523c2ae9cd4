//! Filesystem access used by the assembler.

use std::fs;
use std::io;
use std::path::Path;

/// The operations project assembly performs on disk.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Creates one directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `content` to `path`, replacing any previous file.
    fn write(&self, path: &Path, content: &str, executable: bool) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str, executable: bool) -> io::Result<()> {
        fs::write(path, content)?;
        if executable {
            set_executable(path)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_requires_parent() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.create_dir(&temp_dir.path().join("a/b")).is_err());
        fs.create_dir(&temp_dir.path().join("a")).unwrap();
        assert!(fs.is_dir(&temp_dir.path().join("a")));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_files_get_755() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mk");
        LocalFilesystem::new().write(&path, "make\n", true).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
