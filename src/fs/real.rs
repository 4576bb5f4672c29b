use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let file_type = entry
                .file_type()
                .context(format!("Failed to get file type for {:?}", entry.path()))?;
            let file_type = if file_type.is_dir() {
                FileType::Directory
            } else if file_type.is_file() {
                FileType::File
            } else {
                FileType::Symlink
            };

            result.push(DirEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().to_string(),
                file_type,
            });
        }

        Ok(result)
    }

    fn walk_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();

        // Vendored trees are walked verbatim: hidden directories and ignore
        // files carry no meaning there.
        for result in WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build()
        {
            let entry = result.context(format!("Failed to walk directory {:?}", root))?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                dirs.push(entry.into_path());
            }
        }

        Ok(dirs)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).context(format!("Failed to write file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir_all(base.join("github.com/pkg/errors")).unwrap();
        fs::create_dir(base.join(".hidden")).unwrap();
        fs::write(base.join("modules.txt"), "# vendor").unwrap();
        fs::write(
            base.join("github.com/pkg/errors/errors.go"),
            "package errors\n",
        )
        .unwrap();

        dir
    }

    #[test]
    fn test_exists_and_is_dir() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(temp.path()));
        assert!(fs.is_dir(temp.path()));
        assert!(fs.exists(&temp.path().join("modules.txt")));
        assert!(!fs.is_dir(&temp.path().join("modules.txt")));
        assert!(!fs.exists(&temp.path().join("nonexistent")));
    }

    #[test]
    fn test_read() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let content = fs
            .read(&temp.path().join("github.com/pkg/errors/errors.go"))
            .unwrap();
        assert_eq!(content, b"package errors\n");
    }

    #[test]
    fn test_read_non_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin.go");
        fs::write(&path, b"// caf\xe9\n").unwrap();
        let fs = RealFileSystem::new();

        assert_eq!(fs.read(&path).unwrap(), b"// caf\xe9\n");
    }

    #[test]
    fn test_read_dir_reports_types() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let entries = fs.read_dir(temp.path()).unwrap();
        let file = entries.iter().find(|e| e.file_name() == "modules.txt").unwrap();
        let dir = entries.iter().find(|e| e.file_name() == "github.com").unwrap();

        assert_eq!(file.file_type(), FileType::File);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_walk_dirs_includes_hidden_and_nested() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let dirs = fs.walk_dirs(temp.path()).unwrap();

        assert!(dirs.contains(&temp.path().to_path_buf()));
        assert!(dirs.contains(&temp.path().join(".hidden")));
        assert!(dirs.contains(&temp.path().join("github.com/pkg/errors")));
        assert!(!dirs.contains(&temp.path().join("modules.txt")));
    }

    #[test]
    fn test_walk_dirs_missing_root() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();

        assert!(fs.walk_dirs(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let fs = RealFileSystem::new();
        let path = temp.path().join("BUCK");

        fs.write(&path, "first contents, longer").unwrap();
        fs.write(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
