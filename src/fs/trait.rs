//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Abstraction over the file system operations the generator performs
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read file contents as raw bytes
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// List directory contents
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// List every directory under `root`, `root` included. Order is unspecified.
    fn walk_dirs(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Create or truncate `path` and write `contents` to it
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry() {
        let entry = DirEntry {
            path: PathBuf::from("/vendor/pkg/a.go"),
            name: "a.go".to_string(),
            file_type: FileType::File,
        };
        assert_eq!(entry.path(), Path::new("/vendor/pkg/a.go"));
        assert_eq!(entry.file_name(), "a.go");
        assert_eq!(entry.file_type(), FileType::File);
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_dir_entry_directory() {
        let entry = DirEntry {
            path: PathBuf::from("/vendor/pkg/sub"),
            name: "sub".to_string(),
            file_type: FileType::Directory,
        };
        assert!(entry.is_dir());
    }
}
