//! Helpers for building vendor trees on disk

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary repository with a `vendor/` directory.
pub struct VendorRepo {
    dir: TempDir,
}

#[allow(dead_code)]
impl VendorRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("vendor")).expect("Failed to create vendor dir");
        Self { dir }
    }

    /// A repository without a vendor directory.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn vendor(&self) -> PathBuf {
        self.dir.path().join("vendor")
    }

    /// Writes `contents` to `vendor/<rel>`, creating parent directories.
    pub fn file(&self, rel: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.vendor().join(rel);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create package dir");
        fs::write(&path, contents).expect("Failed to write file");
        self
    }

    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.vendor().join(rel)).expect("Failed to create dir");
        self
    }

    /// Contents of `vendor/<rel>/BUCK`, if it exists.
    pub fn buck(&self, rel: &str) -> Option<String> {
        fs::read_to_string(self.vendor().join(rel).join("BUCK")).ok()
    }

    /// Every BUCK file under vendor, keyed by its package path.
    pub fn all_bucks(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        collect_bucks(&self.vendor(), &self.vendor(), &mut out);
        out.sort();
        out
    }
}

fn collect_bucks(vendor: &Path, dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_bucks(vendor, &path, out);
        } else if entry.file_name() == "BUCK" {
            let rel = path
                .parent()
                .and_then(|p| p.strip_prefix(vendor).ok())
                .map(|p| p.to_string_lossy().replace('\\', "/"))
                .unwrap_or_default();
            out.push((rel, fs::read_to_string(&path).unwrap_or_default()));
        }
    }
}
