//! Storage driver for the components directory.
//!
//! The registry and fieldset registration only need three things from the
//! filesystem: the list of top-level component folders, existence checks and
//! reading small definition files. [`ComponentStorage`] is that seam;
//! [`LocalDisk`] is the on-disk implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Read-only access to a components root.
///
/// All paths are relative to the root and use `/` separators.
pub trait ComponentStorage {
    /// Names of the top-level directories, in scan order.
    fn directories(&self) -> Result<Vec<String>>;

    /// Check whether a file or directory exists.
    fn exists(&self, relative: &str) -> bool;

    /// Read a file as UTF-8.
    fn read_to_string(&self, relative: &str) -> Result<String>;

    /// Absolute (or root-joined) path of a relative entry.
    fn path(&self, relative: &str) -> PathBuf;
}

/// Local filesystem storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    /// Create a storage rooted at `root`. The root does not need to exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ComponentStorage for LocalDisk {
    /// Directory names sorted lexicographically, so scan order does not
    /// depend on the filesystem. Hidden directories are skipped. A missing
    /// root yields no directories.
    fn directories(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            tracing::debug!("Components root {} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    fn read_to_string(&self, relative: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(relative))?)
    }

    fn path(&self, relative: &str) -> PathBuf {
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }
}
