//! View-existence oracles.
//!
//! The resolver never renders anything; it only asks whether a template is
//! registered under an identifier such as `partials.Button.views._icon`.
//! [`ViewFinder`] is that question.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Answers whether a renderable template exists for an identifier.
pub trait ViewFinder {
    /// Returns true iff a template is registered under `identifier`.
    fn exists(&self, identifier: &str) -> bool;
}

impl<F> ViewFinder for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, identifier: &str) -> bool {
        self(identifier)
    }
}

/// Fixed set of known view identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticViews {
    views: BTreeSet<String>,
}

impl StaticViews {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Into<String>> FromIterator<S> for StaticViews {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            views: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ViewFinder for StaticViews {
    fn exists(&self, identifier: &str) -> bool {
        self.views.contains(identifier)
    }
}

/// Filesystem-backed view finder.
///
/// An identifier `a.b.c` maps to `a/b/c.<ext>` under each root, roots and
/// extensions tried in order.
#[derive(Debug, Clone)]
pub struct FileViewFinder {
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl FileViewFinder {
    /// Create a finder over `roots` with the given template extensions.
    pub fn new(roots: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self { roots, extensions }
    }

    /// Path of the first file matching `identifier`, if any.
    pub fn locate(&self, identifier: &str) -> Option<PathBuf> {
        if identifier.is_empty() || identifier.split('.').any(|s| s.is_empty() || s == "..") {
            return None;
        }

        let relative = identifier.replace('.', "/");
        self.roots.iter().find_map(|root| {
            self.extensions
                .iter()
                .map(|ext| candidate(root, &relative, ext))
                .find(|path| path.is_file())
        })
    }
}

fn candidate(root: &Path, relative: &str, extension: &str) -> PathBuf {
    root.join(format!("{}.{}", relative, extension.trim_start_matches('.')))
}

impl ViewFinder for FileViewFinder {
    fn exists(&self, identifier: &str) -> bool {
        self.locate(identifier).is_some()
    }
}
