use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A named, isolated mod installation context for a game. Identity is
/// immutable; the directory contents are owned by the mod installer, not
/// by the launch pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    name: String,
    root: PathBuf,
}

impl Profile {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file inside the profile, e.g. a loader entry point.
    pub fn joined(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
