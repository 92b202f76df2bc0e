//! File store for the project collection.

use std::path::PathBuf;

use podflow_models::Project;
use tracing::warn;

use crate::atomic::{atomic_write_json, read_json};
use crate::error::Result;

/// File name of the persisted collection blob.
const PROJECTS_FILE: &str = "projects.json";

/// Persists the whole project collection as a single JSON blob:
/// ```text
/// base_path/
/// └── projects.json
/// ```
///
/// Loading tolerates a missing or corrupt blob by returning an empty
/// collection; saving overwrites the blob wholesale.
pub struct ProjectFileStore {
    base_path: PathBuf,
}

impl ProjectFileStore {
    /// Creates a new store rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the path to the collection blob.
    pub fn blob_path(&self) -> PathBuf {
        self.base_path.join(PROJECTS_FILE)
    }

    /// Loads the project collection.
    ///
    /// Never fails: a missing blob yields an empty collection, and an
    /// unreadable or unparsable blob is logged and treated the same way.
    pub fn load(&self) -> Vec<Project> {
        let path = self.blob_path();
        if !path.exists() {
            return Vec::new();
        }

        match read_json(&path) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("discarding unreadable project collection at {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Saves the project collection, overwriting the blob wholesale.
    pub fn save(&self, projects: &[Project]) -> Result<()> {
        atomic_write_json(&self.blob_path(), &projects)
    }
}
