//! Authoritative in-memory project collection with write-through persistence.

use podflow_models::{Project, ProjectId};
use podflow_persistence::ProjectFileStore;
use tracing::error;

use crate::error::{Result, WorkflowError};

/// Owns the project collection and the current-project pointer.
///
/// The collection keeps insertion order. Every mutation writes the whole
/// collection through the file store before returning, so a restart
/// reproduces the exact last-known state. A failed save is logged and not
/// propagated: the in-memory state stays authoritative for the session.
///
/// The current-project pointer is held as an id and resolved on read, so it
/// can never reference a stale copy of an updated project.
pub struct ProjectStore {
    projects: Vec<Project>,
    current: Option<ProjectId>,
    adapter: ProjectFileStore,
}

impl ProjectStore {
    /// Opens a store, loading the persisted collection.
    pub fn open(adapter: ProjectFileStore) -> Self {
        let projects = adapter.load();
        Self {
            projects,
            current: None,
            adapter,
        }
    }

    /// Creates a new project in the `initialize` stage and persists it.
    pub fn create(&mut self, name: impl Into<String>, topic: impl Into<String>) -> Project {
        let project = Project::new(name, topic);
        self.projects.push(project.clone());
        self.persist();
        project
    }

    /// Returns the project with the given id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// All projects, in insertion order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Sets (or clears) the current-project pointer.
    pub fn set_current(&mut self, id: Option<ProjectId>) {
        self.current = id;
    }

    /// Resolves the current-project pointer.
    pub fn current(&self) -> Option<&Project> {
        self.current.as_ref().and_then(|id| self.get(id))
    }

    /// Replaces the project with the matching id and persists.
    pub fn update(&mut self, project: Project) -> Result<()> {
        let slot = self
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| WorkflowError::NotFound(project.id.clone()))?;
        *slot = project;
        self.persist();
        Ok(())
    }

    /// Write-through save; failures are logged, in-memory state remains
    /// authoritative.
    fn persist(&self) {
        if let Err(e) = self.adapter.save(&self.projects) {
            error!("failed to persist project collection: {}", e);
        }
    }
}
