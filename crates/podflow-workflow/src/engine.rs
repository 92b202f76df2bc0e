//! The workflow engine: stage transitions and remote-response merges.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock};

use podflow_gateway::SyncGateway;
use podflow_models::{MediaRecord, Project, ProjectId, ScriptRecord, WorkflowStage};
use tracing::{debug, info};

use crate::error::{Result, WorkflowError};
use crate::store::ProjectStore;

/// Drives projects through the six-stage production workflow.
///
/// Every mutating operation is a read-modify-write over the store: a
/// snapshot is taken under the read lock, the remote call (if any) is
/// awaited with no lock held, and the merge re-acquires the write lock.
/// A failed remote call therefore leaves the stored project exactly as it
/// was before the call began; the one documented exception is
/// [`approve_script`](WorkflowEngine::approve_script), which commits the
/// local approval before its best-effort post-processing call.
///
/// At most one mutating operation may be in flight per project. The engine
/// tracks pending project ids and rejects overlapping operations with
/// [`WorkflowError::Busy`]; callers disable the triggering control while
/// [`is_busy`](WorkflowEngine::is_busy) reports true.
pub struct WorkflowEngine {
    store: Arc<RwLock<ProjectStore>>,
    gateway: Arc<dyn SyncGateway>,
    pending: Arc<Mutex<HashSet<ProjectId>>>,
}

impl WorkflowEngine {
    /// Creates an engine over the given store and gateway.
    pub fn new(store: ProjectStore, gateway: Arc<dyn SyncGateway>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            gateway,
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    // ---- read surface ----

    /// All projects, in insertion order.
    pub fn projects(&self) -> Result<Vec<Project>> {
        let store = self.read_store()?;
        Ok(store.all().to_vec())
    }

    /// Returns the project with the given id.
    pub fn project(&self, id: &ProjectId) -> Result<Project> {
        let store = self.read_store()?;
        store
            .get(id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound(id.clone()))
    }

    /// Resolves the current-project pointer.
    pub fn current(&self) -> Result<Option<Project>> {
        let store = self.read_store()?;
        Ok(store.current().cloned())
    }

    /// Sets (or clears) the current-project pointer.
    pub fn set_current(&self, id: Option<ProjectId>) -> Result<()> {
        let mut store = self.write_store()?;
        store.set_current(id);
        Ok(())
    }

    /// Returns true while a mutating operation is in flight for the project.
    pub fn is_busy(&self, id: &ProjectId) -> bool {
        self.pending
            .lock()
            .map(|set| set.contains(id))
            .unwrap_or(false)
    }

    // ---- workflow operations ----

    /// Creates a new project in the `initialize` stage.
    pub fn create_project(
        &self,
        name: impl Into<String>,
        topic: impl Into<String>,
    ) -> Result<Project> {
        let mut store = self.write_store()?;
        let project = store.create(name, topic);
        info!("created project {} ({})", project.name, project.id);
        Ok(project)
    }

    /// Synchronizes a freshly created project with the remote service.
    ///
    /// Strictly gated: the gateway is invoked only when the project is in
    /// the `initialize` stage; in any other stage this is a no-op that
    /// returns `Ok(false)` without touching the gateway. On success the
    /// project moves to `draft_script` with the normalized script record.
    pub async fn synchronize(&self, id: &ProjectId) -> Result<bool> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;

        if project.status != WorkflowStage::Initialize {
            debug!(
                "synchronize is a no-op for {} in stage {}",
                id, project.status
            );
            return Ok(false);
        }

        let record = self.gateway.initial_script(&project).await?;

        project.status = WorkflowStage::DraftScript;
        project.script_data = Some(record);
        self.commit(project)?;
        info!("project {} synchronized to draft_script", id);
        Ok(true)
    }

    /// Records a script approval and submits it for post-processing.
    ///
    /// The local approval (stage `approve_script`, compiled script text,
    /// and the edited record when provided) is committed and persisted
    /// before the remote call. The post-processing response is merged into
    /// the script record on success; on failure the error is returned but
    /// the approval stands. Approvals never roll back.
    pub async fn approve_script(
        &self,
        id: &ProjectId,
        script: &str,
        script_data: Option<ScriptRecord>,
    ) -> Result<()> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;

        project.status = WorkflowStage::ApproveScript;
        project.script = Some(script.to_string());
        if let Some(data) = script_data {
            project.script_data = Some(data);
        }
        self.commit(project.clone())?;
        info!("project {} script approved", id);

        // Best-effort enrichment; the committed approval is never undone.
        let record = project.script_data.clone().unwrap_or_default();
        let patch = self
            .gateway
            .process_approved_script(&project, script, &record)
            .await?;

        project.merge_script_data(patch);
        self.commit(project)?;
        Ok(())
    }

    /// Moves an approved script forward to image-prompt drafting.
    pub fn advance_to_image_prompt(&self, id: &ProjectId) -> Result<()> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;
        project.status = WorkflowStage::DraftImagePrompt;
        self.commit(project)?;
        Ok(())
    }

    /// Records an image-prompt approval.
    pub fn approve_image_prompt(&self, id: &ProjectId, image_prompt: &str) -> Result<()> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;
        project.status = WorkflowStage::ApproveImagePrompt;
        project.image_prompt = Some(image_prompt.to_string());
        self.commit(project)?;
        info!("project {} image prompt approved", id);
        Ok(())
    }

    /// Generates the video for a project.
    ///
    /// Stores the returned URL (keeping any existing one when the response
    /// has none); the stage is left unchanged — finalization happens with
    /// the image step.
    pub async fn generate_video(&self, id: &ProjectId) -> Result<Option<String>> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;

        let media = self.gateway.generate_video(&project).await?;

        project.video_url = media.video_url.clone().or(project.video_url);
        self.commit(project)?;
        Ok(media.video_url)
    }

    /// Generates the image for a project and finalizes it.
    pub async fn generate_image(&self, id: &ProjectId) -> Result<Option<String>> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;

        let media = self.gateway.generate_image(&project).await?;

        project.status = WorkflowStage::MediaFinalized;
        project.image_url = media.image_url.clone().or(project.image_url);
        self.commit(project)?;
        info!("project {} media finalized", id);
        Ok(media.image_url)
    }

    /// Generates video then image and finalizes the project.
    ///
    /// All-or-nothing: if either call fails, nothing is merged and the
    /// stage is unchanged.
    pub async fn generate_media(&self, id: &ProjectId) -> Result<MediaRecord> {
        let _guard = self.begin(id)?;
        let mut project = self.snapshot(id)?;

        let video = self.gateway.generate_video(&project).await?;
        let image = self.gateway.generate_image(&project).await?;

        let media = MediaRecord {
            video_url: video.video_url,
            image_url: image.image_url,
        };

        project.status = WorkflowStage::MediaFinalized;
        project.video_url = media.video_url.clone().or(project.video_url);
        project.image_url = media.image_url.clone().or(project.image_url);
        self.commit(project)?;
        info!("project {} media finalized", id);
        Ok(media)
    }

    // ---- internals ----

    fn read_store(&self) -> Result<std::sync::RwLockReadGuard<'_, ProjectStore>> {
        self.store
            .read()
            .map_err(|e| WorkflowError::LockPoisoned(e.to_string()))
    }

    fn write_store(&self) -> Result<std::sync::RwLockWriteGuard<'_, ProjectStore>> {
        self.store
            .write()
            .map_err(|e| WorkflowError::LockPoisoned(e.to_string()))
    }

    /// Registers a project as having a mutating operation in flight.
    fn begin(&self, id: &ProjectId) -> Result<PendingGuard> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|e| WorkflowError::LockPoisoned(e.to_string()))?;
        if !pending.insert(id.clone()) {
            return Err(WorkflowError::Busy(id.clone()));
        }
        Ok(PendingGuard {
            pending: Arc::clone(&self.pending),
            id: id.clone(),
        })
    }

    /// Clones the stored project; fails fast when the id is unknown.
    fn snapshot(&self, id: &ProjectId) -> Result<Project> {
        let store = self.read_store()?;
        store
            .get(id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound(id.clone()))
    }

    /// Writes a mutated project back, persisting write-through.
    fn commit(&self, project: Project) -> Result<()> {
        let mut store = self.write_store()?;
        store.update(project)
    }
}

/// Releases the pending-operation slot for a project id on drop.
struct PendingGuard {
    pending: Arc<Mutex<HashSet<ProjectId>>>,
    id: ProjectId,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.remove(&self.id);
        }
    }
}
