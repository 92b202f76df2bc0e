//! The gateway seam between the workflow engine and the remote service.
//!
//! The `SyncGateway` trait is the boundary the workflow engine talks to.
//! Production code uses [`crate::WebhookClient`]; tests substitute an
//! in-memory implementation.

use async_trait::async_trait;
use podflow_models::{MediaRecord, Project, ScriptRecord};

use crate::error::Result;

/// Outbound operations against the remote automation service.
///
/// Each operation is one request/response exchange. Implementations must
/// not retry, cache, or coalesce calls; the caller decides when an
/// operation is issued and handles failures.
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Requests the initial script draft for a newly created project.
    async fn initial_script(&self, project: &Project) -> Result<ScriptRecord>;

    /// Submits an approved script for post-processing.
    ///
    /// The response carries only the record fields the remote side changed.
    async fn process_approved_script(
        &self,
        project: &Project,
        script: &str,
        script_data: &ScriptRecord,
    ) -> Result<ScriptRecord>;

    /// Requests video generation for a project.
    async fn generate_video(&self, project: &Project) -> Result<MediaRecord>;

    /// Requests image generation for a project.
    async fn generate_image(&self, project: &Project) -> Result<MediaRecord>;
}
