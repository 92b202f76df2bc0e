//! Error types for workflow operations.

use podflow_gateway::GatewayError;
use podflow_models::ProjectId;
use thiserror::Error;

/// Errors that can occur during workflow operations.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Operation referenced a project id absent from the store.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Another mutating operation is already in flight for the project.
    #[error("operation already in flight for project: {0}")]
    Busy(ProjectId),

    /// A remote gateway call failed. The project is unchanged unless the
    /// operation documents otherwise (approvals commit before the call).
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;
