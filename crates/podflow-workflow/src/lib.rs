//! Workflow state machine and project store for Podflow.
//!
//! This crate owns the six-stage production lifecycle. The [`ProjectStore`]
//! holds the authoritative in-memory project collection plus the
//! current-project pointer and writes through to disk after every mutation;
//! the [`WorkflowEngine`] enforces stage transitions and merges remote
//! gateway responses into project state.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use podflow_gateway::{GatewayConfig, WebhookClient};
//! use podflow_persistence::ProjectFileStore;
//! use podflow_workflow::{ProjectStore, WorkflowEngine};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ProjectStore::open(ProjectFileStore::new("/home/user/.podflow"));
//! let gateway = Arc::new(WebhookClient::new(GatewayConfig::default())?);
//! let engine = WorkflowEngine::new(store, gateway);
//!
//! let project = engine.create_project("W1", "AI topics")?;
//! engine.synchronize(&project.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod store;

pub use engine::WorkflowEngine;
pub use error::{Result, WorkflowError};
pub use store::ProjectStore;
