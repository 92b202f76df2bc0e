//! Core data models for Podflow.
//!
//! This crate provides the fundamental data types used throughout the
//! Podflow system: the project entity, the workflow stage enum, and the
//! structured script record returned by the remote generation service.

pub mod ids;
pub mod project;
pub mod script;
pub mod stage;

// Re-export main types
pub use ids::ProjectId;
pub use project::Project;
pub use script::{MediaRecord, ScriptRecord};
pub use stage::WorkflowStage;
