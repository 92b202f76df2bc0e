//! Persistence layer for Podflow.
//!
//! This crate provides crash-safe persistence for the project collection
//! using atomic file operations (write to temp file, then rename). The
//! collection is stored wholesale as a single JSON blob so that a restart
//! restores the exact last-known state.
//!
//! # Example
//!
//! ```no_run
//! use podflow_persistence::ProjectFileStore;
//! use podflow_models::Project;
//!
//! let store = ProjectFileStore::new("/home/user/.podflow");
//!
//! let projects = vec![Project::new("W1", "AI topics")];
//! store.save(&projects).unwrap();
//!
//! // Loading never fails; a missing or corrupt blob yields an empty vec.
//! let loaded = store.load();
//! assert_eq!(loaded.len(), 1);
//! ```

pub mod atomic;
pub mod error;
pub mod store;

pub use error::{PersistenceError, Result};
pub use store::ProjectFileStore;
