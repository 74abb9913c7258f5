//! Public types for the satchel unified API.
//!
//! This module re-exports types from the member crates with a clean
//! public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core error and time types
pub use satchel_core::{SatchelError, SatchelResult, Timestamp};

// Containers
pub use satchel_containers::{KeyKind, KeySet, Queue, Record, RecordStore, Stack};

// Session objects
pub use satchel_session::{
    ContactBook, EditorHistory, Revision, Task, TaskKind, TaskScheduler, Visit, VisitorTracker,
};

// Export documents
pub use satchel_session::{ContactsExport, VisitorsExport};
