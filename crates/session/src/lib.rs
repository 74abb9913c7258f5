//! Session layer for satchel.
//!
//! Each session object is the calling context that owns one container
//! instance; there is no process-wide state. The sessions add the policy
//! the containers leave out: input validation, duplicate counting,
//! bounded auxiliary histories, and timestamping.
//!
//! - [`TaskScheduler`]: FIFO task queue with a bounded processed log
//! - [`EditorHistory`]: undo/redo over a pair of stacks
//! - [`VisitorTracker`]: unique-visitor set with a duplicate counter
//! - [`ContactBook`]: keyed contact records with search
//! - [`export`]: read-only snapshot documents for download surfaces

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod contacts;
pub mod editor;
pub mod export;
pub mod scheduler;
pub mod tracker;

// Re-exports
pub use contacts::ContactBook;
pub use editor::{EditorHistory, Revision};
pub use export::{ContactsExport, VisitorsExport};
pub use scheduler::{Task, TaskKind, TaskScheduler};
pub use tracker::{Visit, VisitorTracker};
