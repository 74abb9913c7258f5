//! Satchel: embedded in-memory containers for single-threaded
//! interactive apps.
//!
//! Satchel bundles four textbook containers (FIFO queue, LIFO stack,
//! unique-key set, keyed record store) with the session objects that
//! own them: a task scheduler, an undo/redo editor history, a
//! unique-visitor tracker, and a contact book. Export builders snapshot
//! a session into a JSON document for download surfaces.
//!
//! Everything is in-process and synchronous: no persistence, no
//! locking, no async. Expected empty-container reads return `None`;
//! duplicate and missing keys come back as typed errors for the caller
//! to surface.
//!
//! # Example
//!
//! ```
//! use satchel::{TaskKind, TaskScheduler};
//!
//! let mut scheduler = TaskScheduler::new();
//! scheduler.add("send invoice", TaskKind::Email)?;
//! let task = scheduler.process_next().expect("one task queued");
//! assert_eq!(task.name, "send invoice");
//! # Ok::<(), satchel::SatchelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod types;

pub use types::*;
