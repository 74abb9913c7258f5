//! Task scheduler session.
//!
//! Owns the FIFO queue of pending tasks plus a bounded log of recently
//! processed ones. The queue instance lives and dies with the scheduler;
//! nothing here is shared or global.
//!
//! # Example
//!
//! ```
//! use satchel_session::{TaskKind, TaskScheduler};
//!
//! let mut scheduler = TaskScheduler::new();
//! scheduler.add("send welcome mail", TaskKind::Email).unwrap();
//! scheduler.add("sync backups", TaskKind::Upload).unwrap();
//!
//! let task = scheduler.process_next().unwrap();
//! assert_eq!(task.name, "send welcome mail");
//! assert!(task.processed_at.is_some());
//! ```

use std::fmt;

use satchel_containers::Queue;
use satchel_core::{SatchelError, SatchelResult, Timestamp};
use serde::Serialize;
use uuid::Uuid;

/// Retained length of the processed-task log, newest first.
const PROCESSED_LOG_LIMIT: usize = 20;

/// Category of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Outgoing mail.
    Email,
    /// File upload.
    Upload,
    /// Chat or notification message.
    Message,
    /// Anything else.
    Other,
}

impl TaskKind {
    /// Lowercase label used in list renderings.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Email => "email",
            TaskKind::Upload => "upload",
            TaskKind::Message => "message",
            TaskKind::Other => "other",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit of work waiting in, or processed from, the queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Unique task id.
    pub id: Uuid,
    /// What the task does, as entered by the user.
    pub name: String,
    /// Task category.
    pub kind: TaskKind,
    /// When the task entered the queue.
    pub added_at: Timestamp,
    /// When the task was dequeued for processing; `None` while queued.
    pub processed_at: Option<Timestamp>,
}

/// FIFO task scheduler with a bounded processed log.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    queue: Queue<Task>,
    /// Processed tasks, newest first, capped at [`PROCESSED_LOG_LIMIT`].
    processed: Vec<Task>,
}

impl TaskScheduler {
    /// Create a scheduler with an empty queue and an empty processed log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task at the tail.
    ///
    /// The name is trimmed before it is stored. Returns the new queue
    /// depth.
    ///
    /// # Errors
    ///
    /// [`SatchelError::InvalidInput`] if the trimmed name is empty.
    pub fn add(&mut self, name: &str, kind: TaskKind) -> SatchelResult<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SatchelError::invalid_input("task name must not be empty"));
        }

        let task = Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            added_at: Timestamp::now(),
            processed_at: None,
        };
        let depth = self.queue.enqueue(task);
        tracing::debug!(target: "satchel::scheduler", task = %name, queued = depth, "task enqueued");
        Ok(depth)
    }

    /// Dequeue the front task, stamp it processed, and log it.
    ///
    /// Returns `None` when the queue is empty. The processed log keeps
    /// the most recent [`PROCESSED_LOG_LIMIT`] tasks, newest first.
    pub fn process_next(&mut self) -> Option<Task> {
        let mut task = self.queue.dequeue()?;
        task.processed_at = Some(Timestamp::now());

        self.processed.insert(0, task.clone());
        self.processed.truncate(PROCESSED_LOG_LIMIT);

        tracing::debug!(target: "satchel::scheduler", task = %task.name, remaining = self.queue.len(), "task processed");
        Some(task)
    }

    /// Non-mutating look at the next task to be processed.
    pub fn next(&self) -> Option<&Task> {
        self.queue.peek_front()
    }

    /// Non-mutating look at the most recently queued task.
    pub fn last(&self) -> Option<&Task> {
        self.queue.peek_back()
    }

    /// Snapshot of the pending tasks in processing order.
    pub fn queued(&self) -> Vec<Task> {
        self.queue.to_vec()
    }

    /// The processed log, newest first.
    pub fn processed(&self) -> &[Task] {
        &self.processed
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True if no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop all pending tasks and return how many were dropped.
    ///
    /// The processed log is left intact.
    pub fn clear(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        tracing::debug!(target: "satchel::scheduler", dropped, "queue cleared");
        dropped
    }
}
