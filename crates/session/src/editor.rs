//! Undo/redo history session.
//!
//! Owns a pair of stacks and the last recorded content. Undo moves the
//! live content onto the redo stack and restores the top undo revision;
//! redo is the mirror image. Recording a new change discards the redo
//! stack entirely; branching history is dropped, not merged.

use satchel_containers::Stack;
use satchel_core::Timestamp;
use serde::Serialize;
use uuid::Uuid;

/// A captured editor state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Revision {
    /// Unique revision id.
    pub id: Uuid,
    /// Editor content at the time the revision was captured.
    pub content: String,
    /// When the revision was captured.
    pub recorded_at: Timestamp,
}

impl Revision {
    fn capture(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.to_string(),
            recorded_at: Timestamp::now(),
        }
    }
}

/// Undo/redo history over a pair of stacks.
///
/// The history tracks the last recorded content so that recording an
/// unchanged state is a no-op. Neither stack is capped.
///
/// # Example
///
/// ```
/// use satchel_session::EditorHistory;
///
/// let mut history = EditorHistory::new();
/// history.record("hello");
/// history.record("hello world");
///
/// let restored = history.undo("hello world").unwrap();
/// assert_eq!(restored, "hello");
/// assert_eq!(history.redo("hello").unwrap(), "hello world");
/// ```
#[derive(Debug, Default)]
pub struct EditorHistory {
    undo: Stack<Revision>,
    redo: Stack<Revision>,
    /// Content as of the last record/undo/redo.
    saved: String,
}

impl EditorHistory {
    /// Create a history whose baseline content is empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with an initial baseline content.
    pub fn with_content(initial: &str) -> Self {
        Self {
            undo: Stack::new(),
            redo: Stack::new(),
            saved: initial.to_string(),
        }
    }

    /// Record the current editor content as a new action.
    ///
    /// Pushes the previous baseline onto the undo stack, makes `current`
    /// the new baseline, and clears the redo stack. Returns `false`
    /// without touching either stack when the content is unchanged since
    /// the last record.
    pub fn record(&mut self, current: &str) -> bool {
        if current == self.saved {
            return false;
        }
        self.undo.push(Revision::capture(&self.saved));
        self.saved = current.to_string();
        self.redo.clear();
        tracing::debug!(target: "satchel::editor", undo_depth = self.undo.len(), "action recorded");
        true
    }

    /// Step back one revision.
    ///
    /// Pushes `current` onto the redo stack and returns the restored
    /// content. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo.pop()?;
        self.redo.push(Revision::capture(current));
        self.saved = previous.content.clone();
        tracing::debug!(target: "satchel::editor", redo_depth = self.redo.len(), "undo applied");
        Some(previous.content)
    }

    /// Step forward one revision.
    ///
    /// Pushes `current` onto the undo stack and returns the restored
    /// content. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push(Revision::capture(current));
        self.saved = next.content.clone();
        tracing::debug!(target: "satchel::editor", undo_depth = self.undo.len(), "redo applied");
        Some(next.content)
    }

    /// True if an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// True if a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of revisions on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of revisions on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Snapshot of the undo stack, most recent revision first.
    pub fn undo_history(&self) -> Vec<Revision> {
        self.undo.to_vec()
    }

    /// Snapshot of the redo stack, most recent revision first.
    pub fn redo_history(&self) -> Vec<Revision> {
        self.redo.to_vec()
    }

    /// Drop both stacks and reset the baseline to empty.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.saved.clear();
    }
}
