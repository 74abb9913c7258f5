//! Unique-visitor tracker session.
//!
//! Owns the key set plus the statistics the set itself does not keep:
//! the duplicates-prevented counter and a bounded newest-first list of
//! recent admissions.

use satchel_containers::{KeyKind, KeySet};
use satchel_core::{SatchelError, SatchelResult, Timestamp};
use serde::Serialize;

/// Retained length of the recent-visit list, newest first.
const RECENT_LIMIT: usize = 5;

/// A single admitted visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    /// Visitor identifier as submitted (trimmed).
    pub id: String,
    /// Display classification derived from the identifier.
    pub kind: KeyKind,
    /// When the visitor was first seen.
    pub seen_at: Timestamp,
}

/// Membership-tested visitor tracker.
///
/// Duplicate submissions never enter the set; they bump a counter the
/// container itself does not keep.
///
/// # Example
///
/// ```
/// use satchel_session::VisitorTracker;
///
/// let mut tracker = VisitorTracker::new();
/// assert!(tracker.record("user@example.com").unwrap());
/// assert!(!tracker.record("user@example.com").unwrap());
/// assert_eq!(tracker.unique_count(), 1);
/// assert_eq!(tracker.duplicates_prevented(), 1);
/// ```
#[derive(Debug, Default)]
pub struct VisitorTracker {
    visitors: KeySet,
    duplicates_prevented: u64,
    /// Admitted visits, newest first, capped at [`RECENT_LIMIT`].
    recent: Vec<Visit>,
}

impl VisitorTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visitor id.
    ///
    /// Returns `Ok(true)` if the visitor was newly admitted, `Ok(false)`
    /// if the id was already present (the duplicate counter is bumped and
    /// nothing else changes).
    ///
    /// # Errors
    ///
    /// [`SatchelError::InvalidInput`] if the trimmed id is empty.
    pub fn record(&mut self, id: &str) -> SatchelResult<bool> {
        let id = id.trim();
        if id.is_empty() {
            return Err(SatchelError::invalid_input("visitor id must not be empty"));
        }

        if !self.visitors.add(id) {
            self.duplicates_prevented += 1;
            tracing::debug!(target: "satchel::tracker", visitor = %id, "duplicate visitor ignored");
            return Ok(false);
        }

        self.recent.insert(
            0,
            Visit {
                id: id.to_string(),
                kind: KeyKind::classify(id),
                seen_at: Timestamp::now(),
            },
        );
        self.recent.truncate(RECENT_LIMIT);
        tracing::debug!(target: "satchel::tracker", visitor = %id, unique = self.visitors.len(), "visitor admitted");
        Ok(true)
    }

    /// True if the visitor id has been admitted.
    pub fn contains(&self, id: &str) -> bool {
        self.visitors.contains(id)
    }

    /// Number of unique visitors.
    pub fn unique_count(&self) -> usize {
        self.visitors.len()
    }

    /// How many duplicate submissions have been rejected.
    pub fn duplicates_prevented(&self) -> u64 {
        self.duplicates_prevented
    }

    /// The retained recent admissions, newest first.
    pub fn recent(&self) -> &[Visit] {
        &self.recent
    }

    /// Lexicographically sorted visitor ids for display.
    pub fn sorted_ids(&self) -> Vec<String> {
        self.visitors.to_sorted_vec()
    }

    /// Count retained recent admissions at or after `cutoff`.
    ///
    /// The cutoff is supplied by the caller; the tracker never consults
    /// the wall clock to filter.
    pub fn recorded_since(&self, cutoff: Timestamp) -> usize {
        self.recent.iter().filter(|v| v.seen_at >= cutoff).count()
    }

    /// Reset the set, the duplicate counter, and the recent list.
    pub fn clear(&mut self) {
        self.visitors.clear();
        self.duplicates_prevented = 0;
        self.recent.clear();
    }
}
