//! Wall-clock timestamps.
//!
//! A thin wrapper around `chrono::DateTime<Utc>` so call sites never deal
//! with chrono generics directly. Timestamps are read at call time from
//! the wall clock; no operation depends on elapsed time internally.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// UTC wall-clock timestamp attached to records, tasks, and visits.
///
/// Ordering and equality follow the underlying instant. Serializes as the
/// bare chrono datetime (RFC 3339 in JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Capture the current wall-clock time.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Wrap an existing chrono datetime.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }

    /// Access the underlying chrono datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// RFC 3339 rendering with second precision, e.g. `2024-01-15T10:30:00Z`.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Calendar date rendering, e.g. `2024-01-15`.
    ///
    /// Used for dated export filenames.
    pub fn date_stamp(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}
