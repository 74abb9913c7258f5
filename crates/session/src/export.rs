//! Export documents.
//!
//! Read-only consumers of session snapshots: each builder captures a
//! session object's current state plus a caller-supplied export timestamp
//! into a serializable document, renders it as pretty-printed JSON, and
//! suggests a dated filename. Writing the rendered string anywhere is the
//! caller's business; nothing here touches the filesystem.

use std::collections::BTreeMap;

use satchel_core::{SatchelError, SatchelResult, Timestamp};
use serde::Serialize;

use crate::{ContactBook, VisitorTracker};

/// One contact in a contacts export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEntry {
    /// Contact name (also the document key).
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// When the contact was first added.
    pub added_at: Timestamp,
    /// When the contact was last changed.
    pub last_updated: Timestamp,
}

/// Snapshot of a contact book ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ContactsExport {
    /// Number of contacts at snapshot time.
    pub total_contacts: usize,
    /// When the export was taken (caller-supplied).
    pub export_date: Timestamp,
    /// Contacts keyed by name; the ordered map keeps the rendering
    /// sorted.
    pub contacts: BTreeMap<String, ContactEntry>,
}

impl ContactsExport {
    /// Snapshot `book` as of `exported_at`.
    pub fn from_book(book: &ContactBook, exported_at: Timestamp) -> Self {
        let contacts = book
            .sorted_entries()
            .into_iter()
            .map(|(name, record)| {
                let entry = ContactEntry {
                    name: name.clone(),
                    phone: record.value,
                    added_at: record.created_at,
                    last_updated: record.updated_at,
                };
                (name, entry)
            })
            .collect();

        Self {
            total_contacts: book.len(),
            export_date: exported_at,
            contacts,
        }
    }

    /// Render the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`SatchelError::Serialization`] if encoding fails.
    pub fn to_pretty_json(&self) -> SatchelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SatchelError::serialization(e.to_string()))
    }

    /// Dated download filename, e.g. `contacts_export_2024-01-15.json`.
    pub fn suggested_filename(&self) -> String {
        format!("contacts_export_{}.json", self.export_date.date_stamp())
    }
}

/// Snapshot of a visitor tracker ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct VisitorsExport {
    /// Number of unique visitors at snapshot time.
    pub total_visitors: usize,
    /// Duplicate submissions rejected so far.
    pub duplicates_prevented: u64,
    /// When the export was taken (caller-supplied).
    pub export_date: Timestamp,
    /// Visitor ids, lexicographically sorted.
    pub visitors: Vec<String>,
}

impl VisitorsExport {
    /// Snapshot `tracker` as of `exported_at`.
    pub fn from_tracker(tracker: &VisitorTracker, exported_at: Timestamp) -> Self {
        Self {
            total_visitors: tracker.unique_count(),
            duplicates_prevented: tracker.duplicates_prevented(),
            export_date: exported_at,
            visitors: tracker.sorted_ids(),
        }
    }

    /// Render the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`SatchelError::Serialization`] if encoding fails.
    pub fn to_pretty_json(&self) -> SatchelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SatchelError::serialization(e.to_string()))
    }

    /// Dated download filename, e.g. `visitors_export_2024-01-15.json`.
    pub fn suggested_filename(&self) -> String {
        format!("visitors_export_{}.json", self.export_date.date_stamp())
    }
}
