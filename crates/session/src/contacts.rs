//! Contact book session.
//!
//! Owns a record store keyed by unique contact name; the phone number is
//! the record's primary value, and creation/update timestamps come with
//! the store. Adding an existing name is rejected loudly; editing goes
//! through [`ContactBook::update_phone`], the only overwrite path.

use satchel_containers::{Record, RecordStore};
use satchel_core::{SatchelError, SatchelResult, Timestamp};

/// Contact book keyed by contact name.
///
/// # Example
///
/// ```
/// use satchel_session::ContactBook;
///
/// let mut book = ContactBook::new();
/// book.add("bob", "555-1111").unwrap();
/// assert!(book.add("bob", "555-2222").unwrap_err().is_already_exists());
///
/// book.update_phone("bob", "555-2222").unwrap();
/// assert_eq!(book.get("bob").unwrap().value, "555-2222");
/// ```
#[derive(Debug, Default)]
pub struct ContactBook {
    records: RecordStore<String>,
}

impl ContactBook {
    /// Create an empty contact book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new contact.
    ///
    /// Name and phone are trimmed before storage.
    ///
    /// # Errors
    ///
    /// - [`SatchelError::InvalidInput`] if either field is blank
    /// - [`SatchelError::AlreadyExists`] if the name is taken; the stored
    ///   contact is untouched and the caller should surface the conflict
    pub fn add(&mut self, name: &str, phone: &str) -> SatchelResult<()> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(SatchelError::invalid_input(
                "contact name and phone are both required",
            ));
        }

        self.records.insert(name, phone.to_string())?;
        tracing::debug!(target: "satchel::contacts", contact = %name, total = self.records.len(), "contact added");
        Ok(())
    }

    /// Look up a contact's record, or `None` if absent.
    pub fn get(&self, name: &str) -> Option<&Record<String>> {
        self.records.get(name)
    }

    /// Replace an existing contact's phone number.
    ///
    /// Refreshes the record's update timestamp; the creation timestamp is
    /// preserved.
    ///
    /// # Errors
    ///
    /// - [`SatchelError::InvalidInput`] if the phone is blank
    /// - [`SatchelError::NotFound`] if no contact has this name
    pub fn update_phone(&mut self, name: &str, phone: &str) -> SatchelResult<()> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(SatchelError::invalid_input("phone number must not be empty"));
        }
        self.records.update(name, phone.to_string())
    }

    /// Remove a contact and return its record.
    ///
    /// # Errors
    ///
    /// [`SatchelError::NotFound`] if no contact has this name.
    pub fn remove(&mut self, name: &str) -> SatchelResult<Record<String>> {
        let removed = self.records.remove(name)?;
        tracing::debug!(target: "satchel::contacts", contact = %name, "contact removed");
        Ok(removed)
    }

    /// Case-insensitive substring search over names and phone numbers.
    ///
    /// A blank term matches everything. Results are sorted by name.
    pub fn search(&self, term: &str) -> Vec<(String, Record<String>)> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.sorted_entries();
        }

        let mut results = self
            .records
            .search(|name, record| {
                name.to_lowercase().contains(&needle) || record.value.contains(&needle)
            });
        results.sort_by(|a, b| a.0.cmp(&b.0));
        results
    }

    /// All contacts sorted by name for display.
    pub fn sorted_entries(&self) -> Vec<(String, Record<String>)> {
        let mut entries = self.records.entries();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Count contacts created at or after `cutoff`.
    ///
    /// The cutoff is supplied by the caller; the book never consults the
    /// wall clock to filter.
    pub fn added_since(&self, cutoff: Timestamp) -> usize {
        self.records
            .iter()
            .filter(|(_, record)| record.created_at >= cutoff)
            .count()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all contacts.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
