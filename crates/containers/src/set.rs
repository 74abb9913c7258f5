//! Membership-tested set of unique string keys.
//!
//! The set reports whether an insert was new so callers can count
//! duplicates themselves; the set keeps no duplicate statistics of its
//! own.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Set of unique string keys.
///
/// Insertion order is unspecified and irrelevant; displays that need a
/// stable ordering take the lexicographic snapshot.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    keys: HashSet<String>,
}

impl KeySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    /// Insert a key.
    ///
    /// Returns `true` if the key was newly inserted, `false` if it was
    /// already a member (in which case the set is unchanged).
    pub fn add(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    /// True if the key is a member.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate the members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Lexicographically sorted snapshot for display.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Display classification of a key string.
///
/// Derived on demand from the key itself; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// The key looks like an email address.
    Email,
    /// The key looks like a dotted-quad IPv4 address.
    Ip,
    /// Anything else: an opaque identifier.
    Id,
}

impl KeyKind {
    /// Classify a key string.
    ///
    /// An `@` anywhere makes it an email; four dot-separated runs of one
    /// to three ASCII digits make it an address; everything else is an
    /// opaque id. Octet ranges are not checked: the shape is a display
    /// hint, not a validator.
    pub fn classify(key: &str) -> Self {
        if key.contains('@') {
            return KeyKind::Email;
        }
        if is_dotted_quad(key) {
            return KeyKind::Ip;
        }
        KeyKind::Id
    }

    /// Lowercase label used in list renderings.
    pub fn label(&self) -> &'static str {
        match self {
            KeyKind::Email => "email",
            KeyKind::Ip => "ip",
            KeyKind::Id => "id",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_dotted_quad(key: &str) -> bool {
    let mut segments = 0;
    for part in key.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments == 4
}
