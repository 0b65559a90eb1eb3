//! Context fields attachable to a failure node at construction time.

use core::fmt;

use crate::types::EntryVec;

/// A piece of context passed to [`Failure::with`](crate::types::Failure::with).
///
/// Fields are applied in order: a later `Message` overwrites the node's
/// message, a later `Debug` map merges into the node's existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Human-readable display text for end users.
    Message(String),
    /// Diagnostic key/value context, not meant for end users.
    Debug(DebugMap),
}

impl Field {
    /// Creates a message field.
    #[inline]
    pub fn message<S: Into<String>>(text: S) -> Self {
        Self::Message(text.into())
    }

    /// Creates a debug field from a pre-built map.
    #[inline]
    pub fn debug(map: DebugMap) -> Self {
        Self::Debug(map)
    }
}

/// Creates a message [`Field`].
///
/// For formatted messages use the [`message!`](crate::message!) macro.
///
/// # Examples
///
/// ```
/// use failcode::{message, new, StringCode};
///
/// let err = new(StringCode("auth")).with(message("session expired"));
/// assert_eq!(failcode::message_of(&err), Some("session expired"));
/// ```
#[inline]
pub fn message<S: Into<String>>(text: S) -> Field {
    Field::Message(text.into())
}

/// Insertion-ordered string-to-string map of diagnostic context.
///
/// Re-inserting an existing key overwrites its value in place, keeping the
/// position of the first insertion. Built most conveniently via the
/// [`kv!`](crate::kv) macro.
///
/// # Examples
///
/// ```
/// use failcode::DebugMap;
///
/// let mut map = DebugMap::new();
/// map.insert("attempt", "1");
/// map.insert("host", "db-1");
/// map.insert("attempt", "2");
///
/// assert_eq!(map.get("attempt"), Some("2"));
/// assert_eq!(map.iter().next(), Some(("attempt", "2")));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugMap {
    entries: EntryVec,
}

impl DebugMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair, overwriting the value of an existing key.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Folds `other` into `self`, entry by entry.
    pub fn merge(&mut self, other: DebugMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DebugMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl fmt::Display for DebugMap {
    /// Space-joined `key=value` pairs in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
