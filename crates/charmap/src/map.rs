//! The [`CharMap`] type and its loaders.
//!
//! A character map is a flat JSON object whose keys are single characters and
//! whose values are the replacement text the normalizer substitutes for them:
//!
//! ```json
//! { "$": "dollar", "©": "(c)", "円": "yen" }
//! ```
//!
//! Values may be empty (the character is dropped) or contain several words
//! (`"₹": "indian rupee"`); whitespace inside a value later collapses into the
//! normalizer's separator.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CharMapError;

/// The default table shipped with the crate.
pub const BUNDLED_CHARMAP: &str = include_str!("../assets/charmap.json");

/// Mapping from a single character (as a string key) to its replacement text.
///
/// `CharMap` is a plain value: cloning it yields an independent copy, so a
/// map handed out by [`CharMapRegistry`](crate::CharMapRegistry) can be
/// mutated freely without touching the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharMap {
    entries: HashMap<String, String>,
}

impl CharMap {
    /// Creates an empty map. Every character is kept as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the table bundled with the crate.
    pub fn bundled() -> Result<Self, CharMapError> {
        Self::from_json(BUNDLED_CHARMAP)
    }

    /// Parses a flat `{"char": "replacement"}` JSON object.
    ///
    /// Anything other than an object of string values is rejected with
    /// [`CharMapError::Parse`].
    pub fn from_json(json: &str) -> Result<Self, CharMapError> {
        let map: CharMap = serde_json::from_str(json)?;
        map.warn_unmatchable_keys();
        Ok(map)
    }

    /// Same as [`CharMap::from_json`] for raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CharMapError> {
        let map: CharMap = serde_json::from_slice(bytes)?;
        map.warn_unmatchable_keys();
        Ok(map)
    }

    /// Reads and parses a JSON character map from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CharMapError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| CharMapError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_slice(&bytes)
    }

    /// Replacement text for `key`, if one is defined.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Replacement text for a single character.
    pub fn lookup(&self, ch: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.get(ch.encode_utf8(&mut buf))
    }

    /// Adds or replaces an entry, returning the previous replacement.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries
    }

    /// Lookup happens one code point at a time, so multi-character keys are
    /// dead entries.
    fn warn_unmatchable_keys(&self) {
        let unmatchable = self
            .entries
            .keys()
            .filter(|key| key.chars().count() != 1)
            .count();
        if unmatchable > 0 {
            warn!(
                unmatchable,
                total = self.entries.len(),
                "charmap_keys_not_single_char"
            );
        }
    }
}

impl From<HashMap<String, String>> for CharMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for CharMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for CharMap {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a CharMap {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
