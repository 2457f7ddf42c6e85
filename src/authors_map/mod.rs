//! The authors map: a shared file mapping author keys to author profiles
//!
//! - [`validation`]: shape checks and normalization of the raw parsed file
//! - [`loader`]: locating, parsing and post-processing the file on disk

pub mod loader;
pub mod validation;

pub use loader::{AuthorsMapOptions, ContentPaths, load_authors_map};
pub use validation::{validate_authors_map_entries, validate_authors_map_input};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::author::Author;

/// Authors keyed by author key, in file order.
///
/// Order matters: error messages list valid keys the way the file declares them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorsMap {
    entries: IndexMap<String, Author>,
}

impl AuthorsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an author, replacing (in place) any author with the same key
    pub fn insert(&mut self, key: impl Into<String>, author: Author) {
        self.entries.insert(key.into(), author);
    }

    pub fn get(&self, key: &str) -> Option<&Author> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Author)> {
        self.entries.iter().map(|(k, author)| (k.as_str(), author))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Author)> {
        self.entries
            .iter_mut()
            .map(|(k, author)| (k.as_str(), author))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert back into a plain JSON value (e.g. to re-validate it)
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, author)| (k.clone(), Value::from(author.clone())))
                .collect(),
        )
    }
}

impl FromIterator<(String, Author)> for AuthorsMap {
    fn from_iter<I: IntoIterator<Item = (String, Author)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AuthorsMap {
    type Item = (String, Author);
    type IntoIter = indexmap::map::IntoIter<String, Author>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for AuthorsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.entries)
    }
}
