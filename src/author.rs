//! Author records
//!
//! An author is an open mapping: a handful of fields are understood
//! (`key`, `name`, `title`, `url`, `imageURL`, `page`) and every other field
//! is carried through untouched so site themes can attach their own data
//! (social handles, emails, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the authors map key of an author
pub const KEY: &str = "key";
/// Display name field
pub const NAME: &str = "name";
/// Job title / role field
pub const TITLE: &str = "title";
/// Author homepage field
pub const URL: &str = "url";
/// Avatar field (canonical spelling)
pub const IMAGE_URL: &str = "imageURL";
/// Accepted snake_case spelling of [`IMAGE_URL`]
pub const IMAGE_URL_SNAKE_CASE: &str = "image_url";
/// Author page routing info, injected by the authors map loader
pub const PAGE: &str = "page";

/// Raw author fields in declaration order
pub type AuthorFields = Map<String, Value>;

/// A single author of a blog post, or an entry of the authors map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(AuthorFields);

impl Author {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &AuthorFields {
        &self.0
    }

    pub fn into_fields(self) -> AuthorFields {
        self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a field as a string; `None` when missing or not a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.shift_remove(field)
    }

    pub fn key(&self) -> Option<&str> {
        self.get_str(KEY)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str(TITLE)
    }

    pub fn url(&self) -> Option<&str> {
        self.get_str(URL)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.get_str(IMAGE_URL)
    }

    /// Permalink of the generated author page, if any
    pub fn permalink(&self) -> Option<&str> {
        self.get(PAGE)?.get("permalink")?.as_str()
    }

    /// Authors without a `key` were declared inline in front matter
    pub fn is_inline(&self) -> bool {
        self.key().is_none()
    }

    /// Short human readable label used in reports
    pub fn label(&self) -> String {
        self.name()
            .or_else(|| self.key())
            .or_else(|| self.image_url())
            .map_or_else(|| Value::Object(self.0.clone()).to_string(), ToString::to_string)
    }
}

impl From<AuthorFields> for Author {
    fn from(fields: AuthorFields) -> Self {
        Self(fields)
    }
}

impl From<Author> for Value {
    fn from(author: Author) -> Self {
        Value::Object(author.0)
    }
}
