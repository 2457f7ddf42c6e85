//! Shape validation and normalization of a parsed authors map file
//!
//! Pure and synchronous: the input is whatever YAML/JSON document the file
//! contained, the output is an [`AuthorsMap`]. Fields other than `name`,
//! `title`, `url` and `imageURL` are never inspected.

use serde_json::Value;

use super::AuthorsMap;
use crate::author::{Author, IMAGE_URL, IMAGE_URL_SNAKE_CASE, NAME};
use crate::error::{Result, authors_map as authors_map_error};

/// Validate a parsed authors map document.
///
/// The document must be a mapping of author key to author object. Each author
/// must contain a `name` or an `imageURL`; `image_url` is accepted and renamed
/// to `imageURL`. `key` and `page` are not injected here.
pub fn validate_authors_map_input(content: &Value) -> Result<AuthorsMap> {
    let Value::Object(entries) = content else {
        return Err(authors_map_error::invalid_shape());
    };
    validate_authors_map_entries(entries.iter().map(|(key, entry)| (key.as_str(), Some(entry))))
}

/// Validate authors map entries one by one, in order.
///
/// An entry of `None` is an author key that was declared without any value
/// at all, which is reported differently from an explicit `null`.
pub fn validate_authors_map_entries<'a, I>(entries: I) -> Result<AuthorsMap>
where
    I: IntoIterator<Item = (&'a str, Option<&'a Value>)>,
{
    let mut authors_map = AuthorsMap::new();
    for (key, entry) in entries {
        let author = validate_author_entry(key, entry)?;
        authors_map.insert(key, author);
    }
    tracing::debug!(authors = authors_map.len(), "validated authors map");
    Ok(authors_map)
}

fn validate_author_entry(key: &str, entry: Option<&Value>) -> Result<Author> {
    let fields = match entry {
        None => return Err(authors_map_error::undefined_entry(key)),
        Some(Value::Object(fields)) => fields,
        Some(_) => return Err(authors_map_error::null_or_array_entry(key)),
    };

    let mut author = Author::from(fields.clone());
    migrate_image_url(&mut author);

    if !has_value(&author, NAME) && !has_value(&author, IMAGE_URL) {
        return Err(authors_map_error::incomplete_entry(key));
    }
    Ok(author)
}

/// Rename `image_url` to `imageURL`; an existing `imageURL` wins
fn migrate_image_url(author: &mut Author) {
    if let Some(image_url) = author.remove(IMAGE_URL_SNAKE_CASE) {
        if !author.contains(IMAGE_URL) {
            author.insert(IMAGE_URL, image_url);
        }
    }
}

fn has_value(author: &Author, field: &str) -> bool {
    author.get(field).is_some_and(|value| !value.is_null())
}
