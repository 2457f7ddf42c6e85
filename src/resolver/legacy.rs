//! Legacy single-author front matter (`author`, `author_title`, ...)

use crate::author::Author;
use crate::error::{Result, author as author_error};
use crate::frontmatter::{FrontMatter, LegacyAuthorField};
use crate::url::normalize_image_url;

/// Build the one author described by legacy fields, if any is set.
///
/// camelCase spellings win over snake_case ones, and only fields actually
/// present end up in the record.
pub fn legacy_author(front_matter: &FrontMatter, base_url: &str) -> Result<Option<Author>> {
    let mut author = Author::new();
    for field in LegacyAuthorField::ALL {
        let Some((alias, value)) = front_matter.legacy_field(field) else {
            continue;
        };
        let Some(value) = value.as_str() else {
            return Err(author_error::invalid_declaration(alias, "must be a string"));
        };
        let value = match field {
            LegacyAuthorField::ImageUrl => normalize_image_url(value, base_url),
            _ => value.to_string(),
        };
        author.insert(field.author_field(), value);
    }
    Ok((!author.fields().is_empty()).then_some(author))
}
