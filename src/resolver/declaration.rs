//! Normalization of the polymorphic `authors` front matter field
//!
//! `authors` may be a key, an author object, or an array mixing both. It is
//! flattened once into an ordered list of [`AuthorDeclaration`]s so resolution
//! never has to look at the raw shape again.

use serde_json::Value;

use crate::author::{AuthorFields, IMAGE_URL, IMAGE_URL_SNAKE_CASE, KEY, NAME, TITLE, URL};
use crate::error::{Result, author as author_error};
use crate::frontmatter::AUTHORS;

/// Fields that must hold strings (or `null`) when declared inline
const STRING_FIELDS: [&str; 5] = [KEY, NAME, TITLE, URL, IMAGE_URL];

/// One author entry of a blog post's `authors` field
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorDeclaration {
    /// Reference to an authors map entry, with fields overriding that entry
    KeyRef { key: String, overrides: AuthorFields },
    /// Author declared entirely in front matter
    Inline(AuthorFields),
}

/// Flatten an `authors` value into declarations, keeping declaration order
pub fn normalize_declarations(authors: &Value) -> Result<Vec<AuthorDeclaration>> {
    match authors {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| normalize_item(item, &format!("{AUTHORS}[{index}]")))
            .collect(),
        item => Ok(vec![normalize_item(item, AUTHORS)?]),
    }
}

fn normalize_item(item: &Value, location: &str) -> Result<AuthorDeclaration> {
    match item {
        Value::String(key) => Ok(key_ref(key.clone(), AuthorFields::new())),
        Value::Object(fields) => normalize_inline(fields.clone(), location),
        other => Err(author_error::invalid_declaration(
            location,
            format!("expected an author key or an author object, found {}", describe(other)),
        )),
    }
}

fn normalize_inline(mut fields: AuthorFields, location: &str) -> Result<AuthorDeclaration> {
    if let Some(image_url) = fields.shift_remove(IMAGE_URL_SNAKE_CASE) {
        if !fields.contains_key(IMAGE_URL) {
            fields.insert(IMAGE_URL.to_string(), image_url);
        }
    }

    if let Some(field) = STRING_FIELDS
        .into_iter()
        .find(|field| {
            fields
                .get(*field)
                .is_some_and(|value| !value.is_string() && !value.is_null())
        })
    {
        return Err(author_error::invalid_declaration(
            location,
            format!("'{field}' must be a string"),
        ));
    }

    if let Some(Value::String(key)) = fields.shift_remove(KEY) {
        return Ok(key_ref(key, fields));
    }

    let declared = |field: &str| fields.get(field).is_some_and(|value| !value.is_null());
    if !declared(NAME) && !declared(IMAGE_URL) {
        return Err(author_error::invalid_declaration(
            location,
            "an author object must contain at least one of [key, name, imageURL]",
        ));
    }
    Ok(AuthorDeclaration::Inline(fields))
}

/// Any string is a valid key; unknown ones fail at lookup
fn key_ref(key: String, overrides: AuthorFields) -> AuthorDeclaration {
    AuthorDeclaration::KeyRef { key, overrides }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a nested array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogAuthorsError;
    use serde_json::json;

    fn fields(value: Value) -> AuthorFields {
        match value {
            Value::Object(fields) => fields,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn key(k: &str) -> AuthorDeclaration {
        AuthorDeclaration::KeyRef {
            key: k.to_string(),
            overrides: AuthorFields::new(),
        }
    }

    #[test]
    fn scalar_key() {
        assert_eq!(
            normalize_declarations(&json!("slorber")).expect("should normalize"),
            vec![key("slorber")]
        );
    }

    #[test]
    fn array_of_keys() {
        assert_eq!(
            normalize_declarations(&json!(["slorber", "yangshun"])).expect("should normalize"),
            vec![key("slorber"), key("yangshun")]
        );
    }

    #[test]
    fn scalar_inline_object() {
        assert_eq!(
            normalize_declarations(&json!({"name": "Sébastien Lorber", "title": "maintainer"}))
                .expect("should normalize"),
            vec![AuthorDeclaration::Inline(fields(
                json!({"name": "Sébastien Lorber", "title": "maintainer"})
            ))]
        );
    }

    #[test]
    fn mixed_array_keeps_order() {
        let declarations = normalize_declarations(&json!([
            "slorber",
            {"key": "yangshun", "title": "local override", "extra": 42},
            {"name": "Alexey"},
        ]))
        .expect("should normalize");
        assert_eq!(
            declarations,
            vec![
                key("slorber"),
                AuthorDeclaration::KeyRef {
                    key: "yangshun".to_string(),
                    overrides: fields(json!({"title": "local override", "extra": 42})),
                },
                AuthorDeclaration::Inline(fields(json!({"name": "Alexey"}))),
            ]
        );
    }

    #[test]
    fn empty_array() {
        assert!(normalize_declarations(&json!([])).expect("should normalize").is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(
            normalize_declarations(&json!(["a", "a"])).expect("should normalize"),
            vec![key("a"), key("a")]
        );
    }

    #[test]
    fn inline_snake_case_image_url_is_renamed() {
        assert_eq!(
            normalize_declarations(&json!({"image_url": "/img/a.png"})).expect("should normalize"),
            vec![AuthorDeclaration::Inline(fields(json!({"imageURL": "/img/a.png"})))]
        );
    }

    #[test]
    fn reject_number() {
        let err = normalize_declarations(&json!(42)).unwrap_err();
        assert!(
            matches!(err, BlogAuthorsError::InvalidAuthorDeclaration { ref location, .. } if location == "authors")
        );
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn reject_nested_array_with_position() {
        let err = normalize_declarations(&json!(["a", ["b"]])).unwrap_err();
        assert!(
            matches!(err, BlogAuthorsError::InvalidAuthorDeclaration { ref location, .. } if location == "authors[1]")
        );
    }

    #[test]
    fn reject_object_without_identity() {
        let err = normalize_declarations(&json!([{"title": "maintainer"}])).unwrap_err();
        assert!(err.to_string().contains("at least one of [key, name, imageURL]"));
    }

    #[test]
    fn reject_non_string_known_field() {
        let err = normalize_declarations(&json!({"name": 42})).unwrap_err();
        assert!(err.to_string().contains("'name' must be a string"));
    }

    #[test]
    fn blank_key_is_still_a_key() {
        assert_eq!(
            normalize_declarations(&json!(["", {"key": " "}])).expect("should normalize"),
            vec![key(""), key(" ")]
        );
    }
}
