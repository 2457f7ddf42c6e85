//! Front matter author declaration errors

use super::BlogAuthorsError;

/// Creates a conflicting author fields error
pub fn conflicting_fields<I, S>(legacy_fields: I) -> BlogAuthorsError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BlogAuthorsError::ConflictingAuthorFields {
        legacy_fields: legacy_fields.into_iter().map(Into::into).collect(),
    }
}

/// Creates an authors map not found error for a key reference
pub fn authors_map_not_found(key: impl Into<String>) -> BlogAuthorsError {
    BlogAuthorsError::AuthorsMapNotFound { key: key.into() }
}

/// Creates an author key not found error
pub fn key_not_found<I, S>(key: impl Into<String>, valid_keys: I) -> BlogAuthorsError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BlogAuthorsError::AuthorKeyNotFound {
        key: key.into(),
        valid_keys: valid_keys.into_iter().map(Into::into).collect(),
    }
}

/// Creates an invalid author declaration error
pub fn invalid_declaration(
    location: impl Into<String>,
    reason: impl Into<String>,
) -> BlogAuthorsError {
    BlogAuthorsError::InvalidAuthorDeclaration {
        location: location.into(),
        reason: reason.into(),
    }
}

/// Creates an inline authors not allowed error
pub fn inline_not_allowed(source_path: impl Into<String>, authors: Vec<String>) -> BlogAuthorsError {
    BlogAuthorsError::InlineAuthorsNotAllowed {
        source_path: source_path.into(),
        authors,
    }
}

/// Creates a front matter parse failed error
pub fn front_matter_parse_failed(
    source_path: impl Into<String>,
    reason: impl Into<String>,
) -> BlogAuthorsError {
    BlogAuthorsError::FrontMatterParseFailed {
        source_path: source_path.into(),
        reason: reason.into(),
    }
}
