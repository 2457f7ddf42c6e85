//! Authors map file errors

use super::BlogAuthorsError;

/// Creates an invalid authors map shape error
pub fn invalid_shape() -> BlogAuthorsError {
    BlogAuthorsError::InvalidRegistryShape
}

/// Creates an undefined author entry error
pub fn undefined_entry(key: impl Into<String>) -> BlogAuthorsError {
    BlogAuthorsError::UndefinedAuthorEntry { key: key.into() }
}

/// Creates a null or array author entry error
pub fn null_or_array_entry(key: impl Into<String>) -> BlogAuthorsError {
    BlogAuthorsError::NullOrArrayAuthorEntry { key: key.into() }
}

/// Creates an incomplete author entry error
pub fn incomplete_entry(key: impl Into<String>) -> BlogAuthorsError {
    BlogAuthorsError::IncompleteAuthorEntry { key: key.into() }
}

/// Creates a page permalink collision error
pub fn permalink_collision(
    permalink: impl Into<String>,
    first_key: impl Into<String>,
    second_key: impl Into<String>,
) -> BlogAuthorsError {
    BlogAuthorsError::AuthorPagePermalinkCollision {
        permalink: permalink.into(),
        first_key: first_key.into(),
        second_key: second_key.into(),
    }
}

/// Creates an unsupported format error
pub fn unsupported_format(path: impl Into<String>) -> BlogAuthorsError {
    BlogAuthorsError::UnsupportedRegistryFormat { path: path.into() }
}

/// Creates an authors map parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BlogAuthorsError {
    BlogAuthorsError::RegistryParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
