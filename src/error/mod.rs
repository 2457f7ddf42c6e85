//! Error types and handling for blog-authors
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every author or authors map failure is a user-facing configuration error,
//! so the message text doubles as guidance on how to fix the content.
//!
//! This module is organized into sub-modules by error domain:
//! - [`author`]: Front matter author declaration errors
//! - [`authors_map`]: Authors map file errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod author;
pub mod authors_map;
pub mod config;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blog-authors operations
#[derive(Error, Diagnostic, Debug)]
pub enum BlogAuthorsError {
    // Author declaration errors
    #[error(
        "To declare blog post authors, use the 'authors' front matter in priority.\n\
         Don't mix 'authors' with other existing 'author_*' front matter. \
         Choose one or the other, not both at the same time."
    )]
    #[diagnostic(
        code(blog_authors::author::conflicting_fields),
        help("Move the legacy 'author*' fields into an 'authors' entry and delete them")
    )]
    ConflictingAuthorFields { legacy_fields: Vec<String> },

    #[error(
        "Can't reference blog post authors by a key (such as '{key}') because no authors map file could be loaded.\n\
         Please double-check your blog plugin config (in particular 'authorsMapPath'), \
         ensure the file exists at the configured path, is not empty, and is valid!"
    )]
    #[diagnostic(code(blog_authors::author::authors_map_not_found))]
    AuthorsMapNotFound { key: String },

    #[error(
        "Blog author with key \"{key}\" not found in the authors map file.\nValid author keys are:\n{}",
        bullet_list(.valid_keys)
    )]
    #[diagnostic(code(blog_authors::author::key_not_found))]
    AuthorKeyNotFound {
        key: String,
        valid_keys: Vec<String>,
    },

    #[error("Invalid blog post author at {location}: {reason}")]
    #[diagnostic(
        code(blog_authors::author::invalid_declaration),
        help("Use an author key or an author object (with a key and/or name)")
    )]
    InvalidAuthorDeclaration { location: String, reason: String },

    #[error(
        "Some blog authors used in '{source_path}' are not defined in the authors map file:\n{}",
        bullet_list(.authors)
    )]
    #[diagnostic(
        code(blog_authors::author::inline_not_allowed),
        help(
            "Declare authors once in the authors map file and reference them by key, \
             or set 'on_inline_authors' to 'ignore' to allow inline authors"
        )
    )]
    InlineAuthorsNotAllowed {
        source_path: String,
        authors: Vec<String>,
    },

    // Authors map errors
    #[error(
        "The authors map file should contain an object where each entry contains an author key \
         and the corresponding author's data."
    )]
    #[diagnostic(code(blog_authors::authors_map::invalid_shape))]
    InvalidRegistryShape,

    #[error(
        "\"{key}\" cannot be undefined. It should be an author object containing properties \
         like name, title, and imageURL."
    )]
    #[diagnostic(code(blog_authors::authors_map::undefined_entry))]
    UndefinedAuthorEntry { key: String },

    #[error(
        "\"{key}\" should be an author object containing properties like name, title, and imageURL."
    )]
    #[diagnostic(code(blog_authors::authors_map::null_or_array_entry))]
    NullOrArrayAuthorEntry { key: String },

    #[error("\"{key}\" must contain at least one of [name, imageURL]")]
    #[diagnostic(code(blog_authors::authors_map::incomplete_entry))]
    IncompleteAuthorEntry { key: String },

    #[error(
        "The authors map file contains multiple authors with the same page permalink '{permalink}': \
         \"{first_key}\" and \"{second_key}\""
    )]
    #[diagnostic(
        code(blog_authors::authors_map::permalink_collision),
        help("Give each author a distinct 'page.permalink'")
    )]
    AuthorPagePermalinkCollision {
        permalink: String,
        first_key: String,
        second_key: String,
    },

    #[error("Unsupported authors map file format: {path}")]
    #[diagnostic(
        code(blog_authors::authors_map::unsupported_format),
        help("Use a .yml, .yaml or .json file")
    )]
    UnsupportedRegistryFormat { path: String },

    #[error("Failed to parse authors map file: {path}: {reason}")]
    #[diagnostic(code(blog_authors::authors_map::parse_failed))]
    RegistryParseFailed { path: String, reason: String },

    // Front matter errors
    #[error("Failed to parse front matter of '{source_path}': {reason}")]
    #[diagnostic(code(blog_authors::frontmatter::parse_failed))]
    FrontMatterParseFailed { source_path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(blog_authors::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(blog_authors::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(blog_authors::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(blog_authors::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(blog_authors::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(blog_authors::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(blog_authors::fs::io_error))]
    IoError { message: String },
}

/// Render items as a `- item` list, one per line
fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<serde_yaml::Error> for BlogAuthorsError {
    fn from(err: serde_yaml::Error) -> Self {
        BlogAuthorsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BlogAuthorsError>;
