//! Reporting of inline authors
//!
//! Once a blog has an authors map, authors declared inline in front matter
//! are usually a mistake (a typo'd key turned into an object, or duplicated
//! author info). How loudly to complain is configurable.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::author::Author;
use crate::error::{Result, author as author_error};

/// What to do when a blog post declares authors inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InlineAuthorsPolicy {
    /// Allow inline authors silently
    Ignore,
    /// Emit an informational log line
    Log,
    /// Emit a warning
    #[default]
    Warn,
    /// Fail the post
    Throw,
}

/// Report authors of one post that are not backed by the authors map.
///
/// Callers only invoke this when an authors map was loaded.
pub fn report_inline_authors(
    authors: &[Author],
    policy: InlineAuthorsPolicy,
    source_path: &str,
) -> Result<()> {
    if policy == InlineAuthorsPolicy::Ignore {
        return Ok(());
    }

    let inline: Vec<String> = authors
        .iter()
        .filter(|author| author.is_inline())
        .map(Author::label)
        .collect();
    if inline.is_empty() {
        return Ok(());
    }

    match policy {
        InlineAuthorsPolicy::Ignore => {}
        InlineAuthorsPolicy::Log => {
            tracing::info!(source = source_path, authors = ?inline, "blog post declares inline authors");
        }
        InlineAuthorsPolicy::Warn => {
            tracing::warn!(
                source = source_path,
                authors = ?inline,
                "blog post declares authors that are not in the authors map"
            );
        }
        InlineAuthorsPolicy::Throw => {
            return Err(author_error::inline_not_allowed(source_path, inline));
        }
    }
    Ok(())
}
