//! Resolution of a blog post's authors
//!
//! A post declares its authors either with legacy single-author fields
//! (`author`, `author_title`, ...) or with the `authors` field, never both.
//! `authors` entries are either keys into the authors map or inline author
//! objects; an inline object with a `key` overrides fields of that entry.
//!
//! ```text
//! front matter ──► legacy fields? ──yes──► [legacy author]
//!                        │
//!                        no
//!                        ▼
//!            normalize_declarations(authors)
//!                        │
//!        ┌───────────────┴────────────────┐
//!        ▼                                ▼
//!   KeyRef{key, overrides}           Inline(fields)
//!   authors map entry - page         fields
//!   + overrides + key                + imageURL (always set)
//! ```
//!
//! Resolution is pure: it reads its arguments and allocates the result, so
//! posts can be resolved in parallel.

pub mod declaration;
pub mod legacy;
pub mod report;


pub use declaration::{AuthorDeclaration, normalize_declarations};
pub use report::{InlineAuthorsPolicy, report_inline_authors};

use serde_json::Value;

use crate::author::{Author, AuthorFields, IMAGE_URL, KEY, PAGE};
use crate::authors_map::AuthorsMap;
use crate::error::{Result, author as author_error};
use crate::frontmatter::FrontMatter;
use crate::url::normalize_image_url;

/// Resolves blog post authors against an optional authors map
#[derive(Debug, Clone, Copy)]
pub struct AuthorResolver<'a> {
    authors_map: Option<&'a AuthorsMap>,
    base_url: &'a str,
}

impl<'a> AuthorResolver<'a> {
    /// `base_url` prefixes root-relative `imageURL`s (`/img/me.png`)
    pub fn new(authors_map: Option<&'a AuthorsMap>, base_url: &'a str) -> Self {
        Self {
            authors_map,
            base_url,
        }
    }

    /// Resolve the ordered author list of one blog post
    pub fn resolve(&self, front_matter: &FrontMatter) -> Result<Vec<Author>> {
        let Some(authors) = front_matter.authors() else {
            let legacy = legacy::legacy_author(front_matter, self.base_url)?;
            return Ok(legacy.into_iter().collect());
        };

        let legacy_fields = front_matter.legacy_fields_present();
        if !legacy_fields.is_empty() {
            return Err(author_error::conflicting_fields(legacy_fields));
        }

        let resolved = normalize_declarations(authors)?
            .into_iter()
            .map(|declaration| self.resolve_declaration(declaration))
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(authors = resolved.len(), "resolved blog post authors");
        Ok(resolved)
    }

    fn resolve_declaration(&self, declaration: AuthorDeclaration) -> Result<Author> {
        match declaration {
            AuthorDeclaration::KeyRef { key, overrides } => self.resolve_key_ref(key, overrides),
            AuthorDeclaration::Inline(fields) => Ok(self.resolve_inline(fields)),
        }
    }

    /// Authors map entry overridden field by field, never carrying `page`
    fn resolve_key_ref(&self, key: String, overrides: AuthorFields) -> Result<Author> {
        let mut author = self.lookup(&key)?.clone();
        for (field, value) in overrides {
            author.insert(field, value);
        }
        author.remove(PAGE);
        author.insert(KEY, key);

        if let Some(image_url) = author.image_url().map(|url| normalize_image_url(url, self.base_url)) {
            author.insert(IMAGE_URL, image_url);
        }
        Ok(author)
    }

    /// Inline authors always carry `imageURL`, `null` when not declared
    fn resolve_inline(&self, fields: AuthorFields) -> Author {
        let mut author = Author::from(fields);
        let image_url = author
            .image_url()
            .map(|url| normalize_image_url(url, self.base_url));
        author.insert(IMAGE_URL, image_url.map_or(Value::Null, Value::from));
        author
    }

    fn lookup(&self, key: &str) -> Result<&'a Author> {
        let authors_map = self
            .authors_map
            .filter(|authors_map| !authors_map.is_empty())
            .ok_or_else(|| author_error::authors_map_not_found(key))?;
        authors_map
            .get(key)
            .ok_or_else(|| author_error::key_not_found(key, authors_map.keys()))
    }
}

/// Resolve the authors of one blog post.
///
/// Shorthand for [`AuthorResolver::resolve`].
pub fn resolve_blog_post_authors(
    front_matter: &FrontMatter,
    authors_map: Option<&AuthorsMap>,
    base_url: &str,
) -> Result<Vec<Author>> {
    AuthorResolver::new(authors_map, base_url).resolve(front_matter)
}
