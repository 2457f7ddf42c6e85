//! blog-authors - blog post author resolution
//!
//! Resolves the authors of a blog post from its front matter, either from
//! the legacy single-author fields or from the `authors` list, whose entries
//! can reference a shared authors map (`authors.yml` / `authors.json`).
//!
//! ```no_run
//! use blog_authors::authors_map::{AuthorsMapOptions, ContentPaths, load_authors_map};
//! use blog_authors::frontmatter::parse_front_matter_and_body;
//! use blog_authors::resolver::resolve_blog_post_authors;
//!
//! # fn main() -> blog_authors::error::Result<()> {
//! let options = AuthorsMapOptions::new(ContentPaths::new("blog"));
//! let authors_map = load_authors_map(&options)?;
//!
//! let post = "---\nauthors: [slorber]\n---\n\nHello";
//! let (front_matter, _body) = parse_front_matter_and_body(post, "blog/hello.md")?;
//! let authors = resolve_blog_post_authors(&front_matter, authors_map.as_ref(), "/")?;
//! # let _ = authors;
//! # Ok(())
//! # }
//! ```

pub mod author;
pub mod authors_map;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod resolver;
pub mod url;

pub use author::Author;
pub use authors_map::AuthorsMap;
pub use error::{BlogAuthorsError, Result};
pub use frontmatter::FrontMatter;
pub use resolver::{AuthorResolver, resolve_blog_post_authors};
