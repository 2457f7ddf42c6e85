//! Resolve command implementation
//!
//! Prints `{ "<post path>": [authors...] }` for every post given on the
//! command line, directories being searched recursively for Markdown posts.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use walkdir::WalkDir;

use super::helpers::{load_effective_config, render};
use crate::author::Author;
use crate::authors_map::load_authors_map;
use crate::cli::ResolveArgs;
use crate::error::{Result, fs as fs_error};
use crate::frontmatter::parse_front_matter_and_body;
use crate::resolver::{AuthorResolver, InlineAuthorsPolicy, report_inline_authors};

/// Extensions of blog post files
const POST_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Run resolve command
pub fn run(config_path: Option<&Path>, args: ResolveArgs) -> Result<()> {
    let mut config = load_effective_config(config_path, &args.authors_map)?;
    if let Some(policy) = args.on_inline_authors {
        config.on_inline_authors = policy;
    }

    let authors_map = load_authors_map(&config.authors_map_options())?;
    let resolver = AuthorResolver::new(authors_map.as_ref(), &config.base_url);
    let inline_policy = authors_map.as_ref().map(|_| config.on_inline_authors);

    let posts = collect_posts(&args.posts)?;
    tracing::info!(posts = posts.len(), "resolving blog post authors");

    let mut resolved = Map::new();
    for post in posts {
        let source = post.display().to_string();
        let authors = resolve_post(&resolver, &post, inline_policy).inspect_err(|_| {
            tracing::error!(post = %source, "cannot resolve blog post authors");
        })?;
        resolved.insert(
            source,
            Value::Array(authors.into_iter().map(Value::from).collect()),
        );
    }

    println!("{}", render(&resolved, args.format)?);
    Ok(())
}

/// Expand directories into the Markdown posts they contain, in path order
fn collect_posts(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut posts = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.map_err(|e| fs_error::io_error(e.to_string()))?;
                if entry.file_type().is_file() && is_post(entry.path()) {
                    posts.push(entry.into_path());
                }
            }
        } else if input.is_file() {
            posts.push(input.clone());
        } else {
            return Err(fs_error::not_found(input.display().to_string()));
        }
    }
    Ok(posts)
}

fn is_post(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

/// `inline_policy` is `None` when no authors map was loaded
fn resolve_post(
    resolver: &AuthorResolver<'_>,
    path: &Path,
    inline_policy: Option<InlineAuthorsPolicy>,
) -> Result<Vec<Author>> {
    let source = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| fs_error::read_failed(&source, e.to_string()))?;
    let (front_matter, _body) = parse_front_matter_and_body(&content, &source)?;
    let authors = resolver.resolve(&front_matter)?;
    if let Some(policy) = inline_policy {
        report_inline_authors(&authors, policy, &source)?;
    }
    Ok(authors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogAuthorsError;
    use tempfile::TempDir;

    fn write(dir: &Path, file: &str, content: &str) -> PathBuf {
        let path = dir.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    #[test]
    fn test_collect_posts_walks_directories() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(temp.path(), "b.md", "");
        write(temp.path(), "nested/a.mdx", "");
        write(temp.path(), "authors.yml", "");
        write(temp.path(), "image.png", "");

        let posts = collect_posts(&[temp.path().to_path_buf()]).expect("posts should be collected");
        let names: Vec<_> = posts
            .iter()
            .map(|p| p.strip_prefix(temp.path()).expect("post should be inside temp dir").to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("b.md"), PathBuf::from("nested/a.mdx")]);
    }

    #[test]
    fn test_collect_posts_missing_input() {
        let err = collect_posts(&[PathBuf::from("/definitely/not/here.md")]).unwrap_err();
        assert!(matches!(err, BlogAuthorsError::FileNotFound { .. }));
    }

    #[test]
    fn test_resolve_post_reads_front_matter() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let post = write(
            temp.path(),
            "post.md",
            "---\nauthor: Sébastien Lorber\nauthorImageURL: /img/slorber.png\n---\n\nHello",
        );
        let resolver = AuthorResolver::new(None, "/blog/");
        let authors = resolve_post(&resolver, &post, None).expect("post should resolve");
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name(), Some("Sébastien Lorber"));
        assert_eq!(authors[0].image_url(), Some("/blog/img/slorber.png"));
    }

    #[test]
    fn test_resolve_post_applies_inline_policy() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let post = write(temp.path(), "post.md", "---\nauthors:\n  - name: Alexey\n---\n");
        let resolver = AuthorResolver::new(None, "/");
        assert!(resolve_post(&resolver, &post, None).is_ok());
        let err = resolve_post(&resolver, &post, Some(InlineAuthorsPolicy::Throw)).unwrap_err();
        assert!(matches!(err, BlogAuthorsError::InlineAuthorsNotAllowed { .. }));
    }
}
