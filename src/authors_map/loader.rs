//! Load the authors map file from disk
//!
//! The file is looked up in the localized content directory first, then in
//! the default content directory. A missing file is not an error: the blog
//! simply has no authors map, and only referencing an author by key fails
//! later on.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use super::{AuthorsMap, validate_authors_map_input};
use crate::author::{KEY, PAGE};
use crate::error::{Result, authors_map as authors_map_error, fs as fs_error};
use crate::url::normalize_url;

/// Default authors map file name, relative to the content directory
pub const DEFAULT_AUTHORS_MAP_PATH: &str = "authors.yml";

/// Default route under which author pages are generated
pub const DEFAULT_AUTHORS_BASE_ROUTE_PATH: &str = "authors";

/// Content directories of a blog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPaths {
    /// Default content directory
    pub content_path: PathBuf,
    /// Content directory of the current locale, searched first
    pub content_path_localized: Option<PathBuf>,
}

impl ContentPaths {
    pub fn new(content_path: impl Into<PathBuf>) -> Self {
        Self {
            content_path: content_path.into(),
            content_path_localized: None,
        }
    }

    pub fn with_localized(mut self, content_path_localized: impl Into<PathBuf>) -> Self {
        self.content_path_localized = Some(content_path_localized.into());
        self
    }

    /// Directories to search, highest priority first
    fn search_dirs(&self) -> impl Iterator<Item = &Path> {
        self.content_path_localized
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.content_path.as_path()))
    }
}

/// Where to find the authors map and how to route author pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorsMapOptions {
    pub content_paths: ContentPaths,
    /// Relative to a content directory, or absolute
    pub authors_map_path: PathBuf,
    /// Route of author pages; `None` disables author page generation
    pub authors_base_route_path: Option<String>,
}

impl AuthorsMapOptions {
    pub fn new(content_paths: ContentPaths) -> Self {
        Self {
            content_paths,
            authors_map_path: PathBuf::from(DEFAULT_AUTHORS_MAP_PATH),
            authors_base_route_path: Some(format!("/{DEFAULT_AUTHORS_BASE_ROUTE_PATH}")),
        }
    }
}

/// Locate, parse and validate the authors map file.
///
/// Every author of the returned map carries its `key` and a `page` value
/// (`null`, or `{"permalink": ...}` when the author asked for a page).
/// Returns `Ok(None)` when the file does not exist or is empty.
pub fn load_authors_map(options: &AuthorsMapOptions) -> Result<Option<AuthorsMap>> {
    let Some(path) = find_authors_map_file(options) else {
        tracing::debug!(
            authors_map_path = %options.authors_map_path.display(),
            "no authors map file found"
        );
        return Ok(None);
    };

    let Some(content) = read_authors_map_file(&path)? else {
        tracing::debug!(path = %path.display(), "authors map file is empty");
        return Ok(None);
    };

    let authors_map = validate_authors_map_input(&content)?;
    let authors_map = normalize_authors_map(authors_map, options.authors_base_route_path.as_deref());
    check_permalink_collisions(&authors_map)?;

    tracing::info!(
        path = %path.display(),
        authors = authors_map.len(),
        "loaded authors map"
    );
    Ok(Some(authors_map))
}

fn find_authors_map_file(options: &AuthorsMapOptions) -> Option<PathBuf> {
    let authors_map_path = &options.authors_map_path;
    if authors_map_path.is_absolute() {
        return authors_map_path.is_file().then(|| authors_map_path.clone());
    }
    options
        .content_paths
        .search_dirs()
        .map(|dir| dir.join(authors_map_path))
        .find(|candidate| candidate.is_file())
}

/// Parse the file according to its extension; `None` for an empty document
fn read_authors_map_file(path: &Path) -> Result<Option<Value>> {
    let path_display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| fs_error::read_failed(&path_display, e.to_string()))?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let value: Value = match extension.as_deref() {
        Some("yml" | "yaml") => serde_yaml::from_str::<serde_yaml::Value>(&content)
            .map_err(|e| e.to_string())
            .and_then(|yaml| serde_json::to_value(yaml).map_err(|e| e.to_string()))
            .map_err(|reason| authors_map_error::parse_failed(&path_display, reason))?,
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| authors_map_error::parse_failed(&path_display, e.to_string()))?,
        _ => return Err(authors_map_error::unsupported_format(path_display)),
    };

    Ok((!value.is_null()).then_some(value))
}

/// Inject `key` and the resolved `page` into every author
fn normalize_authors_map(mut authors_map: AuthorsMap, authors_base_route_path: Option<&str>) -> AuthorsMap {
    for (key, author) in authors_map.iter_mut() {
        let page = author_page(key, author.get(PAGE), authors_base_route_path);
        author.insert(KEY, key);
        author.insert(PAGE, page);
    }
    authors_map
}

fn author_page(key: &str, page: Option<&Value>, authors_base_route_path: Option<&str>) -> Value {
    let Some(base_route) = authors_base_route_path else {
        return Value::Null;
    };
    let slug = match page {
        None | Some(Value::Null | Value::Bool(false)) => return Value::Null,
        Some(Value::Bool(true)) => kebab_case(key),
        Some(Value::Object(page)) => match page.get("permalink").and_then(Value::as_str) {
            Some(permalink) => permalink.to_string(),
            None => kebab_case(key),
        },
        Some(other) => {
            tracing::warn!(author = key, page = %other, "ignoring invalid author page setting");
            return Value::Null;
        }
    };
    json!({ "permalink": normalize_url(&["/", base_route, &slug]) })
}

fn check_permalink_collisions(authors_map: &AuthorsMap) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (key, author) in authors_map.iter() {
        let Some(permalink) = author.permalink() else {
            continue;
        };
        if let Some(first_key) = seen.insert(permalink, key) {
            return Err(authors_map_error::permalink_collision(permalink, first_key, key));
        }
    }
    Ok(())
}

/// `SebastienLorber` / `sebastien_lorber` -> `sebastien-lorber`
fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut previous: Option<char> = None;
    for c in input.chars() {
        if c.is_alphanumeric() {
            let word_boundary = c.is_uppercase() && previous.is_some_and(|p| p.is_lowercase() || p.is_numeric());
            if word_boundary && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
        previous = Some(c);
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogAuthorsError;
    use tempfile::TempDir;

    fn options_for(dir: &Path, file: &str) -> AuthorsMapOptions {
        AuthorsMapOptions {
            authors_map_path: PathBuf::from(file),
            ..AuthorsMapOptions::new(ContentPaths::new(dir))
        }
    }

    fn write(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).expect("Failed to write file");
    }

    #[test]
    fn test_load_yaml_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(
            temp.path(),
            "authors.yml",
            "slorber:\n  name: Sébastien Lorber\n  image_url: /img/slorber.png\nyangshun:\n  name: Yangshun Tay\n",
        );
        let authors_map = load_authors_map(&options_for(temp.path(), "authors.yml"))
            .expect("load should succeed")
            .expect("authors map should exist");
        assert_eq!(authors_map.keys().collect::<Vec<_>>(), vec!["slorber", "yangshun"]);
        let slorber = authors_map.get("slorber").expect("slorber should exist");
        assert_eq!(slorber.key(), Some("slorber"));
        assert_eq!(slorber.image_url(), Some("/img/slorber.png"));
        assert_eq!(slorber.get(PAGE), Some(&Value::Null));
    }

    #[test]
    fn test_load_json_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(
            temp.path(),
            "authors.json",
            r#"{"slorber": {"name": "Sébastien Lorber", "page": true}}"#,
        );
        let authors_map = load_authors_map(&options_for(temp.path(), "authors.json"))
            .expect("load should succeed")
            .expect("authors map should exist");
        let slorber = authors_map.get("slorber").expect("slorber should exist");
        assert_eq!(slorber.permalink(), Some("/authors/slorber"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let result = load_authors_map(&options_for(temp.path(), "authors_does_not_exist.yml"))
            .expect("load should succeed");
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_file_is_no_authors_map() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(temp.path(), "authors.yml", "\n# nothing here\n");
        let result = load_authors_map(&options_for(temp.path(), "authors.yml")).expect("load should succeed");
        assert!(result.is_none());
    }

    #[test]
    fn test_localized_file_wins() {
        let default_dir = TempDir::new().expect("Failed to create temp directory");
        let localized_dir = TempDir::new().expect("Failed to create temp directory");
        write(default_dir.path(), "authors.yml", "slorber:\n  name: Sébastien Lorber\n");
        write(localized_dir.path(), "authors.yml", "slorber:\n  name: Sébastien Lorber (fr)\n");
        let options = AuthorsMapOptions::new(
            ContentPaths::new(default_dir.path()).with_localized(localized_dir.path()),
        );
        let authors_map = load_authors_map(&options)
            .expect("load should succeed")
            .expect("authors map should exist");
        assert_eq!(
            authors_map.get("slorber").and_then(|a| a.name()),
            Some("Sébastien Lorber (fr)")
        );
    }

    #[test]
    fn test_falls_back_to_default_dir() {
        let default_dir = TempDir::new().expect("Failed to create temp directory");
        let localized_dir = TempDir::new().expect("Failed to create temp directory");
        write(default_dir.path(), "authors.yml", "slorber:\n  name: Sébastien Lorber\n");
        let options = AuthorsMapOptions::new(
            ContentPaths::new(default_dir.path()).with_localized(localized_dir.path()),
        );
        let authors_map = load_authors_map(&options).expect("load should succeed");
        assert!(authors_map.is_some());
    }

    #[test]
    fn test_absolute_path() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(temp.path(), "team.yaml", "slorber:\n  name: Sébastien Lorber\n");
        let options = AuthorsMapOptions {
            authors_map_path: temp.path().join("team.yaml"),
            ..AuthorsMapOptions::new(ContentPaths::new("/nonexistent"))
        };
        assert!(load_authors_map(&options).expect("load should succeed").is_some());
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(temp.path(), "authors.toml", "[slorber]\nname = 'x'\n");
        let err = load_authors_map(&options_for(temp.path(), "authors.toml")).unwrap_err();
        assert!(matches!(err, BlogAuthorsError::UnsupportedRegistryFormat { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(temp.path(), "authors.yml", "slorber: [unclosed\n");
        let err = load_authors_map(&options_for(temp.path(), "authors.yml")).unwrap_err();
        assert!(matches!(err, BlogAuthorsError::RegistryParseFailed { .. }));
    }

    #[test]
    fn test_validation_errors_propagate() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(temp.path(), "authors.yml", "- slorber\n- yangshun\n");
        let err = load_authors_map(&options_for(temp.path(), "authors.yml")).unwrap_err();
        assert!(matches!(err, BlogAuthorsError::InvalidRegistryShape));
    }

    #[test]
    fn test_author_page_permalinks() {
        let base = Some("/blog/authors");
        assert_eq!(author_page("slorber", None, base), Value::Null);
        assert_eq!(author_page("slorber", Some(&json!(false)), base), Value::Null);
        assert_eq!(
            author_page("SebastienLorber", Some(&json!(true)), base),
            json!({"permalink": "/blog/authors/sebastien-lorber"})
        );
        assert_eq!(
            author_page("slorber", Some(&json!({"permalink": "/seb"})), base),
            json!({"permalink": "/blog/authors/seb"})
        );
        assert_eq!(author_page("slorber", Some(&json!(true)), None), Value::Null);
    }

    #[test]
    fn test_permalink_collision() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write(
            temp.path(),
            "authors.yml",
            "slorber:\n  name: A\n  page:\n    permalink: seb\nseb:\n  name: B\n  page: true\n",
        );
        let err = load_authors_map(&options_for(temp.path(), "authors.yml")).unwrap_err();
        match err {
            BlogAuthorsError::AuthorPagePermalinkCollision {
                permalink,
                first_key,
                second_key,
            } => {
                assert_eq!(permalink, "/authors/seb");
                assert_eq!(first_key, "slorber");
                assert_eq!(second_key, "seb");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("slorber"), "slorber");
        assert_eq!(kebab_case("SebastienLorber"), "sebastien-lorber");
        assert_eq!(kebab_case("jmarcey_2"), "jmarcey-2");
        assert_eq!(kebab_case("Joel Marcey!"), "joel-marcey");
    }
}
