//! Configuration file handling for blog-authors
//!
//! `blog-authors.yaml` is optional. Relative paths inside it are resolved
//! against the directory containing the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::authors_map::loader::{
    DEFAULT_AUTHORS_BASE_ROUTE_PATH, DEFAULT_AUTHORS_MAP_PATH,
};
use crate::authors_map::{AuthorsMapOptions, ContentPaths};
use crate::error::{Result, config as config_error};
use crate::resolver::InlineAuthorsPolicy;
use crate::url::normalize_url;

/// Config filename looked up in the working directory
pub const CONFIG_FILE: &str = "blog-authors.yaml";

/// Default blog content directory
pub const DEFAULT_CONTENT_DIR: &str = "blog";

/// blog-authors configuration (blog-authors.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogAuthorsConfig {
    /// Blog content directory holding posts and the authors map
    pub content_dir: PathBuf,

    /// Content directory of the current locale, searched first
    pub localized_dir: Option<PathBuf>,

    /// Authors map file, relative to the content directory
    pub authors_map_path: PathBuf,

    /// Route of generated author pages; `null` disables them
    pub authors_base_route_path: Option<String>,

    /// Site base URL, prefixed to root-relative author images
    pub base_url: String,

    /// What to do with inline authors when an authors map exists
    pub on_inline_authors: InlineAuthorsPolicy,
}

impl Default for BlogAuthorsConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            localized_dir: None,
            authors_map_path: PathBuf::from(DEFAULT_AUTHORS_MAP_PATH),
            authors_base_route_path: Some(DEFAULT_AUTHORS_BASE_ROUTE_PATH.to_string()),
            base_url: "/".to_string(),
            on_inline_authors: InlineAuthorsPolicy::default(),
        }
    }
}

impl BlogAuthorsConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Check values that parse fine but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(config_error::invalid("base_url must not be empty"));
        }
        if self.authors_map_path.as_os_str().is_empty() {
            return Err(config_error::invalid("authors_map_path must not be empty"));
        }
        if self
            .authors_base_route_path
            .as_deref()
            .is_some_and(|route| route.trim().is_empty())
        {
            return Err(config_error::invalid(
                "authors_base_route_path must not be empty (use null to disable author pages)",
            ));
        }
        Ok(())
    }

    /// Make relative directories relative to `base_dir`
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        self.content_dir = base_dir.join(&self.content_dir);
        self.localized_dir = self.localized_dir.map(|dir| base_dir.join(dir));
        self
    }

    /// Options for loading the authors map. Author page routes live under
    /// the site base URL.
    pub fn authors_map_options(&self) -> AuthorsMapOptions {
        let mut content_paths = ContentPaths::new(&self.content_dir);
        if let Some(localized_dir) = &self.localized_dir {
            content_paths = content_paths.with_localized(localized_dir);
        }
        AuthorsMapOptions {
            content_paths,
            authors_map_path: self.authors_map_path.clone(),
            authors_base_route_path: self
                .authors_base_route_path
                .as_deref()
                .map(|route| normalize_url(&["/", &self.base_url, route])),
        }
    }
}

/// Load configuration.
///
/// An explicit `config_path` must exist. Without one, `blog-authors.yaml` in
/// `working_dir` is used when present, otherwise defaults apply.
pub fn load_config(config_path: Option<&Path>, working_dir: &Path) -> Result<BlogAuthorsConfig> {
    let path = match config_path {
        Some(path) if !path.is_file() => {
            return Err(config_error::not_found(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = working_dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!(dir = %working_dir.display(), "no config file, using defaults");
                return Ok(BlogAuthorsConfig::default().resolve_paths(working_dir));
            }
            candidate
        }
    };

    let path_display = path.display().to_string();
    let content =
        fs::read_to_string(&path).map_err(|e| config_error::read_failed(&path_display, e.to_string()))?;
    let config = BlogAuthorsConfig::from_yaml(&content).map_err(|e| match e {
        crate::error::BlogAuthorsError::ConfigParseFailed { reason, .. } => {
            config_error::parse_failed(&path_display, reason)
        }
        other => other,
    })?;
    config.validate()?;

    tracing::debug!(path = %path_display, "loaded config");
    let base_dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| working_dir.to_path_buf(), Path::to_path_buf);
    Ok(config.resolve_paths(&base_dir))
}
