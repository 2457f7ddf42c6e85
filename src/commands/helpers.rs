//! Command helper utilities

use std::path::Path;

use serde::Serialize;

use crate::cli::{AuthorsMapArgs, OutputFormat};
use crate::config::{BlogAuthorsConfig, load_config};
use crate::error::{Result, fs as fs_error};

/// Resolve the working directory
pub fn current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir()
        .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {e}")))
}

/// Load the config file, then apply command line overrides on top
pub fn load_effective_config(
    config_path: Option<&Path>,
    args: &AuthorsMapArgs,
) -> Result<BlogAuthorsConfig> {
    let working_dir = current_dir()?;
    let mut config = load_config(config_path, &working_dir)?;
    apply_overrides(&mut config, args, &working_dir);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut BlogAuthorsConfig, args: &AuthorsMapArgs, working_dir: &Path) {
    if let Some(content_dir) = &args.content_dir {
        config.content_dir = working_dir.join(content_dir);
    }
    if let Some(localized_dir) = &args.localized_dir {
        config.localized_dir = Some(working_dir.join(localized_dir));
    }
    if let Some(authors_map_path) = &args.authors_map_path {
        config.authors_map_path.clone_from(authors_map_path);
    }
    if args.no_author_pages {
        config.authors_base_route_path = None;
    } else if let Some(route) = &args.authors_base_route_path {
        config.authors_base_route_path = Some(route.clone());
    }
    if let Some(base_url) = &args.base_url {
        config.base_url.clone_from(base_url);
    }
}

/// Serialize a command result for stdout
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| fs_error::io_error(format!("Failed to serialize output: {e}"))),
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| fs_error::io_error(format!("Failed to serialize output: {e}"))),
    }
}
