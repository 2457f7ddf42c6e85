//! Version command implementation

use crate::authors_map::loader::{DEFAULT_AUTHORS_BASE_ROUTE_PATH, DEFAULT_AUTHORS_MAP_PATH};
use crate::config::{CONFIG_FILE, DEFAULT_CONTENT_DIR};
use crate::error::Result;

/// Authors map extensions the loader understands
const AUTHORS_MAP_FORMATS: &[&str] = &["yml", "yaml", "json"];

/// Print the version together with the defaults this build uses
pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

fn version_report() -> String {
    format!(
        "{name} {version}\n\n\
         Defaults:\n  \
         Config file: {CONFIG_FILE}\n  \
         Authors map: {DEFAULT_CONTENT_DIR}/{DEFAULT_AUTHORS_MAP_PATH} ({formats})\n  \
         Author pages: /{DEFAULT_AUTHORS_BASE_ROUTE_PATH}/<key>\n\n\
         Build info:\n  \
         Profile: {profile}\n",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        formats = AUTHORS_MAP_FORMATS.join(", "),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_names_defaults() {
        let report = version_report();
        assert!(report.starts_with(&format!("blog-authors {}", env!("CARGO_PKG_VERSION"))));
        assert!(report.contains("Config file: blog-authors.yaml"));
        assert!(report.contains("Authors map: blog/authors.yml (yml, yaml, json)"));
        assert!(report.contains("Author pages: /authors/<key>"));
    }
}
