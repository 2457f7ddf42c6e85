//! Common test utilities for blog-authors integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Authors map shared by most tests
#[allow(dead_code)]
pub const AUTHORS_YML: &str = r"
slorber:
  name: Sébastien Lorber
  title: Docusaurus maintainer
  url: https://sebastienlorber.com
  image_url: /img/slorber.png
  page: true
yangshun:
  name: Yangshun Tay
  title: Front End Engineer @ Facebook
  imageURL: https://github.com/yangshun.png
";

/// A site directory for integration tests
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a site whose `blog/authors.yml` is [`AUTHORS_YML`]
    #[allow(dead_code)]
    pub fn with_authors_map() -> Self {
        let workspace = Self::new();
        workspace.write_file("blog/authors.yml", AUTHORS_YML);
        workspace
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a blog post with the given front matter
    #[allow(dead_code)]
    pub fn write_post(&self, path: &str, front_matter: &str) {
        self.write_file(path, &format!("---\n{front_matter}\n---\n\nPost content\n"));
    }

    /// Command running the blog-authors binary inside the site
    pub fn cmd(&self) -> Command {
        let mut cmd = blog_authors_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The blog-authors binary, isolated from the caller's environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn blog_authors_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blog-authors").expect("binary should be built");
    cmd.env_remove("BLOG_AUTHORS_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Parse command stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_write_post() {
        let workspace = TestWorkspace::new();
        workspace.write_post("blog/post.md", "authors: slorber");
        let content = std::fs::read_to_string(workspace.path.join("blog/post.md"))
            .expect("Failed to read file");
        assert!(content.starts_with("---\nauthors: slorber\n---\n"));
    }
}
