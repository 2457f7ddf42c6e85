//! Command implementations for the blog-authors CLI

pub mod completions;
pub mod helpers;
pub mod resolve;
pub mod validate;
pub mod version;
