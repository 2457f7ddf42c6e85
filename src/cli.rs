//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::resolver::InlineAuthorsPolicy;

/// blog-authors - blog post author resolver
///
/// Validate a blog's authors map and resolve the authors of its posts.
#[derive(Parser, Debug)]
#[command(
    name = "blog-authors",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve and validate blog post authors",
    long_about = "blog-authors validates a blog's authors map file (authors.yml / authors.json) \
                  and resolves the authors declared in blog post front matter, either inline or \
                  by key into the authors map.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  blog-authors validate --content-dir blog\n    \
                  blog-authors resolve blog/2021-08-26-welcome.md\n    \
                  blog-authors resolve blog --format yaml --on-inline-authors throw"
)]
pub struct Cli {
    /// Configuration file (defaults to ./blog-authors.yaml when present)
    #[arg(long, short = 'c', global = true, env = "BLOG_AUTHORS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the authors map file
    Validate(ValidateArgs),

    /// Resolve the authors of blog posts
    Resolve(ResolveArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for machine readable results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Options locating the authors map; each overrides the config file
#[derive(Args, Debug, Clone, Default)]
pub struct AuthorsMapArgs {
    /// Blog content directory
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Localized content directory, searched before the content directory
    #[arg(long, value_name = "DIR")]
    pub localized_dir: Option<PathBuf>,

    /// Authors map file, relative to the content directory
    #[arg(long, value_name = "PATH")]
    pub authors_map_path: Option<PathBuf>,

    /// Route under which author pages are generated
    #[arg(long, value_name = "ROUTE", conflicts_with = "no_author_pages")]
    pub authors_base_route_path: Option<String>,

    /// Do not compute author page permalinks
    #[arg(long)]
    pub no_author_pages: bool,

    /// Site base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate blog/authors.yml:\n    blog-authors validate\n\n\
                  Validate a JSON authors map:\n    blog-authors validate --authors-map-path authors.json\n\n\
                  Print the normalized authors map:\n    blog-authors validate --print --format yaml")]
pub struct ValidateArgs {
    #[command(flatten)]
    pub authors_map: AuthorsMapArgs,

    /// Print the normalized authors map
    #[arg(long)]
    pub print: bool,

    /// Output format used with --print
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve one post:\n    blog-authors resolve blog/2021-08-26-welcome.md\n\n\
                  Resolve every post of a directory:\n    blog-authors resolve blog\n\n\
                  Fail on inline authors:\n    blog-authors resolve blog --on-inline-authors throw")]
pub struct ResolveArgs {
    /// Blog post files (.md, .mdx) or directories containing them
    #[arg(required = true, num_args = 1.., value_name = "POST")]
    pub posts: Vec<PathBuf>,

    #[command(flatten)]
    pub authors_map: AuthorsMapArgs,

    /// What to do with inline authors when an authors map exists
    #[arg(long, value_enum)]
    pub on_inline_authors: Option<InlineAuthorsPolicy>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
