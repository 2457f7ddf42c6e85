//! blog-authors - blog post author resolver
//!
//! Validates a blog's authors map and resolves the authors declared in blog
//! post front matter.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use blog_authors::cli::{Cli, Commands};
use blog_authors::commands;

/// Log to stderr so stdout stays machine readable. `RUST_LOG` wins over `-v`.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(config, args),
        Commands::Resolve(args) => commands::resolve::run(config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
