//! Validate command implementation

use std::path::Path;

use console::style;

use super::helpers::{load_effective_config, render};
use crate::authors_map::{AuthorsMap, load_authors_map};
use crate::cli::ValidateArgs;
use crate::error::{Result, fs as fs_error};

/// Run validate command
pub fn run(config_path: Option<&Path>, args: ValidateArgs) -> Result<()> {
    let config = load_effective_config(config_path, &args.authors_map)?;
    let options = config.authors_map_options();

    let Some(authors_map) = load_authors_map(&options)? else {
        let expected = options.content_paths.content_path.join(&options.authors_map_path);
        return Err(fs_error::not_found(expected.display().to_string()));
    };

    if args.print {
        println!("{}", render(&authors_map, args.format)?);
    } else {
        print!("{}", summary(&authors_map));
    }
    Ok(())
}

/// One line per author, with its page permalink when it has one
fn summary(authors_map: &AuthorsMap) -> String {
    let mut out = format!(
        "{} Authors map is valid ({} author{})\n",
        style("✓").green().bold(),
        authors_map.len(),
        if authors_map.len() == 1 { "" } else { "s" }
    );
    for (key, author) in authors_map.iter() {
        let name = author.name().unwrap_or("-");
        match author.permalink() {
            Some(permalink) => out.push_str(&format!(
                "  {} {} {}\n",
                style(key).cyan().bold(),
                name,
                style(permalink).dim()
            )),
            None => out.push_str(&format!("  {} {}\n", style(key).cyan().bold(), name)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::Author;
    use serde_json::json;

    #[test]
    fn test_summary_lists_authors() {
        console::set_colors_enabled(false);
        let mut authors_map = AuthorsMap::new();
        let slorber: Author = serde_json::from_value(json!({
            "name": "Sébastien Lorber",
            "key": "slorber",
            "page": {"permalink": "/authors/slorber"},
        }))
        .expect("author should deserialize");
        let yangshun: Author = serde_json::from_value(json!({"imageURL": "/img/y.png", "key": "yangshun"}))
            .expect("author should deserialize");
        authors_map.insert("slorber", slorber);
        authors_map.insert("yangshun", yangshun);

        let text = summary(&authors_map);
        assert!(text.contains("Authors map is valid (2 authors)"));
        assert!(text.contains("slorber Sébastien Lorber /authors/slorber"));
        assert!(text.contains("yangshun -"));
    }
}
