//! Parse blog post front matter and look up author-related fields.

use serde_json::{Map, Value};

use crate::error::{Result, author as author_error};

/// The front matter field declaring blog post authors
pub const AUTHORS: &str = "authors";

/// Legacy single-author front matter fields.
///
/// Each field has historical spellings; [`LegacyAuthorField::aliases`] lists
/// them camelCase first, which is the lookup priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyAuthorField {
    Name,
    Title,
    Url,
    ImageUrl,
}

impl LegacyAuthorField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Title, Self::Url, Self::ImageUrl];

    /// Front matter spellings, highest priority first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["author"],
            Self::Title => &["authorTitle", "author_title"],
            Self::Url => &["authorURL", "author_url"],
            Self::ImageUrl => &["authorImageURL", "author_image_url"],
        }
    }

    /// The author record field this legacy field maps to
    pub fn author_field(self) -> &'static str {
        match self {
            Self::Name => crate::author::NAME,
            Self::Title => crate::author::TITLE,
            Self::Url => crate::author::URL,
            Self::ImageUrl => crate::author::IMAGE_URL,
        }
    }
}

/// Front matter of a single blog post.
///
/// Fields set to `null` (e.g. an empty `authors:` line) count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Map<String, Value>,
}

impl FrontMatter {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build front matter from an already parsed value; `None` unless it is a mapping
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            Value::Null => Some(Self::default()),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    /// The raw `authors` declaration, if any
    pub fn authors(&self) -> Option<&Value> {
        self.get(AUTHORS)
    }

    /// Look up a legacy field through its aliases, camelCase first.
    /// Returns the spelling that matched together with its value.
    pub fn legacy_field(&self, field: LegacyAuthorField) -> Option<(&'static str, &Value)> {
        field
            .aliases()
            .iter()
            .find_map(|alias| self.get(alias).map(|value| (*alias, value)))
    }

    /// Every legacy spelling present, in alias table order
    pub fn legacy_fields_present(&self) -> Vec<&'static str> {
        LegacyAuthorField::ALL
            .iter()
            .flat_map(|field| field.aliases().iter().copied())
            .filter(|alias| self.get(alias).is_some())
            .collect()
    }
}

/// Split a document into its YAML front matter (between a leading `---` line
/// and the next `---` line) and body.
///
/// A document without front matter yields empty front matter and the whole
/// content as body. `source_path` is only used in error messages.
pub fn parse_front_matter_and_body(content: &str, source_path: &str) -> Result<(FrontMatter, String)> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some("---") {
        return Ok((FrontMatter::default(), content.to_string()));
    }
    let Some(end_idx) = lines[1..].iter().position(|l| l.trim() == "---") else {
        return Err(author_error::front_matter_parse_failed(
            source_path,
            "missing closing '---' delimiter",
        ));
    };
    let end_idx = end_idx + 1;
    let front_matter_str = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    if front_matter_str.trim().is_empty() {
        return Ok((FrontMatter::default(), body));
    }

    let value: Value = serde_yaml::from_str(&front_matter_str)
        .map_err(|e| author_error::front_matter_parse_failed(source_path, e.to_string()))?;
    let front_matter = FrontMatter::from_value(value).ok_or_else(|| {
        author_error::front_matter_parse_failed(source_path, "front matter must be a mapping")
    })?;
    Ok((front_matter, body))
}
