//! Markdown front matter.
//!
//! A document opens with a metadata block fenced by `+++` (TOML) or `---`
//! (YAML); everything after the closing fence is the body. TOML dates are
//! turned into plain strings before the metadata reaches serde.

use serde_json::{Map, Value};
use thiserror::Error;

const TOML_FENCE: &str = "+++";
const YAML_FENCE: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    Toml,
    Yaml,
}

impl FrontMatterFormat {
    fn fence(self) -> &'static str {
        match self {
            FrontMatterFormat::Toml => TOML_FENCE,
            FrontMatterFormat::Yaml => YAML_FENCE,
        }
    }
}

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("document does not start with a +++ or --- fence")]
    MissingFence,

    #[error("front matter is not closed by a matching fence")]
    Unterminated,

    #[error("TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter must be a table of keys")]
    NotATable,
}

/// Metadata and body of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub format: FrontMatterFormat,
    pub data: Map<String, Value>,
    pub body: String,
}

pub fn parse_front_matter(source: &str) -> Result<FrontMatter, FrontMatterError> {
    let source = source.trim_start_matches('\u{feff}');
    let mut lines = source.split_inclusive('\n');

    let first = lines.next().ok_or(FrontMatterError::MissingFence)?;
    let format = match first.trim_end() {
        TOML_FENCE => FrontMatterFormat::Toml,
        YAML_FENCE => FrontMatterFormat::Yaml,
        _ => return Err(FrontMatterError::MissingFence),
    };

    let mut meta = String::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == format.fence() {
            closed = true;
            break;
        }
        meta.push_str(line);
    }
    if !closed {
        return Err(FrontMatterError::Unterminated);
    }
    let body: String = lines.collect();

    let data = match format {
        FrontMatterFormat::Toml => {
            let table: toml::Table = toml::from_str(&meta)?;
            toml_to_json(toml::Value::Table(table))
        }
        FrontMatterFormat::Yaml => {
            if meta.trim().is_empty() {
                Value::Object(Map::new())
            } else {
                serde_yaml::from_str(&meta)?
            }
        }
    };

    let Value::Object(data) = data else {
        return Err(FrontMatterError::NotATable);
    };

    Ok(FrontMatter {
        format,
        data,
        body: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => match dt.date {
            Some(date) if dt.time.is_none() => Value::String(date.to_string()),
            _ => Value::String(dt.to_string()),
        },
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_front_matter_with_bare_date() {
        let doc = "+++\ntitle = \"Hello\"\npublish_date = 2024-03-01\ntags = [\"a\", \"b\"]\n+++\n\nBody text.\n";
        let fm = parse_front_matter(doc).unwrap();
        assert_eq!(fm.format, FrontMatterFormat::Toml);
        assert_eq!(fm.data["title"], "Hello");
        assert_eq!(fm.data["publish_date"], "2024-03-01");
        assert_eq!(fm.data["tags"][1], "b");
        assert_eq!(fm.body, "Body text.\n");
    }

    #[test]
    fn test_yaml_front_matter() {
        let doc = "---\ntitle: Launch\npublishDate: 2023-11-20\nfeatured: true\n---\n# Heading\n";
        let fm = parse_front_matter(doc).unwrap();
        assert_eq!(fm.format, FrontMatterFormat::Yaml);
        assert_eq!(fm.data["publishDate"], "2023-11-20");
        assert_eq!(fm.data["featured"], true);
        assert_eq!(fm.body, "# Heading\n");
    }

    #[test]
    fn test_missing_and_unterminated_fences() {
        assert!(matches!(
            parse_front_matter("# just markdown"),
            Err(FrontMatterError::MissingFence)
        ));
        assert!(matches!(
            parse_front_matter("+++\ntitle = \"x\"\n"),
            Err(FrontMatterError::Unterminated)
        ));
    }

    #[test]
    fn test_yaml_scalar_is_not_a_table() {
        assert!(matches!(
            parse_front_matter("---\njust a string\n---\n"),
            Err(FrontMatterError::NotATable)
        ));
    }
}
