//! Loading outlines from YAML and JSON.

use crate::{Error, Outline, Result};
use std::path::Path;

impl Outline {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load an outline file, picking the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = OutlineFormat::from_path(path).ok_or_else(|| Error::UnknownFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            OutlineFormat::Yaml => Self::from_yaml_str(&content),
            OutlineFormat::Json => Self::from_json_str(&content),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutlineFormat {
    Yaml,
    Json,
}

impl OutlineFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(OutlineFormat::Yaml),
            "json" => Some(OutlineFormat::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OutlineFormat::from_path(&PathBuf::from("quiz.yaml")),
            Some(OutlineFormat::Yaml)
        );
        assert_eq!(
            OutlineFormat::from_path(&PathBuf::from("quiz.YML")),
            Some(OutlineFormat::Yaml)
        );
        assert_eq!(
            OutlineFormat::from_path(&PathBuf::from("quiz.json")),
            Some(OutlineFormat::Json)
        );
        assert_eq!(OutlineFormat::from_path(&PathBuf::from("quiz.org")), None);
        assert_eq!(OutlineFormat::from_path(&PathBuf::from("quiz")), None);
    }

    #[test]
    fn test_from_json_str() {
        let outline = Outline::from_json_str(
            r#"{"children": [{"heading": "Cat", "children": [{"heading": "Q", "tags": ["100"]}]}]}"#,
        )
        .unwrap();

        assert_eq!(outline.children.len(), 1);
        assert!(outline.children[0].children[0].has_tag("100"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let err = Outline::from_yaml_str("children: [").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_unquoted_property_is_kept_verbatim() {
        let outline = Outline::from_yaml_str(
            "children:\n  - heading: q\n    properties:\n      defaultgrade: 3.00\n      penalty: 0.5\n",
        )
        .unwrap();

        let question = &outline.children[0];
        assert_eq!(question.property("defaultgrade"), Some("3.00"));
        assert_eq!(question.property("penalty"), Some("0.5"));
    }
}
