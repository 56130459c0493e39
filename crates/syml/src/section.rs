//! Sections: the named, independently (de)serializable regions of a document.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::comments::FieldDescriptions;
use crate::error::{Result, SymlError};

/// One named region of a syml document, holding raw YAML text.
///
/// The body is stored as text and only decoded on demand, so a `Section` can
/// transiently hold content that no type decodes — [`Section::validate`]
/// checks well-formedness, and [`Section::decode`] checks shape against a
/// concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The name written in the `[Name]` header line.
    pub name: String,

    /// The YAML body, without the header line.
    pub yaml_content: String,

    /// Offset in the source text where the body began. `None` for sections
    /// constructed in memory; informational only, never used for decoding.
    pub document_index: Option<usize>,
}

impl Section {
    /// Create an in-memory section with no source offset.
    pub fn new(name: impl Into<String>, yaml_content: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            yaml_content: yaml_content.into(),
            document_index: None,
        }
    }

    /// Decode the body into a typed value.
    ///
    /// Keys in the body with no matching field are ignored; naming-convention
    /// mapping is whatever the target type declares via serde attributes
    /// (section types conventionally use `#[serde(rename_all = "camelCase")]`).
    ///
    /// # Errors
    ///
    /// Returns [`SymlError::Section`] wrapping the underlying YAML error when
    /// the body does not decode as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_str(&self.yaml_content).map_err(|source| SymlError::Section {
            name: self.name.clone(),
            index: self.document_index,
            source,
        })
    }

    /// Decode the body into a generic YAML tree.
    ///
    /// # Errors
    ///
    /// Returns [`SymlError::Section`] when the body is not well-formed YAML.
    pub fn decode_value(&self) -> Result<serde_yaml::Value> {
        self.decode()
    }

    /// Check that the body is well-formed YAML, without binding to a type.
    ///
    /// # Errors
    ///
    /// Returns [`SymlError::Section`] when the body is not well-formed YAML.
    pub fn validate(&self) -> Result<()> {
        self.decode_value().map(|_| ())
    }

    /// Render the section back to document form: the `[name]` header line
    /// followed by the body, with surrounding whitespace trimmed.
    pub fn serialized(&self) -> String {
        format!("[{}]\n{}", self.name, self.yaml_content)
            .trim()
            .to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized())
    }
}

/// Binds a type to the name of the document section it (de)serializes.
///
/// This is the document-section tag: types implementing it can be passed to
/// the name-less [`Document::get`](crate::Document::get),
/// [`Document::set`](crate::Document::set) and
/// [`Document::has`](crate::Document::has). Types without it can still use
/// the explicit-name methods.
pub trait DocumentSection: Serialize + DeserializeOwned {
    /// The section name, exactly as written in the `[Name]` header.
    const NAME: &'static str;

    /// Per-field descriptions, emitted as `#` comment lines when the section
    /// is encoded. Defaults to no descriptions.
    fn field_descriptions() -> FieldDescriptions {
        FieldDescriptions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Point {
        x: i64,
        y: i64,
    }

    #[test]
    fn test_decode_typed() {
        let section = Section::new("P", "x: 1\ny: 2");
        let point: Point = section.decode().unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let section = Section::new("P", "x: 1\ny: 2\nz: 3");
        let point: Point = section.decode().unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_decode_failure_names_section_and_offset() {
        let section = Section {
            name: "P".to_string(),
            yaml_content: "x: not-a-number\ny: 2".to_string(),
            document_index: Some(4),
        };
        let err = section.decode::<Point>().unwrap_err();
        match &err {
            SymlError::Section { name, index, .. } => {
                assert_eq!(name, "P");
                assert_eq!(*index, Some(4));
            }
            other => panic!("expected Section error, got {other:?}"),
        }
        assert!(err.to_string().contains("'P'[4]"));
    }

    #[test]
    fn test_validate_accepts_any_shape() {
        assert!(Section::new("S", "x: 1").validate().is_ok());
        assert!(Section::new("S", "- a\n- b").validate().is_ok());
        assert!(Section::new("S", "just a scalar").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_yaml() {
        let err = Section::new("S", "x: [unterminated").validate().unwrap_err();
        assert!(matches!(err, SymlError::Section { .. }));
    }

    #[test]
    fn test_serialized_trims_trailing_whitespace() {
        let section = Section::new("Contact", "name: Max\n\n");
        assert_eq!(section.serialized(), "[Contact]\nname: Max");
        assert_eq!(section.to_string(), section.serialized());
    }
}
