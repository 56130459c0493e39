//! Error types for syml documents.

use thiserror::Error;

/// Result type alias for syml operations.
pub type Result<T> = std::result::Result<T, SymlError>;

/// Errors that can occur while loading, decoding or encoding a document.
#[derive(Debug, Error)]
pub enum SymlError {
    /// A section's body failed to decode, or a value failed to encode into a
    /// section. Carries the section's name and the offset at which its body
    /// started in the source text (`None` for sections built in memory).
    #[error("error in section '{name}'[{}]: {source}", display_index(.index))]
    Section {
        name: String,
        index: Option<usize>,
        #[source]
        source: serde_yaml::Error,
    },

    /// A lookup by name found no section.
    #[error("no section named '{name}'")]
    MissingSection { name: String },

    /// Non-empty document text contained no `[Name]` header lines.
    #[error("document text contains no section headers")]
    NoSections,
}

/// Sections created in memory have no source offset; keep the original
/// format's `-1` sentinel in the message.
fn display_index(index: &Option<usize>) -> i64 {
    match index {
        Some(offset) => *offset as i64,
        None => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_error_message_names_section_and_offset() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("x: [oops").unwrap_err();
        let err = SymlError::Section {
            name: "Contact".to_string(),
            index: Some(10),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("error in section 'Contact'[10]:"));
    }

    #[test]
    fn test_in_memory_section_error_uses_sentinel_offset() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("x: [unterminated").unwrap_err();
        let err = SymlError::Section {
            name: "Home".to_string(),
            index: None,
            source,
        };
        assert!(err.to_string().contains("'Home'[-1]"));
    }

    #[test]
    fn test_missing_section_message() {
        let err = SymlError::MissingSection {
            name: "Nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "no section named 'Nowhere'");
    }
}
