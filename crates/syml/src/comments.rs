//! Comment-aware YAML encoding.
//!
//! `serde_yaml` exposes no pre-field-emission hook, so the encoder works on
//! the value tree instead: a value is serialized to a [`serde_yaml::Value`],
//! and a top-level mapping is emitted entry by entry, giving every registered
//! [`FieldVisitor`] a chance to write output immediately before each entry.
//! Emitting a block mapping one entry at a time produces the same bytes as
//! emitting it whole, so a visitor that writes nothing leaves the output
//! identical to plain `serde_yaml::to_string`.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Per-type table mapping emitted field names to human-readable descriptions.
///
/// Keys are the names as they appear in the emitted YAML (after any serde
/// renaming), not the Rust field identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDescriptions {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldDescriptions {
    /// Build a table from static `(field, description)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        FieldDescriptions { entries }
    }

    /// Look up the description for an emitted field name.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, description)| *description)
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hook invoked at each top-level field boundary during encoding.
///
/// Visitors run in registration order and may append text (comment lines)
/// that will appear immediately above the field's mapping entry. They must
/// not emit anything that is not a YAML comment or blank line, or the encoded
/// body would change shape.
pub trait FieldVisitor {
    /// Called with the emitted field name just before its entry is written.
    fn enter_field(&self, name: &str, out: &mut String);
}

/// A [`FieldVisitor`] that writes `# <description>` above every field present
/// in its description table. Fields without a description are left alone.
pub struct CommentInjector<'a> {
    descriptions: &'a FieldDescriptions,
}

impl<'a> CommentInjector<'a> {
    pub fn new(descriptions: &'a FieldDescriptions) -> Self {
        CommentInjector { descriptions }
    }
}

impl FieldVisitor for CommentInjector<'_> {
    fn enter_field(&self, name: &str, out: &mut String) {
        if let Some(description) = self.descriptions.get(name) {
            out.push_str("# ");
            out.push_str(description);
            out.push('\n');
        }
    }
}

/// YAML encoder carrying an ordered list of field visitors.
#[derive(Default)]
pub struct SectionEncoder<'a> {
    visitors: Vec<&'a dyn FieldVisitor>,
}

impl<'a> SectionEncoder<'a> {
    pub fn new() -> Self {
        SectionEncoder {
            visitors: Vec::new(),
        }
    }

    /// Append a visitor to the pipeline. Visitors run in the order added.
    pub fn with_visitor(mut self, visitor: &'a dyn FieldVisitor) -> Self {
        self.visitors.push(visitor);
        self
    }

    /// Encode a value to YAML text, invoking the visitor pipeline at each
    /// top-level field boundary.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying serializer (unrepresentable
    /// values, non-string keys where strings are required, etc.).
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, serde_yaml::Error> {
        match serde_yaml::to_value(value)? {
            Value::Mapping(mapping) => self.encode_mapping(mapping),
            other => serde_yaml::to_string(&other),
        }
    }

    fn encode_mapping(&self, mapping: Mapping) -> Result<String, serde_yaml::Error> {
        // An empty mapping has no entries to split on; emit it whole ("{}").
        if mapping.is_empty() {
            return serde_yaml::to_string(&Value::Mapping(mapping));
        }
        let mut out = String::new();
        for (key, value) in mapping {
            if let Some(name) = key.as_str() {
                for visitor in &self.visitors {
                    visitor.enter_field(name, &mut out);
                }
            }
            let mut entry = Mapping::new();
            entry.insert(key, value);
            out.push_str(&serde_yaml::to_string(&Value::Mapping(entry))?);
        }
        Ok(out)
    }
}
