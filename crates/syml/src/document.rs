//! The document model: header splitting, typed access, recomposition.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::comments::{CommentInjector, FieldDescriptions, SectionEncoder};
use crate::error::{Result, SymlError};
use crate::section::{DocumentSection, Section};

/// Matches a `[Name]` header line: optional leading newline, the bracketed
/// name, trailing whitespace, end of line. The match end is where the
/// section body begins.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?\[([^\]]+)\]\s*\r?\n").expect("header pattern is valid"));

/// A header occurrence found while scanning document text. Consumed
/// immediately to build sections, never stored.
struct SectionHeader<'a> {
    name: &'a str,
    start: usize,
    end: usize,
}

type UpdateCallback = Box<dyn FnMut()>;

/// An ordered collection of named YAML sections.
///
/// Sections keep their insertion order: [`Document::dump`] writes them back
/// in the order they were first loaded or set, so repeated load/dump cycles
/// are stable. Names are unique; storing a section under an existing name
/// replaces the previous content in place.
///
/// Not internally synchronized — concurrent mutation must be serialized by
/// the caller.
#[derive(Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
    update_callbacks: Vec<UpdateCallback>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("sections", &self.sections)
            .field("update_callbacks", &self.update_callbacks.len())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Register a callback invoked synchronously after every successful
    /// [`load`](Document::load), [`set`](Document::set) or
    /// [`set_named`](Document::set_named).
    pub fn on_update<F: FnMut() + 'static>(&mut self, callback: F) {
        self.update_callbacks.push(Box::new(callback));
    }

    fn notify_update(&mut self) {
        for callback in &mut self.update_callbacks {
            callback();
        }
    }

    /// Split document text on `[Name]` header lines and store the resulting
    /// sections, replacing any existing sections with the same names.
    ///
    /// Empty or whitespace-only text is a no-op. Bodies of all sections but
    /// the last are trimmed; the last section's body keeps its trailing
    /// whitespace verbatim. When the same name appears twice, the later
    /// occurrence wins.
    ///
    /// The load is transactional: the full section set is built and validated
    /// before the document is touched, so a malformed section leaves the
    /// document exactly as it was. The update notification fires once, after
    /// the commit.
    ///
    /// # Errors
    ///
    /// [`SymlError::NoSections`] when non-empty text contains no header
    /// lines; [`SymlError::Section`] when any section's body is not
    /// well-formed YAML.
    pub fn load(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let headers: Vec<SectionHeader<'_>> = HEADER
            .captures_iter(text)
            .map(|caps| {
                let whole = caps.get(0).expect("match exists");
                SectionHeader {
                    name: caps.get(1).expect("name group exists").as_str(),
                    start: whole.start(),
                    end: whole.end(),
                }
            })
            .collect();
        if headers.is_empty() {
            return Err(SymlError::NoSections);
        }

        let mut incoming: IndexMap<String, Section> = IndexMap::new();
        for (i, header) in headers.iter().enumerate() {
            let body = match headers.get(i + 1) {
                Some(next) => text[header.end..next.start].trim(),
                // The final section keeps trailing content verbatim.
                None => &text[header.end..],
            };
            incoming.insert(
                header.name.to_string(),
                Section {
                    name: header.name.to_string(),
                    yaml_content: body.to_string(),
                    document_index: Some(header.end),
                },
            );
        }
        for section in incoming.values() {
            section.validate()?;
        }

        tracing::debug!(sections = incoming.len(), "loaded document text");
        self.sections.extend(incoming);
        self.notify_update();
        Ok(())
    }

    /// Check that every stored section's body is well-formed YAML.
    ///
    /// # Errors
    ///
    /// Returns the first section's [`SymlError::Section`] failure.
    pub fn validate(&self) -> Result<()> {
        for section in self.sections.values() {
            section.validate()?;
        }
        Ok(())
    }

    /// Recompose the document into a single text blob: each section's header
    /// and body, joined by one blank line, in insertion order. Returns `""`
    /// for an empty document.
    pub fn dump(&self) -> String {
        if self.sections.is_empty() {
            return String::new();
        }
        self.sections
            .values()
            .map(Section::serialized)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Decode the section tagged by `T` into a typed value.
    ///
    /// # Errors
    ///
    /// [`SymlError::MissingSection`] when no section named `T::NAME` exists;
    /// [`SymlError::Section`] when the body does not decode as `T`.
    pub fn get<T: DocumentSection>(&self) -> Result<T> {
        self.get_named(T::NAME)
    }

    /// Decode the section with an explicit name into a typed value.
    ///
    /// # Errors
    ///
    /// Same as [`Document::get`].
    pub fn get_named<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.sections
            .get(name)
            .ok_or_else(|| SymlError::MissingSection {
                name: name.to_string(),
            })?
            .decode()
    }

    /// True when a section tagged by `T` is present. Never decodes.
    pub fn has<T: DocumentSection>(&self) -> bool {
        self.contains(T::NAME)
    }

    /// True when a section with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Borrow a stored section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Encode a value into the section tagged by `T`, emitting `T`'s field
    /// descriptions as comments, and store it (replacing any previous section
    /// of that name).
    ///
    /// # Errors
    ///
    /// [`SymlError::Section`] when the value fails to encode.
    pub fn set<T: DocumentSection>(&mut self, value: &T) -> Result<()> {
        self.set_named(T::NAME, value, T::field_descriptions())
    }

    /// Encode a value into a section with an explicit name, emitting comments
    /// from the supplied description table.
    ///
    /// # Errors
    ///
    /// Same as [`Document::set`].
    pub fn set_named<T: Serialize>(
        &mut self,
        name: &str,
        value: &T,
        descriptions: FieldDescriptions,
    ) -> Result<()> {
        let injector = CommentInjector::new(&descriptions);
        let content = SectionEncoder::new()
            .with_visitor(&injector)
            .encode(value)
            .map_err(|source| SymlError::Section {
                name: name.to_string(),
                index: None,
                source,
            })?;
        self.sections
            .insert(name.to_string(), Section::new(name, content));
        tracing::debug!(section = name, "set section");
        self.notify_update();
        Ok(())
    }

    /// Number of stored sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no sections are stored.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Stored sections, in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }
}
