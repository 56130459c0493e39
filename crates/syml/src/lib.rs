//! # syml
//!
//! Sectioned YAML documents: a single text blob made of named regions, each
//! introduced by a `[Name]` header line and holding a YAML body. Each section
//! (de)serializes independently into a typed value, and per-field
//! descriptions registered on the type are re-emitted as `#` comment lines on
//! every save, so human-readable annotations survive rewrite cycles.
//!
//! ```text
//! [Contact]
//! name: Max Mustermann
//! # Age of the contact
//! age: 18
//!
//! [Home]
//! address: Musterstraße 12
//! city: Munich
//! ```
//!
//! ## Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use syml::{Document, DocumentSection, FieldDescriptions};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Contact {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl DocumentSection for Contact {
//!     const NAME: &'static str = "Contact";
//!
//!     fn field_descriptions() -> FieldDescriptions {
//!         FieldDescriptions::new(&[("age", "Age of the contact")])
//!     }
//! }
//!
//! let mut document = Document::new();
//! document.set(&Contact { name: "Max".into(), age: 18 }).unwrap();
//!
//! let text = document.dump();
//! assert!(text.contains("# Age of the contact\nage: 18"));
//!
//! let mut reloaded = Document::new();
//! reloaded.load(&text).unwrap();
//! assert_eq!(reloaded.get::<Contact>().unwrap().age, 18);
//! ```

mod comments;
mod document;
mod error;
mod section;

pub use comments::{CommentInjector, FieldDescriptions, FieldVisitor, SectionEncoder};
pub use document::Document;
pub use error::{Result, SymlError};
pub use section::{DocumentSection, Section};
