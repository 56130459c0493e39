//! Example section types for a small address-book document.

use std::fmt;

use serde::{Deserialize, Serialize};
use syml::{DocumentSection, FieldDescriptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub age: u32,
    pub locale: Locale,
}

impl DocumentSection for Contact {
    const NAME: &'static str = "Contact";

    fn field_descriptions() -> FieldDescriptions {
        FieldDescriptions::new(&[
            ("name", "Name of the contact"),
            ("age", "Age of the contact"),
            ("locale", "Locale of the contact"),
        ])
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Contact] Name: {} Age: {} Locale: {:?}",
            self.name, self.age, self.locale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Locale {
    German,
    English,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    pub address: String,
    pub city: String,
}

impl DocumentSection for Home {
    const NAME: &'static str = "Home";
}

impl fmt::Display for Home {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Home] Address: {} City: {}", self.address, self.city)
    }
}
