use std::fmt::Formatter;

use crate::domain::{letters_only, reject};
use crate::errors::{Field, ValidationError};

/// A given name or a family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// returns a new instance of PersonName when the input holds no punctuation, whitespace or digit
    pub fn parse(name: String, field: Field) -> Result<PersonName, ValidationError> {
        if letters_only(&name) {
            Ok(Self(name))
        } else {
            Err(reject(field, name))
        }
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
