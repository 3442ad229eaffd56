use std::fmt::Formatter;

use crate::domain::{letters_only, reject};
use crate::errors::{Field, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    /// returns a new instance of CityName when the input holds no punctuation, whitespace or digit
    pub fn parse(city: String) -> Result<CityName, ValidationError> {
        if letters_only(&city) {
            Ok(Self(city))
        } else {
            Err(reject(Field::City, city))
        }
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
