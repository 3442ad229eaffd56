use std::fmt::Formatter;

use crate::domain::reject;
use crate::errors::{Field, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// returns a new instance of PhoneNumber when the input holds at least one digit or '+'
    pub fn parse(phone: String) -> Result<PhoneNumber, ValidationError> {
        let has_dial_character = phone.chars().any(|char| char.is_ascii_digit() || char == '+');

        match has_dial_character {
            true => Ok(Self(phone)),
            false => Err(reject(Field::Phone, phone)),
        }
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
