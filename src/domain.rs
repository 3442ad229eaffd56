use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::errors::{Field, ValidationError};

mod city_name;
mod person;
mod person_email;
mod person_name;
mod phone_number;

pub use city_name::CityName;
pub use person::{Person, PersonRecord};
pub use person_email::PersonEmail;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;

// ASCII punctuation, ASCII whitespace (vertical tab and form feed included) and decimal digits
static NOT_LETTERS: Lazy<HashSet<char>> = Lazy::new(|| {
    let punctuation = (0u8..=127).map(char::from).filter(char::is_ascii_punctuation);
    let whitespace = [' ', '\t', '\n', '\r', '\x0b', '\x0c'];
    let digits = '0'..='9';

    punctuation.chain(whitespace).chain(digits).collect()
});

/// true when the text holds no punctuation, whitespace or digit
pub(crate) fn letters_only(text: &str) -> bool {
    !text.chars().any(|char| NOT_LETTERS.contains(&char))
}

/// builds the error for a rejected value and records it
pub(crate) fn reject(field: Field, value: String) -> ValidationError {
    tracing::debug!(field = %field, value = %value, "Rejected person field");
    ValidationError::new(field, value)
}
