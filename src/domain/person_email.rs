use std::fmt::Formatter;

use crate::domain::reject;
use crate::errors::{Field, ValidationError};

/// The key a person is filed under. Only the presence of '@' or '.' is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonEmail(String);

impl PersonEmail {
    /// returns a new instance of PersonEmail when the input holds '@' or '.'
    pub fn parse(email: String) -> Result<PersonEmail, ValidationError> {
        match email.contains(['@', '.']) {
            true => Ok(Self(email)),
            false => Err(reject(Field::Email, email)),
        }
    }
}

impl std::fmt::Display for PersonEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for PersonEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
