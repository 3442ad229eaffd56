use std::fmt::Formatter;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}", e)?;
    let mut source = e.source();
    while let Some(e) = source {
        writeln!(f, "Caused by: {}", e)?;
        source = e.source();
    }
    Ok(())
}

/// The person field a validation rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surname,
    Phone,
    City,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value:?}")]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: Field, value: String) -> Self {
        Self { field, value }
    }
}

#[derive(thiserror::Error)]
pub enum DirectoryError {
    #[error("Rejected person field")]
    InvalidFormat(#[from] ValidationError),
    #[error("A person with email `{0}` already exists")]
    DuplicateKey(String),
    #[error("There is no person with email `{0}`")]
    NotFound(String),
}

impl std::fmt::Debug for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
