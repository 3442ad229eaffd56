pub mod configuration;
pub mod directory;
pub mod domain;
pub mod errors;
pub mod startup;
pub mod telemetry;

pub use directory::{Directory, PersonMut, SharedDirectory};
pub use domain::Person;
pub use errors::{DirectoryError, Field, ValidationError};
