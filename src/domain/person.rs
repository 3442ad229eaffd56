use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use crate::domain::{CityName, PersonEmail, PersonName, PhoneNumber};
use crate::errors::{Field, ValidationError};

/// A contact entry. Every field is re-validated on each write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    name: PersonName,
    surname: PersonName,
    phone: PhoneNumber,
    city: CityName,
    email: PersonEmail,
}

/// Unvalidated person fields as they appear in configuration and other serialized input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub city: String,
    pub email: String,
}

impl Person {
    /// validates the fields in order and fails on the first rejected one
    pub fn new(
        name: String,
        surname: String,
        phone: String,
        city: String,
        email: String,
    ) -> Result<Person, ValidationError> {
        Ok(Self {
            name: PersonName::parse(name, Field::Name)?,
            surname: PersonName::parse(surname, Field::Surname)?,
            phone: PhoneNumber::parse(phone)?,
            city: CityName::parse(city)?,
            email: PersonEmail::parse(email)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn surname(&self) -> &str {
        self.surname.as_ref()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_ref()
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        self.name = PersonName::parse(name, Field::Name)?;
        Ok(())
    }

    pub fn set_surname(&mut self, surname: String) -> Result<(), ValidationError> {
        self.surname = PersonName::parse(surname, Field::Surname)?;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: String) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::parse(phone)?;
        Ok(())
    }

    pub fn set_city(&mut self, city: String) -> Result<(), ValidationError> {
        self.city = CityName::parse(city)?;
        Ok(())
    }

    /// Changes the email of a free-standing person. A person filed in a
    /// `Directory` is re-keyed through `Directory::change_email` instead.
    pub fn set_email(&mut self, email: String) -> Result<(), ValidationError> {
        self.email = PersonEmail::parse(email)?;
        Ok(())
    }

    pub(crate) fn replace_email(&mut self, email: PersonEmail) {
        self.email = email;
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = ValidationError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        Person::new(record.name, record.surname, record.phone, record.city, record.email)
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            name: person.name.as_ref().to_owned(),
            surname: person.surname.as_ref().to_owned(),
            phone: person.phone.as_ref().to_owned(),
            city: person.city.as_ref().to_owned(),
            email: person.email.as_ref().to_owned(),
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person(name={}, surname={}, phone={}, city={}, email={})",
            self.name, self.surname, self.phone, self.city, self.email
        )
    }
}
