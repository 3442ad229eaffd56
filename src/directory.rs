//! Persons filed by email.
//!
//! Lookups go through a `HashMap`; a side list keeps insertion order for rendering.

use std::collections::HashMap;
use std::fmt::Formatter;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Person, PersonEmail};
use crate::errors::{DirectoryError, ValidationError};

/// Lookup is O(1); removal and re-keying also walk the order list, so they are O(n).
#[derive(Debug, Default)]
pub struct Directory {
    persons: HashMap<String, Person>,
    order: Vec<String>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(name = "Adding a person", skip(self, person), fields(email = %person.email()))]
    pub fn add(&mut self, person: Person) -> Result<(), DirectoryError> {
        let email = person.email().to_owned();
        if self.persons.contains_key(&email) {
            tracing::warn!("Email is already filed");
            return Err(DirectoryError::DuplicateKey(email));
        }

        self.order.push(email.clone());
        self.persons.insert(email, person);
        Ok(())
    }

    pub fn get_by_email(&self, email: &str) -> Result<&Person, DirectoryError> {
        self.persons
            .get(email)
            .ok_or_else(|| DirectoryError::NotFound(email.to_owned()))
    }

    /// Edit a filed person in place. The email is left out of reach; see [`Directory::change_email`].
    pub fn get_by_email_mut(&mut self, email: &str) -> Result<PersonMut<'_>, DirectoryError> {
        self.persons
            .get_mut(email)
            .map(|person| PersonMut { person })
            .ok_or_else(|| DirectoryError::NotFound(email.to_owned()))
    }

    /// Re-file a person under a new email, keeping its position.
    #[tracing::instrument(name = "Changing a person's email", skip(self))]
    pub fn change_email(&mut self, old: &str, new: &str) -> Result<(), DirectoryError> {
        if !self.persons.contains_key(old) {
            return Err(DirectoryError::NotFound(old.to_owned()));
        }
        let email = PersonEmail::parse(new.to_owned())?;
        if old == new {
            return Ok(());
        }
        if self.persons.contains_key(new) {
            return Err(DirectoryError::DuplicateKey(new.to_owned()));
        }

        let Some(mut person) = self.persons.remove(old) else {
            return Err(DirectoryError::NotFound(old.to_owned()));
        };
        person.replace_email(email);
        self.persons.insert(new.to_owned(), person);
        if let Some(key) = self.order.iter_mut().find(|key| key.as_str() == old) {
            *key = new.to_owned();
        }
        Ok(())
    }

    /// Removes the entry filed under the person's email.
    pub fn remove(&mut self, person: &Person) -> Result<Person, DirectoryError> {
        self.remove_by_email(person.email())
    }

    #[tracing::instrument(name = "Removing a person", skip(self))]
    pub fn remove_by_email(&mut self, email: &str) -> Result<Person, DirectoryError> {
        let person = self
            .persons
            .remove(email)
            .ok_or_else(|| DirectoryError::NotFound(email.to_owned()))?;
        self.order.retain(|key| key != email);
        Ok(person)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.persons.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Persons in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> + '_ {
        self.order.iter().filter_map(|key| self.persons.get(key))
    }
}

impl std::fmt::Display for Directory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, person) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", person)?;
        }
        Ok(())
    }
}

/// A filed person opened for editing. Everything but the email can change.
pub struct PersonMut<'a> {
    person: &'a mut Person,
}

impl PersonMut<'_> {
    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        self.person.set_name(name)
    }

    pub fn set_surname(&mut self, surname: String) -> Result<(), ValidationError> {
        self.person.set_surname(surname)
    }

    pub fn set_phone(&mut self, phone: String) -> Result<(), ValidationError> {
        self.person.set_phone(phone)
    }

    pub fn set_city(&mut self, city: String) -> Result<(), ValidationError> {
        self.person.set_city(city)
    }
}

impl Deref for PersonMut<'_> {
    type Target = Person;

    fn deref(&self) -> &Person {
        &*self.person
    }
}

/// A `Directory` behind one lock, for callers on several threads.
#[derive(Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
}

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    // every operation leaves the directory consistent, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, person: Person) -> Result<(), DirectoryError> {
        self.lock().add(person)
    }

    pub fn get_by_email(&self, email: &str) -> Result<Person, DirectoryError> {
        self.lock().get_by_email(email).cloned()
    }

    /// Runs `edit` against the filed person while the lock is held.
    pub fn update<F>(&self, email: &str, edit: F) -> Result<(), DirectoryError>
    where
        F: FnOnce(&mut PersonMut<'_>) -> Result<(), ValidationError>,
    {
        let mut directory = self.lock();
        let mut person = directory.get_by_email_mut(email)?;
        edit(&mut person)?;
        Ok(())
    }

    pub fn change_email(&self, old: &str, new: &str) -> Result<(), DirectoryError> {
        self.lock().change_email(old, new)
    }

    pub fn remove_by_email(&self, email: &str) -> Result<Person, DirectoryError> {
        self.lock().remove_by_email(email)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn render(&self) -> String {
        self.lock().to_string()
    }
}
