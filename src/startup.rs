use std::io::Write;

use anyhow::Context;

use crate::configuration::ReportSettings;
use crate::directory::Directory;
use crate::domain::Person;

const SAMPLE_PERSONS: [[&str; 5]; 4] = [
    ["a", "A", "+71", "aaa", "kaka1@yandex.ru"],
    ["b", "B", "+72", "bbb", "kaka2@yandex.ru"],
    ["c", "C", "+73", "ccc", "kaka3@yandex.ru"],
    ["d", "D", "+74", "ddd", "kaka4@yandex.ru"],
];

/// Files the sample persons, prints the directory, renames one person in
/// place and prints it again.
#[tracing::instrument(name = "Running the directory demo", skip_all)]
pub fn run_demo(report: &ReportSettings, out: &mut impl Write) -> anyhow::Result<Directory> {
    let mut directory = Directory::new();
    for [name, surname, phone, city, email] in SAMPLE_PERSONS {
        let person = Person::new(name.into(), surname.into(), phone.into(), city.into(), email.into())
            .with_context(|| format!("Failed to build sample person {}", email))?;
        directory.add(person).context("Failed to file sample person")?;
    }
    writeln!(out, "{}", directory)?;

    writeln!(out, "{}", report.separator())?;
    directory
        .get_by_email_mut("kaka2@yandex.ru")
        .context("Failed to look up kaka2@yandex.ru")?
        .set_name("akaki".into())
        .context("Failed to rename kaka2@yandex.ru")?;
    writeln!(out, "{}", directory)?;

    tracing::info!(persons = directory.len(), "Demo finished");
    Ok(directory)
}
