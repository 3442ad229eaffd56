use std::thread;

use crate::helpers::{init_tracing, sample_directory, sample_person};
use claims::assert_ok;
use rolodex::{DirectoryError, SharedDirectory};

#[test]
fn concurrent_adds_of_one_email_file_it_once() {
    // arrange
    init_tracing();
    let directory = SharedDirectory::default();

    // act
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let directory = directory.clone();
            thread::spawn(move || directory.add(sample_person(1)))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    // assert
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .all(|error| matches!(error, DirectoryError::DuplicateKey(_))));
    assert_eq!(directory.len(), 1);
}

#[test]
fn update_runs_under_the_lock_and_is_visible_to_clones() {
    init_tracing();
    let directory = SharedDirectory::default();
    assert_ok!(directory.add(sample_person(2)));
    let other = directory.clone();

    assert_ok!(other.update("kaka2@yandex.ru", |person| person.set_name("akaki".into())));

    assert_eq!(directory.get_by_email("kaka2@yandex.ru").unwrap().name(), "akaki");
}

#[test]
fn update_of_unknown_email_is_not_found() {
    let directory = SharedDirectory::default();

    let result = directory.update("kaka9@yandex.ru", |person| person.set_city("x".into()));

    assert!(matches!(result, Err(DirectoryError::NotFound(_))));
    assert!(directory.is_empty());
}

#[test]
fn removal_and_rekeying_go_through_the_lock() {
    let directory = SharedDirectory::default();
    assert_ok!(directory.add(sample_person(1)));
    assert_ok!(directory.add(sample_person(2)));

    assert_ok!(directory.change_email("kaka1@yandex.ru", "akaki@yandex.ru"));
    assert_ok!(directory.remove_by_email("kaka2@yandex.ru"));

    assert_eq!(
        directory.render(),
        "Person(name=a, surname=A, phone=+71, city=aaa, email=akaki@yandex.ru)"
    );
}

#[test]
fn wrapping_an_existing_directory_keeps_its_contents() {
    let directory = SharedDirectory::new(sample_directory(4));

    assert_eq!(directory.len(), 4);
    assert_eq!(directory.get_by_email("kaka4@yandex.ru").unwrap(), sample_person(4));
}
