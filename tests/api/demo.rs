use crate::helpers::init_tracing;
use rolodex::configuration::{get_configuration, ReportSettings};
use rolodex::startup::run_demo;

#[test]
fn demo_prints_the_directory_before_and_after_the_rename() {
    // arrange
    init_tracing();
    let report = ReportSettings { separator_width: 5 };
    let mut out = Vec::new();

    // act
    let directory = run_demo(&report, &mut out).expect("Demo failed");

    // assert
    let printed = String::from_utf8(out).unwrap();
    let lines: Vec<_> = printed.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[1], "Person(name=b, surname=B, phone=+72, city=bbb, email=kaka2@yandex.ru)");
    assert_eq!(lines[4], "=====");
    assert_eq!(lines[6], "Person(name=akaki, surname=B, phone=+72, city=bbb, email=kaka2@yandex.ru)");
    assert_eq!(directory.len(), 4);
}

#[test]
fn base_configuration_loads() {
    let configuration = get_configuration().expect("Failed to read configuration");

    assert_eq!(configuration.application.name, "rolodex");
    assert_eq!(configuration.report.separator(), ReportSettings::default().separator());
}
