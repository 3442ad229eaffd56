use once_cell::sync::Lazy;
use rolodex::telemetry::{get_subscriber, init_subscriber};
use rolodex::{Directory, Person};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to set up telemetry");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to set up telemetry");
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// The n-th sample person: `a A +71 aaa kaka1@yandex.ru` for n = 1, and so on.
pub fn sample_person(n: u8) -> Person {
    let letter = char::from(b'a' + n - 1);
    Person::new(
        letter.to_string(),
        letter.to_ascii_uppercase().to_string(),
        format!("+7{}", n),
        letter.to_string().repeat(3),
        format!("kaka{}@yandex.ru", n),
    )
    .expect("Failed to build sample person")
}

/// A directory holding the first `count` sample persons in order.
pub fn sample_directory(count: u8) -> Directory {
    init_tracing();

    let mut directory = Directory::new();
    for n in 1..=count {
        directory.add(sample_person(n)).expect("Failed to file sample person");
    }
    directory
}
