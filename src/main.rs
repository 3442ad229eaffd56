use anyhow::Context;

use rolodex::configuration::get_configuration;
use rolodex::startup::run_demo;
use rolodex::telemetry::{get_subscriber, init_subscriber};

fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;

    // bunyan logs go to stderr so the rendered directory stays readable on stdout
    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber).context("Failed to set up telemetry")?;

    let mut stdout = std::io::stdout().lock();
    run_demo(&configuration.report, &mut stdout)?;

    Ok(())
}
