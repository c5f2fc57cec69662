use hotel_reservation::{
    adapters::console::InputReader as ConsoleInputReader,
    adapters::system::LocalClock,
    config::{AppConfig, DEFAULT_LOG_FILTER},
    program::run_program,
};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env();
    tracing::debug!("Date pattern: {}", config.date_pattern);

    let outcome = run_program(
        &config,
        ConsoleInputReader::stdio(),
        &LocalClock,
        &mut io::stdout(),
        &mut io::stderr(),
    );

    match outcome {
        Ok(outcome) if !outcome.is_failure() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
