/// firewatch - one-shot fire risk check and alert
///
/// Usage: firewatch <latitude> <longitude> <recipient-email>
///
/// Reads firewatch.toml (override with FIREWATCH_CONFIG) and the
/// SMTP_PASSWORD environment variable (.env supported). Exits non-zero
/// only for usage, validation, or configuration errors; forecast and
/// delivery failures are logged and reported through the printed outcome.

use std::env;
use std::process::ExitCode;

use firewatch_service::config;
use firewatch_service::ingest::nws;
use firewatch_service::logging::{self, DataSource, LogLevel};
use firewatch_service::monitor::{self, CheckOutcome};
use firewatch_service::notify::SmtpNotifier;

const DEFAULT_CONFIG_PATH: &str = "./firewatch.toml";

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    logging::init_logger(LogLevel::Info, None, true);

    let args: Vec<String> = env::args().collect();
    let (latitude, longitude, recipient) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: firewatch <latitude> <longitude> <recipient-email>");
            return ExitCode::from(2);
        }
    };

    let config_path =
        env::var("FIREWATCH_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match nws::build_client(&config.forecast) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let password = match config.smtp.password() {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let notifier = match SmtpNotifier::new(&config.smtp, &password) {
        Ok(notifier) => notifier,
        Err(e) => {
            eprintln!("Failed to configure mail relay: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::info(
        DataSource::System,
        None,
        &format!("Checking fire risk for {},{}", latitude, longitude),
    );

    match monitor::check_and_alert(&client, &notifier, Some(latitude), Some(longitude), &recipient)
    {
        Ok(CheckOutcome::AlertSent) => {
            println!("Extreme fire risk found; alert sent to {}", recipient);
            ExitCode::SUCCESS
        }
        Ok(CheckOutcome::NoExtremeRisk) => {
            println!("No extreme fire risk detected.");
            ExitCode::SUCCESS
        }
        Ok(CheckOutcome::ForecastUnavailable) => {
            println!("Forecast data unavailable; no alert sent (see logs).");
            ExitCode::SUCCESS
        }
        Ok(CheckOutcome::DeliveryFailed) => {
            println!("Extreme fire risk found but alert delivery failed (see logs).");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Parse `<latitude> <longitude> <recipient>` from argv. Coordinates must
/// be numeric; anything else is a usage error.
fn parse_args(args: &[String]) -> Option<(f64, f64, String)> {
    if args.len() != 4 {
        return None;
    }
    let latitude = args[1].parse::<f64>().ok()?;
    let longitude = args[2].parse::<f64>().ok()?;
    Some((latitude, longitude, args[3].clone()))
}
