/// The check-and-alert pipeline.
///
/// Wires the forecast fetch, risk evaluation, alert decision, and delivery
/// into one request-scoped, blocking operation. Every downstream failure
/// is caught here, logged with its source, and converted into an outcome —
/// the pipeline never panics the host and never retries.
///
/// Only coordinate validation is surfaced to the caller. Fetch and
/// delivery failures stay in the logs, but the outcome enum keeps
/// "no forecast data" and "no extreme risk" distinguishable in-process.

use crate::alert::{advisory, risk};
use crate::ingest::nws;
use crate::logging::{self, DataSource};
use crate::model::{FetchError, ForecastWindow, ValidationError};
use crate::notify::AlertChannel;

/// What a single check-and-alert pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// An Extreme tier was found and the advisory was delivered.
    AlertSent,
    /// The window evaluated clean; nothing was sent.
    NoExtremeRisk,
    /// The forecast could not be fetched; nothing was evaluated or sent.
    ForecastUnavailable,
    /// An advisory was composed but the delivery channel failed.
    DeliveryFailed,
}

/// Run one full check-and-alert pass for a coordinate and recipient.
///
/// Missing coordinates are the only error the caller sees; everything
/// downstream is logged and folded into the returned outcome.
pub fn check_and_alert(
    client: &reqwest::blocking::Client,
    channel: &dyn AlertChannel,
    latitude: Option<f64>,
    longitude: Option<f64>,
    recipient: &str,
) -> Result<CheckOutcome, ValidationError> {
    let (lat, lon) = match (latitude, longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            logging::error(
                DataSource::System,
                None,
                "Latitude or longitude not provided. Alerts cannot be sent.",
            );
            return Err(ValidationError::MissingCoordinates);
        }
    };

    let location = format!("{},{}", lat, lon);
    let forecast = nws::fetch_forecast(client, lat, lon);
    Ok(assess_and_dispatch(forecast, &location, recipient, channel))
}

/// The fetch-independent tail of the pipeline: evaluate, decide, deliver.
///
/// Takes the fetch result rather than performing the fetch, so scenario
/// tests can drive every branch deterministically.
pub fn assess_and_dispatch(
    forecast: Result<ForecastWindow, FetchError>,
    location: &str,
    recipient: &str,
    channel: &dyn AlertChannel,
) -> CheckOutcome {
    let window = match forecast {
        Ok(window) => window,
        Err(e) => {
            logging::log_fetch_failure(DataSource::Nws, location, "Forecast fetch", &e);
            logging::error(
                DataSource::System,
                None,
                "Failed to retrieve forecast data. Alerts cannot be sent.",
            );
            return CheckOutcome::ForecastUnavailable;
        }
    };

    let assessments = risk::evaluate_window(window);

    match advisory::decide(&assessments, recipient) {
        Some(event) => match channel.send(&event) {
            Ok(()) => CheckOutcome::AlertSent,
            Err(e) => {
                logging::log_delivery_failure(recipient, &e);
                CheckOutcome::DeliveryFailed
            }
        },
        None => {
            logging::info(DataSource::System, None, "No extreme fire risk detected.");
            CheckOutcome::NoExtremeRisk
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
