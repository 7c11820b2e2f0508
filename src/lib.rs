/// Wildfire risk alerting service.
///
/// Fetches short-horizon NWS point forecasts, classifies each hourly
/// sample against fixed fire-risk thresholds, and emails an advisory when
/// the Extreme tier appears anywhere in the window. Live satellite fire
/// detections (NASA FIRMS) are exposed as an in-process data function.

pub mod alert;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod monitor;
pub mod notify;
