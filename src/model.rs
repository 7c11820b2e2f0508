/// Core data types for the wildfire risk alerting service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

// ---------------------------------------------------------------------------
// Weather types
// ---------------------------------------------------------------------------

/// A single hourly forecast sample from the NWS point forecast.
///
/// Corresponds to one entry in the `properties.periods[]` array of an
/// api.weather.gov hourly forecast response. Immutable once created;
/// one per forecast period.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    /// Forecast temperature in degrees Fahrenheit.
    pub temperature_f: f64,
    /// Sustained wind speed in miles per hour, never negative.
    /// Parsed from the NWS free-text value ("10 mph", "10 to 15 mph");
    /// defaults to 0 when the text cannot be parsed.
    pub wind_speed_mph: f64,
    /// Relative humidity percentage (0–100), when the period reports one.
    pub humidity_pct: Option<f64>,
}

/// Chronologically ordered forecast samples for the next 12 hourly periods.
///
/// May hold fewer than 12 entries when the upstream forecast is short or
/// periods were dropped for missing temperature.
pub type ForecastWindow = Vec<WeatherSample>;

// ---------------------------------------------------------------------------
// Risk types
// ---------------------------------------------------------------------------

/// Fire risk tiers, in ascending order of severity.
///
/// The weather threshold table produces Low, Medium, and Extreme.
/// High is produced only by satellite-detection confidence categorization
/// (see `ingest::firms`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// A weather sample paired with its derived risk tier.
///
/// The tier is a pure function of (temperature, wind speed) — no hidden
/// state, no history dependence. One per sample, preserving window order.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub sample: WeatherSample,
    pub level: RiskLevel,
}

/// The decision artifact produced when at least one Extreme assessment
/// exists in a window. Consumed once by the notifier, then discarded —
/// nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub recipient: String,
    pub subject: String,
    pub message: String,
    /// Exactly the Extreme-tier assessments from the evaluated window.
    pub triggering: Vec<RiskAssessment>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing external forecast or
/// fire-detection data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failure or non-2xx HTTP response.
    Network(String),
    /// The response body could not be deserialized.
    Parse(String),
    /// The body parsed but lacked an expected field.
    Schema(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            FetchError::Schema(msg) => write!(f, "Schema error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors that can arise while delivering an alert email.
/// All variants are non-fatal to the caller; they are logged and dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryError {
    /// The relay rejected our credentials.
    Auth(String),
    /// Connection, TLS, or protocol failure talking to the relay.
    Transport(String),
    /// The recipient address is not a valid mailbox string.
    InvalidRecipient(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            DeliveryError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DeliveryError::InvalidRecipient(addr) => {
                write!(f, "Invalid recipient address: {}", addr)
            }
        }
    }
}

impl std::error::Error for DeliveryError {}

/// Request validation failures. These are the only failures surfaced to the
/// caller of the check-and-alert operation; everything downstream is logged.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingCoordinates,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingCoordinates => {
                write!(f, "Latitude or longitude not provided")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
