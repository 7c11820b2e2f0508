/// Service configuration loading.
///
/// All tunable values live in a TOML file (`firewatch.toml` by default) and
/// are loaded once at startup into a `ServiceConfig` that is passed to
/// constructors explicitly. Secrets (SMTP password, FIRMS API key) are never
/// written to the config file; they come from the environment, with `.env`
/// support via dotenv. Nothing here is mutated after startup.

use serde::Deserialize;
use std::env;
use std::fs;

/// Environment variable holding the SMTP sender password.
pub const SMTP_PASSWORD_VAR: &str = "SMTP_PASSWORD";

/// Environment variable holding the NASA FIRMS API key.
pub const FIRMS_API_KEY_VAR: &str = "FIRMS_API_KEY";

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub forecast: ForecastConfig,
    pub smtp: SmtpConfig,
    pub firms: FirmsConfig,
}

/// Settings for the NWS point-forecast client.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// api.weather.gov rejects requests without a User-Agent identifying
    /// the application and a contact address.
    pub user_agent: String,
    /// Overall per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Settings for the alert mail relay. The password is intentionally not a
/// field here; `SmtpConfig::password()` reads it from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// Relay hostname, e.g. "smtp.gmail.com".
    pub host: String,
    /// Submission port (STARTTLS), typically 587.
    pub port: u16,
    /// Fixed sender identity used for both SMTP login and the From header.
    pub sender: String,
}

impl SmtpConfig {
    /// Read the sender password from the environment.
    pub fn password(&self) -> Result<String, ConfigError> {
        env::var(SMTP_PASSWORD_VAR).map_err(|_| ConfigError::MissingSecret(SMTP_PASSWORD_VAR))
    }
}

/// Settings for the NASA FIRMS live-fire client.
#[derive(Debug, Clone, Deserialize)]
pub struct FirmsConfig {
    /// Satellite source identifier, e.g. "SV-C2".
    pub satellite: String,
    /// Detections outside this box are discarded before use.
    pub bounds: BoundingBox,
}

impl FirmsConfig {
    /// Read the FIRMS API key from the environment.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        env::var(FIRMS_API_KEY_VAR).map_err(|_| ConfigError::MissingSecret(FIRMS_API_KEY_VAR))
    }
}

/// A WGS84 bounding box. Used to restrict fire detections to the
/// continental US rather than baking coordinates into the code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(String, std::io::Error),
    /// The config file is not valid TOML or is missing required fields.
    Toml(String, toml::de::Error),
    /// A required secret was not found in the environment.
    MissingSecret(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Cannot read config file {}: {}", path, e),
            ConfigError::Toml(path, e) => write!(f, "Cannot parse config file {}: {}", path, e),
            ConfigError::MissingSecret(var) => {
                write!(f, "Environment variable {} is not set", var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the service configuration from a TOML file.
pub fn load_config(path: &str) -> Result<ServiceConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_string(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Toml(path.to_string(), e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [forecast]
        user_agent = "firewatch_service (ops@example.com)"
        timeout_secs = 30

        [smtp]
        host = "smtp.gmail.com"
        port = 587
        sender = "alerts@example.com"

        [firms]
        satellite = "SV-C2"

        [firms.bounds]
        min_latitude = 25.0
        max_latitude = 49.5
        min_longitude = -125.0
        max_longitude = -66.96
    "#;

    #[test]
    fn test_sample_config_parses() {
        let config: ServiceConfig = toml::from_str(SAMPLE).expect("sample config should parse");
        assert_eq!(config.smtp.host, "smtp.gmail.com");
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.firms.satellite, "SV-C2");
        assert_eq!(config.firms.bounds.min_latitude, 25.0);
        assert_eq!(config.forecast.timeout_secs, 30);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        // A config without [smtp] must not deserialize.
        let truncated = r#"
            [forecast]
            user_agent = "firewatch_service"
            timeout_secs = 30
        "#;
        let result: Result<ServiceConfig, _> = toml::from_str(truncated);
        assert!(result.is_err(), "config missing [smtp] should fail to parse");
    }
}
