/// NWS (National Weather Service) Point Forecast Client
///
/// Retrieves the hourly forecast for a coordinate from api.weather.gov using
/// the two-stage point lookup: resolve the coordinate to its gridpoint
/// metadata, then fetch the hourly forecast series that metadata references.
///
/// API Documentation: https://www.weather.gov/documentation/services-web-api
/// Point lookup: https://api.weather.gov/points/{lat},{lon}

use serde::Deserialize;

use crate::config::ForecastConfig;
use crate::model::{FetchError, ForecastWindow, WeatherSample};

const NWS_BASE_URL: &str = "https://api.weather.gov";

/// Number of hourly periods extracted from the forecast series.
pub const FORECAST_HORIZON: usize = 12;

// ============================================================================
// NWS API Response Structures
// ============================================================================

/// Point metadata response, `/points/{lat},{lon}`.
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    #[serde(rename = "forecastHourly")]
    pub forecast_hourly: Option<String>,
}

/// Hourly forecast response, fetched from the URL the point lookup returned.
#[derive(Debug, Deserialize)]
pub struct HourlyForecastResponse {
    pub properties: HourlyForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct HourlyForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One hourly forecast period.
///
/// Temperature is numeric but wind speed arrives as free text, e.g.
/// "10 mph" or "10 to 15 mph". Relative humidity is a nested
/// quantitative value and may be absent entirely.
#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub temperature: Option<f64>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "relativeHumidity", default)]
    pub relative_humidity: Option<QuantitativeValue>,
}

#[derive(Debug, Deserialize)]
pub struct QuantitativeValue {
    pub value: Option<f64>,
}

// ============================================================================
// Client Construction
// ============================================================================

/// Build the blocking HTTP client used for all forecast requests.
///
/// api.weather.gov rejects requests without a User-Agent, so the client is
/// constructed from configuration rather than with defaults.
pub fn build_client(config: &ForecastConfig) -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
}

// ============================================================================
// Forecast Fetching
// ============================================================================

/// Fetch the next `FORECAST_HORIZON` hourly weather samples for a coordinate.
///
/// Two-stage lookup: `/points/{lat},{lon}` yields the gridpoint's hourly
/// forecast URL, which is then fetched for the period series. Single
/// attempt, no retry; any failure maps onto the `FetchError` taxonomy.
///
/// Extraction policy (one period per sample):
///   - a period without a temperature is dropped;
///   - wind speed is parsed from its free-text value, defaulting to 0;
///   - humidity is carried when present, `None` otherwise.
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    latitude: f64,
    longitude: f64,
) -> Result<ForecastWindow, FetchError> {
    let points_url = format!("{}/points/{},{}", NWS_BASE_URL, latitude, longitude);
    let points: PointsResponse = get_json(client, &points_url)?;

    let hourly_url = points
        .properties
        .forecast_hourly
        .ok_or_else(|| FetchError::Schema("missing properties.forecastHourly".to_string()))?;

    let hourly: HourlyForecastResponse = get_json(client, &hourly_url)?;

    Ok(extract_window(hourly.properties.periods))
}

/// GET a URL and deserialize its JSON body, mapping failures onto the
/// fetch error taxonomy: transport/non-2xx → Network, bad JSON → Parse,
/// JSON that deserializes but lacks required fields → Schema.
fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<T, FetchError> {
    let response = client
        .get(url)
        .header("Accept", "application/geo+json")
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let value: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| FetchError::Schema(e.to_string()))
}

// ============================================================================
// Period Extraction
// ============================================================================

/// Convert raw forecast periods into the bounded sample window.
///
/// Takes at most `FORECAST_HORIZON` periods in their original
/// (chronological) order. Periods with no temperature are dropped.
pub fn extract_window(periods: Vec<ForecastPeriod>) -> ForecastWindow {
    periods
        .into_iter()
        .take(FORECAST_HORIZON)
        .filter_map(|period| {
            let temperature_f = period.temperature?;
            Some(WeatherSample {
                temperature_f,
                wind_speed_mph: parse_wind_speed(period.wind_speed.as_deref()),
                humidity_pct: period.relative_humidity.and_then(|h| h.value),
            })
        })
        .collect()
}

/// Parse the numeric magnitude out of an NWS wind speed string.
///
/// "10 mph" → 10.0; "10 to 15 mph" → 10.0 (leading value). Missing or
/// unparseable text → 0.0. Negative magnitudes are clamped to 0 to keep
/// the non-negative invariant on `WeatherSample::wind_speed_mph`.
pub fn parse_wind_speed(text: Option<&str>) -> f64 {
    text.and_then(|t| t.split_whitespace().next())
        .and_then(|token| token.parse::<f64>().ok())
        .map(|mph| mph.max(0.0))
        .unwrap_or(0.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wind_speed_plain_value() {
        assert_eq!(parse_wind_speed(Some("10 mph")), 10.0);
        assert_eq!(parse_wind_speed(Some("5 mph")), 5.0);
    }

    #[test]
    fn test_parse_wind_speed_range_takes_leading_value() {
        assert_eq!(parse_wind_speed(Some("10 to 15 mph")), 10.0);
    }

    #[test]
    fn test_parse_wind_speed_garbage_defaults_to_zero() {
        assert_eq!(parse_wind_speed(Some("calm")), 0.0);
        assert_eq!(parse_wind_speed(Some("")), 0.0);
        assert_eq!(parse_wind_speed(None), 0.0);
    }

    #[test]
    fn test_parse_wind_speed_negative_clamped() {
        assert_eq!(parse_wind_speed(Some("-3 mph")), 0.0);
    }

    fn period_json(temperature: &str, wind: &str, humidity: &str) -> String {
        format!(
            r#"{{"temperature": {}, "windSpeed": {}, "relativeHumidity": {}}}"#,
            temperature, wind, humidity
        )
    }

    fn periods_from_json(parts: &[String]) -> Vec<ForecastPeriod> {
        let body = format!(
            r#"{{"properties": {{"periods": [{}]}}}}"#,
            parts.join(",")
        );
        let response: HourlyForecastResponse =
            serde_json::from_str(&body).expect("fixture should deserialize");
        response.properties.periods
    }

    #[test]
    fn test_extract_window_full_period() {
        let periods = periods_from_json(&[period_json("72", r#""10 mph""#, r#"{"value": 45}"#)]);
        let window = extract_window(periods);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].temperature_f, 72.0);
        assert_eq!(window[0].wind_speed_mph, 10.0);
        assert_eq!(window[0].humidity_pct, Some(45.0));
    }

    #[test]
    fn test_extract_window_drops_period_without_temperature() {
        let periods = periods_from_json(&[
            period_json("null", r#""10 mph""#, "null"),
            period_json("68", r#""5 mph""#, "null"),
        ]);
        let window = extract_window(periods);
        assert_eq!(
            window.len(),
            1,
            "period with null temperature must be dropped"
        );
        assert_eq!(window[0].temperature_f, 68.0);
    }

    #[test]
    fn test_extract_window_missing_wind_defaults_to_zero() {
        let periods = periods_from_json(&[period_json("70", "null", "null")]);
        let window = extract_window(periods);
        assert_eq!(window[0].wind_speed_mph, 0.0);
    }

    #[test]
    fn test_extract_window_humidity_stays_absent() {
        // Humidity object present but value null, and humidity missing
        // entirely, both yield None.
        let periods = periods_from_json(&[
            period_json("70", r#""5 mph""#, r#"{"value": null}"#),
            r#"{"temperature": 71, "windSpeed": "5 mph"}"#.to_string(),
        ]);
        let window = extract_window(periods);
        assert_eq!(window[0].humidity_pct, None);
        assert_eq!(window[1].humidity_pct, None);
    }

    #[test]
    fn test_extract_window_caps_at_forecast_horizon() {
        let parts: Vec<String> = (0..24)
            .map(|i| period_json(&format!("{}", 60 + i), r#""5 mph""#, "null"))
            .collect();
        let window = extract_window(periods_from_json(&parts));
        assert_eq!(window.len(), FORECAST_HORIZON);
        // Chronological order preserved: first period first.
        assert_eq!(window[0].temperature_f, 60.0);
        assert_eq!(window[11].temperature_f, 71.0);
    }
}
