/// NASA FIRMS (Fire Information for Resource Management System) Client
///
/// Retrieves live satellite fire detections for a given date and satellite
/// source. Exposed as a direct in-process function so that callers needing
/// live-fire data invoke it directly instead of round-tripping through
/// their own HTTP server.
///
/// API Documentation: https://firms.modaps.eosdis.nasa.gov/api/

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::{BoundingBox, FirmsConfig};
use crate::model::{FetchError, RiskLevel};

const FIRMS_BASE_URL: &str = "https://firms.modaps.eosdis.nasa.gov";

// ============================================================================
// FIRMS API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FirmsActiveResponse {
    pub fires: Vec<FireDetection>,
}

/// A single satellite fire detection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FireDetection {
    pub latitude: f64,
    pub longitude: f64,
    /// Brightness temperature of the detection, in Kelvin.
    pub brightness: Option<f64>,
    /// Acquisition date, "YYYY-MM-DD".
    pub acq_date: Option<String>,
    /// Detection confidence: "high", "nominal", or "low".
    pub confidence: Option<String>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetch active fire detections for a date, restricted to the configured
/// bounding box.
///
/// Detections outside the box (or lacking coordinates upstream) are
/// discarded before the result is returned. Single attempt, no retry.
pub fn fetch_active_fires(
    client: &reqwest::blocking::Client,
    config: &FirmsConfig,
    api_key: &str,
    date: NaiveDate,
) -> Result<Vec<FireDetection>, FetchError> {
    let url = format!(
        "{}/api/fire/active?date={}&satellite={}&apiKey={}",
        FIRMS_BASE_URL,
        date.format("%Y-%m-%d"),
        config.satellite,
        api_key
    );

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Network(format!(
            "HTTP {} from FIRMS",
            response.status()
        )));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let value: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let parsed: FirmsActiveResponse =
        serde_json::from_value(value).map_err(|e| FetchError::Schema(e.to_string()))?;

    Ok(parsed
        .fires
        .into_iter()
        .filter(|fire| within_bounds(fire, &config.bounds))
        .collect())
}

/// Returns `true` if the detection lies inside the bounding box
/// (boundary inclusive).
pub fn within_bounds(fire: &FireDetection, bounds: &BoundingBox) -> bool {
    fire.latitude >= bounds.min_latitude
        && fire.latitude <= bounds.max_latitude
        && fire.longitude >= bounds.min_longitude
        && fire.longitude <= bounds.max_longitude
}

// ============================================================================
// Confidence Categorization
// ============================================================================

/// Map a FIRMS detection confidence onto a risk tier.
///
/// "high" → High, "nominal" → Medium, anything else (including absent
/// confidence) → Low. This is the only producer of the High tier; the
/// weather threshold table never yields it.
pub fn risk_from_confidence(confidence: Option<&str>) -> RiskLevel {
    match confidence {
        Some("high") => RiskLevel::High,
        Some("nominal") => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn continental_us() -> BoundingBox {
        BoundingBox {
            min_latitude: 25.0,
            max_latitude: 49.5,
            min_longitude: -125.0,
            max_longitude: -66.96,
        }
    }

    fn detection(latitude: f64, longitude: f64) -> FireDetection {
        FireDetection {
            latitude,
            longitude,
            brightness: Some(330.5),
            acq_date: Some("2026-08-28".to_string()),
            confidence: Some("nominal".to_string()),
        }
    }

    #[test]
    fn test_detection_inside_bounds() {
        // Roughly central California.
        assert!(within_bounds(&detection(37.0, -120.0), &continental_us()));
    }

    #[test]
    fn test_detection_outside_bounds() {
        // Hawaii is outside the continental box.
        assert!(!within_bounds(&detection(21.3, -157.8), &continental_us()));
        // Alaska latitude is above the box.
        assert!(!within_bounds(&detection(64.2, -149.5), &continental_us()));
    }

    #[test]
    fn test_detection_on_boundary_is_inside() {
        assert!(within_bounds(&detection(25.0, -125.0), &continental_us()));
        assert!(within_bounds(&detection(49.5, -66.96), &continental_us()));
    }

    #[test]
    fn test_risk_from_confidence() {
        assert_eq!(risk_from_confidence(Some("high")), RiskLevel::High);
        assert_eq!(risk_from_confidence(Some("nominal")), RiskLevel::Medium);
        assert_eq!(risk_from_confidence(Some("low")), RiskLevel::Low);
        assert_eq!(risk_from_confidence(Some("unexpected")), RiskLevel::Low);
        assert_eq!(risk_from_confidence(None), RiskLevel::Low);
    }

    #[test]
    fn test_active_response_parses() {
        let body = r#"{
            "fires": [
                {"latitude": 37.1, "longitude": -119.8, "brightness": 342.1,
                 "acq_date": "2026-08-28", "confidence": "high"},
                {"latitude": 44.0, "longitude": -121.3, "brightness": null,
                 "acq_date": "2026-08-28", "confidence": null}
            ]
        }"#;
        let parsed: FirmsActiveResponse =
            serde_json::from_str(body).expect("fixture should deserialize");
        assert_eq!(parsed.fires.len(), 2);
        assert_eq!(parsed.fires[0].confidence.as_deref(), Some("high"));
        assert_eq!(parsed.fires[1].brightness, None);
    }
}
