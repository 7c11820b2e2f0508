/// Fire risk threshold evaluation.
///
/// One threshold table, one label set. The table is evaluated top-down
/// with first match winning, and classification is a pure, total function
/// of (temperature, wind speed) — defined for every real-valued input,
/// no hidden state, no history dependence.
///
/// Thresholds (temperature in °F, wind speed in mph), strict comparisons:
///   t > 35 and w > 25  →  Extreme
///   t > 30 and w > 20  →  Medium
///   otherwise          →  Low
///
/// Exactly at a boundary the condition does not fire: (35, 25) lands in
/// the Medium row, (30, 20) is Low.

use crate::model::{ForecastWindow, RiskAssessment, RiskLevel, WeatherSample};

// ---------------------------------------------------------------------------
// Threshold table
// ---------------------------------------------------------------------------

const EXTREME_TEMP_F: f64 = 35.0;
const EXTREME_WIND_MPH: f64 = 25.0;
const MEDIUM_TEMP_F: f64 = 30.0;
const MEDIUM_WIND_MPH: f64 = 20.0;

/// Classify a (temperature, wind speed) pair into a risk tier.
pub fn classify(temperature_f: f64, wind_speed_mph: f64) -> RiskLevel {
    if temperature_f > EXTREME_TEMP_F && wind_speed_mph > EXTREME_WIND_MPH {
        RiskLevel::Extreme
    } else if temperature_f > MEDIUM_TEMP_F && wind_speed_mph > MEDIUM_WIND_MPH {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

// ---------------------------------------------------------------------------
// Window evaluation
// ---------------------------------------------------------------------------

/// Evaluate a single sample.
pub fn evaluate(sample: WeatherSample) -> RiskAssessment {
    let level = classify(sample.temperature_f, sample.wind_speed_mph);
    RiskAssessment { sample, level }
}

/// Evaluate every sample in a window, preserving order and length.
pub fn evaluate_window(window: ForecastWindow) -> Vec<RiskAssessment> {
    window.into_iter().map(evaluate).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature_f: f64, wind_speed_mph: f64) -> WeatherSample {
        WeatherSample {
            temperature_f,
            wind_speed_mph,
            humidity_pct: None,
        }
    }

    // --- Scenario checks ----------------------------------------------------

    #[test]
    fn test_hot_and_windy_is_extreme() {
        assert_eq!(classify(40.0, 30.0), RiskLevel::Extreme);
    }

    #[test]
    fn test_warm_and_breezy_is_medium() {
        assert_eq!(classify(31.0, 21.0), RiskLevel::Medium);
    }

    #[test]
    fn test_cool_and_calm_is_low() {
        assert_eq!(classify(20.0, 5.0), RiskLevel::Low);
    }

    // --- Boundary exactness -------------------------------------------------

    #[test]
    fn test_exactly_at_extreme_threshold_is_not_extreme() {
        // Comparisons are strict: (35, 25) falls through to the Medium row.
        assert_eq!(
            classify(35.0, 25.0),
            RiskLevel::Medium,
            "(35, 25) must not classify as Extreme — thresholds are strict"
        );
    }

    #[test]
    fn test_just_above_extreme_threshold_is_extreme() {
        assert_eq!(classify(35.01, 25.01), RiskLevel::Extreme);
    }

    #[test]
    fn test_exactly_at_medium_threshold_is_low() {
        assert_eq!(classify(30.0, 20.0), RiskLevel::Low);
    }

    #[test]
    fn test_one_condition_alone_does_not_elevate() {
        // Both temperature AND wind must exceed the row's thresholds.
        assert_eq!(classify(100.0, 0.0), RiskLevel::Low);
        assert_eq!(classify(0.0, 100.0), RiskLevel::Low);
        assert_eq!(classify(36.0, 21.0), RiskLevel::Medium);
    }

    // --- Totality -----------------------------------------------------------

    #[test]
    fn test_classification_is_total_over_odd_inputs() {
        // No input panics; extremes and negatives all land in a tier.
        assert_eq!(classify(-40.0, -10.0), RiskLevel::Low);
        assert_eq!(classify(f64::MAX, f64::MAX), RiskLevel::Extreme);
        assert_eq!(classify(f64::NAN, f64::NAN), RiskLevel::Low);
    }

    // --- Window evaluation --------------------------------------------------

    #[test]
    fn test_evaluate_window_preserves_order_and_length() {
        let window = vec![sample(40.0, 30.0), sample(20.0, 5.0), sample(31.0, 21.0)];
        let assessments = evaluate_window(window.clone());

        assert_eq!(assessments.len(), window.len());
        assert_eq!(assessments[0].level, RiskLevel::Extreme);
        assert_eq!(assessments[1].level, RiskLevel::Low);
        assert_eq!(assessments[2].level, RiskLevel::Medium);
        for (assessment, original) in assessments.iter().zip(&window) {
            assert_eq!(&assessment.sample, original, "sample order must be preserved");
        }
    }

    #[test]
    fn test_evaluate_keeps_humidity_on_the_sample() {
        let mut s = sample(40.0, 30.0);
        s.humidity_pct = Some(12.0);
        let assessment = evaluate(s);
        assert_eq!(assessment.sample.humidity_pct, Some(12.0));
        assert_eq!(assessment.level, RiskLevel::Extreme);
    }
}
