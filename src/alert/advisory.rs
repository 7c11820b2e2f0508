/// Alert decision and advisory composition.
///
/// Scans an evaluated window for Extreme-tier assessments and, when at
/// least one exists, composes a single advisory listing every Extreme
/// sample followed by a fixed safety-action checklist. The decision is
/// presence-based only: more Extreme samples lengthen the listing but
/// never escalate the message.

use crate::model::{AlertEvent, RiskAssessment, RiskLevel};

/// Fixed subject line for every advisory email.
pub const ALERT_SUBJECT: &str = "Emergency Fire Risk Alert";

const ACTION_CHECKLIST: &str = "\nExtreme fire risk detected in your area. Immediate action is advised:\n\
    - Activate home sprinkler systems.\n\
    - Deploy firefighting foam if available.\n\
    - Evacuate the premises and proceed to a safer location.\n\
    - Stay informed about local emergency broadcasts.\n";

/// Decide whether an evaluated window warrants an alert.
///
/// Returns `Some(AlertEvent)` iff at least one assessment is Extreme;
/// otherwise `None` with no side effect. The event carries exactly the
/// Extreme-tier assessments, in window order.
pub fn decide(assessments: &[RiskAssessment], recipient: &str) -> Option<AlertEvent> {
    let triggering: Vec<RiskAssessment> = assessments
        .iter()
        .filter(|a| a.level == RiskLevel::Extreme)
        .cloned()
        .collect();

    if triggering.is_empty() {
        return None;
    }

    Some(AlertEvent {
        recipient: recipient.to_string(),
        subject: ALERT_SUBJECT.to_string(),
        message: compose_message(&triggering),
        triggering,
    })
}

/// Render the advisory body: header, one line per Extreme assessment,
/// then the action checklist.
fn compose_message(triggering: &[RiskAssessment]) -> String {
    let mut message = String::from("Emergency Fire Risk Alert:\n");

    for assessment in triggering {
        let sample = &assessment.sample;
        match sample.humidity_pct {
            Some(humidity) => message.push_str(&format!(
                "Temperature: {}, Wind Speed: {}, Humidity: {}%, Risk: {}\n",
                sample.temperature_f, sample.wind_speed_mph, humidity, assessment.level
            )),
            None => message.push_str(&format!(
                "Temperature: {}, Wind Speed: {}, Risk: {}\n",
                sample.temperature_f, sample.wind_speed_mph, assessment.level
            )),
        }
    }

    message.push_str(ACTION_CHECKLIST);
    message
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
