//! Scoring a weather reading against an activity profile

use serde::Serialize;

use crate::activity::{ActivityProfile, find_activity};
use crate::reading::WeatherReading;
use crate::types::Severity;

/// Activity exempt from the rain penalty
const RAIN_TOLERANT_ACTIVITY: &str = "hiking";

/// Issue count above which indoor alternatives are suggested
const INDOOR_SUGGESTION_THRESHOLD: usize = 2;

/// Outcome of checking one activity against one reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suitability {
    pub suitable: bool,
    pub message: String,
    pub severity: Severity,
    /// Individual failed checks, in evaluation order
    pub issues: Vec<String>,
    /// Individual passed checks, in evaluation order
    pub positives: Vec<String>,
}

/// Check whether the current weather suits an activity.
///
/// Indoor activities always pass. Outdoor activities run four independent
/// threshold checks plus a rain check; a value exactly on a bound passes.
pub fn check_suitability(activity: &ActivityProfile, reading: &WeatherReading) -> Suitability {
    if activity.indoor {
        return Suitability {
            suitable: true,
            message: format!(
                "✅ Perfect choice! {} is an excellent indoor activity that's perfect regardless of the weather outside. \
                Current conditions in {}: {}°C, {}. Enjoy your {}!",
                activity.display_name(),
                reading.city,
                reading.temperature,
                reading.description,
                activity.key
            ),
            severity: Severity::Success,
            issues: Vec::new(),
            positives: Vec::new(),
        };
    }

    let mut issues = Vec::new();
    let mut positives = Vec::new();
    let range = activity.temperature;

    if reading.temperature < range.min {
        issues.push(format!(
            "Temperature is too cold ({}°C, ideal: {}-{}°C)",
            reading.temperature, range.min, range.max
        ));
    } else if reading.temperature > range.max {
        issues.push(format!(
            "Temperature is too hot ({}°C, ideal: {}-{}°C)",
            reading.temperature, range.min, range.max
        ));
    } else {
        positives.push(format!("Temperature is perfect ({}°C)", reading.temperature));
    }

    if reading.humidity > activity.humidity_max {
        issues.push(format!(
            "Humidity is too high ({}%, ideal: ≤{}%)",
            reading.humidity, activity.humidity_max
        ));
    } else {
        positives.push(format!("Humidity is comfortable ({}%)", reading.humidity));
    }

    if reading.wind_speed > activity.wind_speed_max {
        issues.push(format!(
            "Wind is too strong ({} m/s, ideal: ≤{} m/s)",
            reading.wind_speed, activity.wind_speed_max
        ));
    } else {
        positives.push(format!("Wind conditions are good ({} m/s)", reading.wind_speed));
    }

    if reading.visibility < activity.visibility_min {
        issues.push(format!(
            "Visibility is poor ({} km, ideal: ≥{} km)",
            reading.visibility, activity.visibility_min
        ));
    } else {
        positives.push(format!("Visibility is excellent ({} km)", reading.visibility));
    }

    if reading.is_rainy() && activity.key != RAIN_TOLERANT_ACTIVITY {
        issues.push("Current rain conditions may affect outdoor activities".to_string());
    }

    let suitable = issues.is_empty();
    let mut message = if suitable {
        format!(
            "✅ Yes! The weather is excellent for {}!\n\nPositive conditions:\n{}",
            activity.key,
            bullet_list(&positives)
        )
    } else {
        format!(
            "⚠️ The weather may not be ideal for {}.\n\nConcerns:\n{}",
            activity.key,
            bullet_list(&issues)
        )
    };

    if !suitable && !positives.is_empty() {
        message.push_str("\n\nGood conditions:\n");
        message.push_str(&bullet_list(&positives));
    }

    message.push_str("\n\n");
    message.push_str(activity.advisory);

    if issues.len() > INDOOR_SUGGESTION_THRESHOLD {
        message.push_str(
            "\n\n💡 Consider indoor alternatives like movies, shopping, reading, or gaming instead!",
        );
    }

    Suitability {
        suitable,
        message,
        severity: if suitable { Severity::Success } else { Severity::Warning },
        issues,
        positives,
    }
}

/// Check an activity by name.
///
/// Unknown activities are not an error: they produce an informational
/// answer pointing the user at the activities we do know about.
pub fn advise_activity(key: &str, reading: &WeatherReading) -> Suitability {
    match find_activity(key) {
        Some(profile) => check_suitability(profile, reading),
        None => Suitability {
            suitable: false,
            message: format!(
                "I don't have specific guidelines for {}. \
                Try asking about sports, indoor activities, or entertainment options!",
                key
            ),
            severity: Severity::Info,
            issues: Vec::new(),
            positives: Vec::new(),
        },
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
