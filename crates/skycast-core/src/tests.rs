//! Snapshot tests for the advisory engine

#[cfg(test)]
mod snapshot_tests {
    use crate::{Severity, WeatherReading, detect_activity, generate_briefing};
    use insta::{assert_snapshot, assert_yaml_snapshot};

    fn pune() -> WeatherReading {
        WeatherReading {
            city: "Pune".to_string(),
            temperature: 27.0,
            feels_like: 29.0,
            humidity: 40.0,
            wind_speed: 3.5,
            wind_direction: 270.0,
            visibility: 10.0,
            pressure: 1010.0,
            cloudiness: 0.0,
            condition: "Clear".to_string(),
            description: "clear sky".to_string(),
        }
    }

    #[test]
    fn test_briefing_snapshot() {
        let briefing = generate_briefing(&pune());
        assert_eq!(briefing.severity, Severity::Success);

        assert_snapshot!(briefing.message.trim_end(), @r"
        🌤️ **Current Weather in Pune:**

        🌡️ Temperature: 27°C (feels like 29°C)
        ☁️ Condition: clear sky
        💧 Humidity: 40%
        💨 Wind: 3.5 m/s
        👁️ Visibility: 10 km
        📊 Pressure: 1010 hPa

        📋 **Plan Accordingly:**

        ☀️ Warm weather - stay hydrated, seek shade during peak hours

        🎯 **Recommended Activities:**
        • Outdoor: Sports, picnics, hiking, cycling, photography
        • Perfect for: Cricket, tennis, golf, running
        ");
    }

    #[test]
    fn test_severity_serialization_snapshot() {
        assert_yaml_snapshot!(
            vec![Severity::Success, Severity::Warning, Severity::Info],
            @r"
        - success
        - warning
        - info
        "
        );
    }

    #[test]
    fn test_detection_snapshot() {
        let questions = vec![
            "Is this weather good for cricket?",
            "What can I do indoors today?",
            "Summarize the current weather",
            "Is it good weather for a picnic?",
            "Tell me a fun fact",
            "How windy is it now?",
        ];

        let detected: Vec<_> = questions
            .iter()
            .map(|q| detect_activity(q).map(|p| p.key).unwrap_or("unmatched"))
            .collect();

        assert_yaml_snapshot!(detected, @r"
        - cricket
        - unmatched
        - unmatched
        - picnic
        - unmatched
        - unmatched
        ");
    }
}
