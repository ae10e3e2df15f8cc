//! Local keyword-based chat provider that needs no API key

use async_trait::async_trait;

use skycast_core::{ChatConfig, ChatProvider, ChatReply, ChatRequest, Result, WeatherReading};

/// Answers simple measurement questions straight from the reading.
///
/// Questions it cannot place get a generic tip rather than an error, so
/// with this provider the briefing fallback only triggers on blank input.
pub struct QuickAnswerProvider;

impl QuickAnswerProvider {
    pub const MODEL_ID: &'static str = "quick-answer";

    pub fn new() -> Self {
        Self
    }

    /// Produce an answer for a question and optional reading
    pub fn answer(&self, message: &str, weather: Option<&WeatherReading>) -> String {
        if message.trim().is_empty() {
            return "Please enter your question.".to_string();
        }

        let text = message.to_lowercase();
        let place = weather
            .filter(|w| !w.city.is_empty())
            .map(|w| format!(" in {}", w.city))
            .unwrap_or_default();

        if let Some(w) = weather {
            if text.contains("temperature") {
                return format!(
                    "Current temperature{} is {}°C (feels like {}°C).",
                    place, w.temperature, w.feels_like
                );
            }
            if text.contains("wind") {
                return format!("Wind speed{} is {} m/s.", place, w.wind_speed);
            }
            if text.contains("humidity") {
                return format!("Humidity{} is {}%.", place, w.humidity);
            }
            if text.contains("pressure") {
                return format!("Pressure{} is {} hPa.", place, w.pressure);
            }
            if text.contains("visibility") {
                return format!("Visibility{} is {} km.", place, w.visibility);
            }
        }

        if text.contains("forecast") || text.contains("tomorrow") {
            return "I only see current conditions, so I can't forecast. \
                Ask me to summarize the weather now or check an activity instead."
                .to_string();
        }

        let mut tip = String::from("I may not know everything, but here is a tip based on your current weather");
        match weather.map(|w| w.description.as_str()).filter(|d| !d.is_empty()) {
            Some(description) => {
                tip.push_str(": ");
                tip.push_str(description);
                tip.push('.');
            }
            None => tip.push('.'),
        }
        tip.push_str(
            " Try asking me specific questions like \u{201c}Is it good for running?\u{201d}, \
            \u{201c}What\u{2019}s the wind speed?\u{201d}, or \u{201c}Suggest indoor activities\u{201d}.",
        );
        tip
    }
}

impl Default for QuickAnswerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for QuickAnswerProvider {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.chat_with_config(request, &ChatConfig::default()).await
    }

    async fn chat_with_config(
        &self,
        request: &ChatRequest,
        _config: &ChatConfig,
    ) -> Result<ChatReply> {
        Ok(ChatReply {
            text: self.answer(&request.message, request.weather.as_ref()),
            model_id: Self::MODEL_ID.to_string(),
        })
    }

    fn model_id(&self) -> &str {
        Self::MODEL_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> WeatherReading {
        WeatherReading {
            city: "Chennai".to_string(),
            temperature: 33.0,
            feels_like: 38.5,
            humidity: 74.0,
            wind_speed: 5.7,
            wind_direction: 120.0,
            visibility: 6.0,
            pressure: 1006.0,
            cloudiness: 40.0,
            condition: "Haze".to_string(),
            description: "haze".to_string(),
        }
    }

    #[test]
    fn test_measurement_questions() {
        let provider = QuickAnswerProvider::new();
        let weather = reading();

        let cases = [
            ("What's the temperature?", "Current temperature in Chennai is 33°C (feels like 38.5°C)."),
            ("How windy is it now?", "Wind speed in Chennai is 5.7 m/s."),
            ("humidity please", "Humidity in Chennai is 74%."),
            ("Air PRESSURE?", "Pressure in Chennai is 1006 hPa."),
            ("what's the visibility", "Visibility in Chennai is 6 km."),
        ];

        for (question, expected) in cases {
            assert_eq!(provider.answer(question, Some(&weather)), expected);
        }
    }

    #[test]
    fn test_blank_question() {
        let provider = QuickAnswerProvider::new();
        assert_eq!(provider.answer("  ", Some(&reading())), "Please enter your question.");
    }

    #[test]
    fn test_forecast_question() {
        let provider = QuickAnswerProvider::new();
        let answer = provider.answer("Will it rain tomorrow?", Some(&reading()));
        assert!(answer.starts_with("I only see current conditions"));
    }

    #[test]
    fn test_generic_tip_mentions_description() {
        let provider = QuickAnswerProvider::new();

        let answer = provider.answer("Tell me a fun fact", Some(&reading()));
        assert!(answer.starts_with("I may not know everything, but here is a tip based on your current weather: haze."));

        let answer = provider.answer("Tell me a fun fact", None);
        assert!(answer.starts_with("I may not know everything, but here is a tip based on your current weather. Try"));
    }

    #[test]
    fn test_measurement_without_reading_gets_tip() {
        let provider = QuickAnswerProvider::new();
        let answer = provider.answer("What's the temperature?", None);
        assert!(answer.starts_with("I may not know everything"));
    }

    #[tokio::test]
    async fn test_chat_reports_model() {
        let provider = QuickAnswerProvider::new();
        let request = ChatRequest::new("humidity?").with_weather(reading());
        let reply = provider.chat(&request).await.unwrap();

        assert_eq!(reply.text, "Humidity in Chennai is 74%.");
        assert_eq!(reply.model_id, "quick-answer");
    }
}
