//! Turn orchestration: activity rules, then chat provider, then briefing

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use skycast_core::{
    ChatConfig, ChatProvider, ChatRequest, Error, Result, Severity, WeatherReading,
    check_suitability, detect_activity, generate_briefing,
};

/// Which stage of the fallback chain produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Activity,
    Provider,
    Briefing,
}

/// Assistant answer, rendered verbatim by the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub message: String,
    pub severity: Severity,
    pub source: ReplySource,
}

/// Answers one utterance at a time against the current weather.
///
/// Recognized activities are answered by the rule engine without touching
/// the provider. Anything else goes to the chat provider once; if that
/// fails for any reason, or no provider is configured, the local briefing
/// is returned instead. There is no retry.
pub struct Assistant {
    provider: Option<Arc<dyn ChatProvider>>,
    config: ChatConfig,
}

impl Assistant {
    /// Create an assistant that never leaves the machine
    pub fn offline() -> Self {
        Self {
            provider: None,
            config: ChatConfig::default(),
        }
    }

    /// Create an assistant backed by a chat provider
    pub fn with_provider(provider: Arc<dyn ChatProvider>) -> Self {
        let config = ChatConfig {
            model_id: provider.model_id().to_string(),
            ..Default::default()
        };

        Self {
            provider: Some(provider),
            config,
        }
    }

    /// Bound the provider call
    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.config.timeout = duration;
        self
    }

    /// Check if a chat provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer an utterance about the given reading
    pub async fn respond(&self, utterance: &str, reading: &WeatherReading) -> Reply {
        if let Some(activity) = detect_activity(utterance) {
            debug!(activity = activity.key, "answering from activity profile");
            let result = check_suitability(activity, reading);
            return Reply {
                message: result.message,
                severity: result.severity,
                source: ReplySource::Activity,
            };
        }

        if let Some(ref provider) = self.provider {
            if utterance.trim().is_empty() {
                debug!("blank question, skipping chat provider");
            } else {
                match self.ask_provider(provider.as_ref(), utterance, reading).await {
                    Ok(text) => {
                        return Reply {
                            message: text,
                            severity: Severity::Info,
                            source: ReplySource::Provider,
                        };
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            provider = provider.model_id(),
                            "chat provider failed, using local briefing"
                        );
                    }
                }
            }
        }

        let briefing = generate_briefing(reading);
        Reply {
            message: briefing.message,
            severity: briefing.severity,
            source: ReplySource::Briefing,
        }
    }

    async fn ask_provider(
        &self,
        provider: &dyn ChatProvider,
        utterance: &str,
        reading: &WeatherReading,
    ) -> Result<String> {
        let request = ChatRequest::new(utterance).with_weather(reading.clone());

        let call = provider.chat_with_config(&request, &self.config);
        let reply = match timeout(self.config.timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(Error::Timeout(
                    "Chat provider did not answer in time".to_string(),
                ));
            }
        };

        let text = reply.text.trim();
        if text.is_empty() {
            return Err(Error::ChatProvider("Chat provider returned an empty answer".to_string()));
        }

        Ok(text.to_string())
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::offline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skycast_core::ChatReply;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Answer(&'static str),
        Fail,
        Stall,
    }

    struct MockProvider {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatProvider for MockProvider {
        async fn chat(&self, request: &ChatRequest) -> Result<ChatReply> {
            self.chat_with_config(request, &ChatConfig::default()).await
        }

        async fn chat_with_config(
            &self,
            request: &ChatRequest,
            config: &ChatConfig,
        ) -> Result<ChatReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(request.weather.is_some());

            match self.behavior {
                Behavior::Answer(text) => Ok(ChatReply {
                    text: text.to_string(),
                    model_id: config.model_id.clone(),
                }),
                Behavior::Fail => Err(Error::Network("connection refused".to_string())),
                Behavior::Stall => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Err(Error::Other("should have timed out".to_string()))
                }
            }
        }

        fn model_id(&self) -> &str {
            "mock-model"
        }
    }

    fn reading(temperature: f64, description: &str) -> WeatherReading {
        WeatherReading {
            city: "Bengaluru".to_string(),
            temperature,
            feels_like: temperature,
            humidity: 50.0,
            wind_speed: 3.0,
            wind_direction: 90.0,
            visibility: 10.0,
            pressure: 1011.0,
            cloudiness: 10.0,
            condition: "Clear".to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_activity_question_skips_provider() {
        let mock = MockProvider::new(Behavior::Answer("unused"));
        let assistant = Assistant::with_provider(mock.clone());

        let reply = assistant
            .respond("Is this weather good for cricket?", &reading(25.0, "clear sky"))
            .await;

        assert_eq!(reply.source, ReplySource::Activity);
        assert_eq!(reply.severity, Severity::Success);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_answer_used_verbatim() {
        let mock = MockProvider::new(Behavior::Answer("  Honey never spoils.  "));
        let assistant = Assistant::with_provider(mock.clone());

        let reply = assistant.respond("Tell me a fun fact", &reading(25.0, "clear sky")).await;

        assert_eq!(reply.message, "Honey never spoils.");
        assert_eq!(reply.severity, Severity::Info);
        assert_eq!(reply.source, ReplySource::Provider);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_briefing() {
        let mock = MockProvider::new(Behavior::Fail);
        let assistant = Assistant::with_provider(mock.clone());
        let weather = reading(22.0, "clear sky");

        let reply = assistant.respond("what should I do inside today", &weather).await;

        assert_eq!(reply.source, ReplySource::Briefing);
        assert_eq!(reply.message, generate_briefing(&weather).message);
        assert_eq!(reply.severity, Severity::Success);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_provider_answer_falls_back() {
        let mock = MockProvider::new(Behavior::Answer("   "));
        let assistant = Assistant::with_provider(mock.clone());

        let reply = assistant.respond("Tell me a fun fact", &reading(10.0, "mist")).await;

        assert_eq!(reply.source, ReplySource::Briefing);
        assert_eq!(reply.severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_provider_timeout_falls_back() {
        let mock = MockProvider::new(Behavior::Stall);
        let assistant =
            Assistant::with_provider(mock.clone()).with_timeout(Duration::from_millis(50));

        let reply = assistant.respond("How windy is it now?", &reading(25.0, "clear sky")).await;

        assert_eq!(reply.source, ReplySource::Briefing);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_offline_uses_briefing() {
        let assistant = Assistant::offline();
        assert!(!assistant.has_provider());

        let reply = assistant
            .respond("what should I do inside today", &reading(18.0, "light rain"))
            .await;

        assert_eq!(reply.source, ReplySource::Briefing);
        assert_eq!(reply.severity, Severity::Info);
        assert!(!reply.message.is_empty());
    }

    #[tokio::test]
    async fn test_blank_utterance_skips_provider() {
        let mock = MockProvider::new(Behavior::Answer("unused"));
        let assistant = Assistant::with_provider(mock.clone());

        let reply = assistant.respond("   ", &reading(25.0, "clear sky")).await;

        assert_eq!(reply.source, ReplySource::Briefing);
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_provider_model_carried_into_config() {
        let assistant = Assistant::with_provider(MockProvider::new(Behavior::Fail));
        assert!(assistant.has_provider());
        assert_eq!(assistant.config.model_id, "mock-model");
    }
}
