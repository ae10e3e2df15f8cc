//! Chat provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Result;
use crate::reading::WeatherReading;

/// Configuration for a chat completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model_id: "gpt-4o-mini".to_string(),
            max_tokens: 400,
            temperature: 0.4,
            timeout: Duration::from_secs(30),
        }
    }
}

/// A free-text question with the weather it was asked about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub weather: Option<WeatherReading>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            weather: None,
        }
    }

    pub fn with_weather(mut self, weather: WeatherReading) -> Self {
        self.weather = Some(weather);
        self
    }
}

/// Answer returned by a chat provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub model_id: String,
}

/// Trait for chat providers (e.g., OpenAI, local heuristics)
///
/// Providers answer questions the rule engine does not recognize. Callers
/// treat every error as a signal to fall back to the local briefing, so
/// implementations should fail fast rather than retry.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Answer a question with the provider's default configuration
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Answer a question with custom configuration
    async fn chat_with_config(
        &self,
        request: &ChatRequest,
        config: &ChatConfig,
    ) -> Result<ChatReply>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
