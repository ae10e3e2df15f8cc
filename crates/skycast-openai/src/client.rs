//! OpenAI chat completions client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use skycast_core::{ChatConfig, ChatProvider, ChatReply, ChatRequest, Error, Result};

use crate::config::OpenAiConfig;

const SYSTEM_PROMPT: &str = "You are a helpful assistant for a weather app. Answer any question clearly. \
    If the user asks about local conditions, use the weather context if available. \
    If the question is unrelated to weather, still give a concise, helpful answer.";

/// OpenAI chat completions client
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

impl OpenAiClient {
    /// Create a new OpenAI client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new OpenAI client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'))
    }

    /// System prompt with the reading attached as JSON context
    fn build_system_prompt(request: &ChatRequest) -> Result<String> {
        let mut prompt = SYSTEM_PROMPT.to_string();

        if let Some(ref weather) = request.weather {
            let context = serde_json::to_string(weather)
                .map_err(|e| Error::Serialization(e.to_string()))?;
            prompt.push_str("\nWeather Context: ");
            prompt.push_str(&context);
        }

        Ok(prompt)
    }

    /// Perform the actual completion request
    async fn perform_chat(&self, request: &ChatRequest, config: &ChatConfig) -> Result<String> {
        let body = CompletionRequest {
            model: config.model_id.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: Self::build_system_prompt(request)?,
                },
                Message {
                    role: "user",
                    content: request.message.clone(),
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        debug!(model = %config.model_id, "sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .header("Content-Type", "application/json")
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = %status, body = %error_text, "chat completion request failed");
            return Err(Error::ChatProvider(format!(
                "OpenAI API request failed with status {}: {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let answer = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if answer.is_empty() {
            return Err(Error::ChatProvider("Empty response from OpenAI API".to_string()));
        }

        Ok(answer)
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let config = ChatConfig {
            model_id: self.config.model.clone(),
            ..Default::default()
        };
        self.chat_with_config(request, &config).await
    }

    async fn chat_with_config(
        &self,
        request: &ChatRequest,
        config: &ChatConfig,
    ) -> Result<ChatReply> {
        let chat_future = self.perform_chat(request, config);

        let text = match timeout(config.timeout, chat_future).await {
            Ok(result) => result?,
            Err(_) => return Err(Error::Timeout("Request timed out".to_string())),
        };

        Ok(ChatReply {
            text,
            model_id: config.model_id.clone(),
        })
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
