//! OpenAI chat completions integration for SkyCast
//!
//! This crate provides the OpenAI implementation of the ChatProvider trait.

mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use skycast_core::{ChatConfig, ChatProvider, ChatReply, ChatRequest, Error, Result};
