//! Core types and the activity advisory engine for SkyCast
//!
//! This crate holds the weather reading model, the static activity profile
//! table and the three pure functions that turn a reading into guidance:
//! activity detection, suitability scoring and the generic weather briefing.
//! It also defines the chat provider seam used by the orchestration layer.

pub mod activity;
pub mod briefing;
pub mod chat;
pub mod error;
pub mod reading;
pub mod suitability;
pub mod types;

#[cfg(test)]
mod tests;

pub use activity::{
    ACTIVITY_PROFILES, ActivityProfile, TemperatureRange, detect_activity, find_activity,
};
pub use briefing::generate_briefing;
pub use chat::{ChatConfig, ChatProvider, ChatReply, ChatRequest};
pub use error::{Error, Result};
pub use reading::{WeatherReading, load_reading};
pub use suitability::{Suitability, advise_activity, check_suitability};
pub use types::*;
