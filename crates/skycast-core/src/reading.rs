//! Weather reading snapshot supplied by the caller

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::Result;

/// A single snapshot of weather measurements for one location.
///
/// Field names follow the camelCase JSON shape produced by the weather
/// client. Every field is required; zero is a valid humidity or wind value,
/// so a missing field is rejected at deserialization instead of defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub city: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Degrees Celsius
    pub feels_like: f64,
    /// Percent, 0-100
    pub humidity: f64,
    /// Meters per second
    pub wind_speed: f64,
    /// Compass degrees, 0-359
    pub wind_direction: f64,
    /// Kilometers
    pub visibility: f64,
    /// Hectopascals
    pub pressure: f64,
    /// Percent, 0-100
    pub cloudiness: f64,
    pub condition: String,
    pub description: String,
}

impl WeatherReading {
    /// Whether the condition or description mentions rain
    pub fn is_rainy(&self) -> bool {
        self.condition.to_lowercase().contains("rain")
            || self.description.to_lowercase().contains("rain")
    }
}

/// Load a reading from a JSON file
pub async fn load_reading(path: impl AsRef<Path>) -> Result<WeatherReading> {
    let content = fs::read_to_string(path.as_ref()).await?;
    let reading = serde_json::from_str(&content)?;
    Ok(reading)
}
