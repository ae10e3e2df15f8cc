//! Generic weather briefing used when no activity is recognized

use crate::reading::WeatherReading;
use crate::types::{Advisory, Severity};

/// Wind speed above which conditions count as windy, m/s
const WINDY_ABOVE: f64 = 15.0;

/// Humidity above which conditions count as humid, percent
const HUMID_ABOVE: f64 = 80.0;

/// Summarize the reading and give clothing and activity advice.
///
/// Independent of the question asked; always describes the whole reading.
pub fn generate_briefing(reading: &WeatherReading) -> Advisory {
    let temp = reading.temperature;
    let is_rainy = reading.is_rainy();
    let is_windy = reading.wind_speed > WINDY_ABOVE;
    let is_humid = reading.humidity > HUMID_ABOVE;

    let mut message = format!("🌤️ **Current Weather in {}:**\n\n", reading.city);
    message.push_str(&format!(
        "🌡️ Temperature: {}°C (feels like {}°C)\n",
        reading.temperature, reading.feels_like
    ));
    message.push_str(&format!("☁️ Condition: {}\n", reading.description));
    message.push_str(&format!("💧 Humidity: {}%\n", reading.humidity));
    message.push_str(&format!("💨 Wind: {} m/s\n", reading.wind_speed));
    message.push_str(&format!("👁️ Visibility: {} km\n", reading.visibility));
    message.push_str(&format!("📊 Pressure: {} hPa\n\n", reading.pressure));

    message.push_str("📋 **Plan Accordingly:**\n\n");
    message.push_str(temperature_advice(temp));
    message.push('\n');

    if is_rainy {
        message.push_str("☔ Rainy conditions - carry umbrella, consider indoor activities\n");
    }

    if is_windy {
        message.push_str("💨 Windy conditions - secure loose items, be cautious outdoors\n");
    }

    if is_humid {
        message.push_str("💧 High humidity - expect slower cooling, drink plenty of water\n");
    }

    message.push_str("\n🎯 **Recommended Activities:**\n");

    if is_rainy || temp < 5.0 || temp > 35.0 {
        message.push_str("• Indoor: Movies, shopping, reading, cooking, gaming\n");
        message.push_str("• Cozy activities: Hot drinks, board games, indoor workouts\n");
    } else if (20.0..=30.0).contains(&temp) && !is_windy {
        message.push_str("• Outdoor: Sports, picnics, hiking, cycling, photography\n");
        message.push_str("• Perfect for: Cricket, tennis, golf, running\n");
    } else {
        message.push_str("• Moderate outdoor activities: Walking, light sports\n");
        message.push_str("• Indoor alternatives: Gym, shopping, entertainment\n");
    }

    let severity = if (15.0..=30.0).contains(&temp) && !is_rainy {
        Severity::Success
    } else {
        Severity::Info
    };

    Advisory::new(message, severity)
}

fn temperature_advice(temp: f64) -> &'static str {
    if temp < 5.0 {
        "🧥 Very cold weather - dress warmly in layers, consider indoor activities"
    } else if temp < 15.0 {
        "🧤 Cool weather - light jacket recommended, good for brisk activities"
    } else if temp < 25.0 {
        "👕 Pleasant temperature - perfect for most outdoor activities"
    } else if temp < 35.0 {
        "☀️ Warm weather - stay hydrated, seek shade during peak hours"
    } else {
        "🔥 Very hot - limit outdoor exposure, stay indoors during midday"
    }
}
