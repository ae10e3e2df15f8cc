//! Activity profiles and detection of activities in free text

use serde::Serialize;

/// Inclusive comfortable temperature range, degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// Weather tolerance thresholds for one named activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityProfile {
    /// Lowercase activity name, also the detection token
    pub key: &'static str,
    pub temperature: TemperatureRange,
    /// Highest acceptable humidity, percent
    pub humidity_max: f64,
    /// Highest acceptable wind speed, m/s
    pub wind_speed_max: f64,
    /// Lowest acceptable visibility, km
    pub visibility_min: f64,
    /// Indoor activities are suitable in any weather
    pub indoor: bool,
    /// Static advice shown with every suitability answer
    pub advisory: &'static str,
}

impl ActivityProfile {
    /// Activity name with its first letter capitalized
    pub fn display_name(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

const fn outdoor(
    key: &'static str,
    min: f64,
    max: f64,
    humidity_max: f64,
    wind_speed_max: f64,
    visibility_min: f64,
    advisory: &'static str,
) -> ActivityProfile {
    ActivityProfile {
        key,
        temperature: TemperatureRange { min, max },
        humidity_max,
        wind_speed_max,
        visibility_min,
        indoor: false,
        advisory,
    }
}

const fn indoor(key: &'static str, advisory: &'static str) -> ActivityProfile {
    ActivityProfile {
        key,
        temperature: TemperatureRange { min: -10.0, max: 45.0 },
        humidity_max: 100.0,
        wind_speed_max: 50.0,
        visibility_min: 0.0,
        indoor: true,
        advisory,
    }
}

/// Known activities. Detection scans this list in order, so the
/// declaration order decides which key wins when several match.
#[rustfmt::skip]
pub static ACTIVITY_PROFILES: &[ActivityProfile] = &[
    outdoor("cricket", 20.0, 32.0, 80.0, 7.0, 5.0,
        "Cricket requires moderate temperatures, low wind, and good visibility for optimal play."),
    outdoor("football", 10.0, 30.0, 85.0, 10.0, 3.0,
        "Football can be played in various conditions but extreme weather should be avoided."),
    outdoor("soccer", 10.0, 30.0, 85.0, 10.0, 3.0,
        "Soccer can be played in various conditions but extreme weather should be avoided."),
    outdoor("cycling", 5.0, 35.0, 90.0, 15.0, 2.0,
        "Cycling requires good visibility and manageable wind conditions for safety."),
    outdoor("hiking", 0.0, 35.0, 95.0, 20.0, 1.0,
        "Hiking can be done in various weather but visibility and extreme conditions matter."),
    outdoor("running", -5.0, 30.0, 85.0, 15.0, 2.0,
        "Running is possible in most conditions but extreme heat or cold should be avoided."),
    outdoor("tennis", 15.0, 35.0, 75.0, 8.0, 5.0,
        "Tennis requires calm conditions with minimal wind for fair play."),
    outdoor("golf", 10.0, 35.0, 80.0, 12.0, 5.0,
        "Golf requires good visibility and moderate wind conditions for accurate play."),
    outdoor("swimming", 22.0, 40.0, 90.0, 20.0, 1.0,
        "Swimming outdoors is best in warm weather with minimal wind for comfort."),
    outdoor("basketball", 5.0, 35.0, 85.0, 15.0, 3.0,
        "Basketball can be played in most conditions but extreme weather affects performance."),
    indoor("movie",
        "Movies are perfect indoor entertainment regardless of weather conditions!"),
    indoor("movies",
        "Movies are perfect indoor entertainment regardless of weather conditions!"),
    indoor("shopping",
        "Shopping malls and stores provide perfect indoor activities for any weather."),
    indoor("reading",
        "Reading is a wonderful indoor activity perfect for any weather condition."),
    indoor("cooking",
        "Cooking is a great indoor activity that works perfectly regardless of weather."),
    indoor("gaming",
        "Gaming is an excellent indoor entertainment option for any weather condition."),
    indoor("games",
        "Gaming is an excellent indoor entertainment option for any weather condition."),
    outdoor("picnic", 18.0, 28.0, 70.0, 10.0, 5.0,
        "Picnics require pleasant weather with minimal wind and no rain for enjoyment."),
    outdoor("photography", -5.0, 40.0, 90.0, 25.0, 2.0,
        "Photography can work in various conditions, though extreme weather may affect equipment."),
    outdoor("gardening", 10.0, 30.0, 85.0, 15.0, 3.0,
        "Gardening is best in mild weather conditions without strong winds or extreme temperatures."),
];

/// Detect which known activity an utterance mentions.
///
/// Plain substring containment on the lowercased text, first match in
/// table order. Not word-boundary aware: "gamesmanship" still matches
/// "games".
pub fn detect_activity(utterance: &str) -> Option<&'static ActivityProfile> {
    let utterance_lower = utterance.to_lowercase();

    ACTIVITY_PROFILES
        .iter()
        .find(|profile| utterance_lower.contains(profile.key))
}

/// Look up a profile by its exact key, ignoring case
pub fn find_activity(key: &str) -> Option<&'static ActivityProfile> {
    let key_lower = key.trim().to_lowercase();
    ACTIVITY_PROFILES.iter().find(|profile| profile.key == key_lower)
}
