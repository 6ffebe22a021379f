//! Discrete weather conditions produced by the classifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// One mutually exclusive weather category.
///
/// The first ten variants are driven by precipitation, wind and humidity
/// signals; the remaining twelve are temperature bands, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Thunderstorm,
    Snowy,
    Downpour,
    Rainy,
    Drizzle,
    Stormy,
    Windy,
    Foggy,
    Cloudy,
    PartlyCloudy,
    /// ≥100°F
    Hellscape,
    /// 90-100°F
    Inferno,
    /// 80-90°F
    Sweltering,
    /// 70-80°F
    Sultry,
    /// 60-70°F
    Balmy,
    /// 50-60°F
    Temperate,
    /// 40-50°F
    Brisk,
    /// 30-40°F
    Chilly,
    /// 20-30°F
    Frosty,
    /// 10-20°F
    Frigid,
    /// 0-10°F
    Glacial,
    /// <0°F
    Polar,
}

impl Condition {
    /// Every condition, in classifier priority order
    pub const ALL: [Condition; 22] = [
        Condition::Thunderstorm,
        Condition::Snowy,
        Condition::Downpour,
        Condition::Rainy,
        Condition::Drizzle,
        Condition::Stormy,
        Condition::Windy,
        Condition::Foggy,
        Condition::Cloudy,
        Condition::PartlyCloudy,
        Condition::Hellscape,
        Condition::Inferno,
        Condition::Sweltering,
        Condition::Sultry,
        Condition::Balmy,
        Condition::Temperate,
        Condition::Brisk,
        Condition::Chilly,
        Condition::Frosty,
        Condition::Frigid,
        Condition::Glacial,
        Condition::Polar,
    ];

    /// Human-readable name, as shown in the details overlay
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snowy => "Snowy",
            Condition::Downpour => "Downpour",
            Condition::Rainy => "Rainy",
            Condition::Drizzle => "Drizzle",
            Condition::Stormy => "Stormy",
            Condition::Windy => "Windy",
            Condition::Foggy => "Foggy",
            Condition::Cloudy => "Cloudy",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Hellscape => "Hellscape",
            Condition::Inferno => "Inferno",
            Condition::Sweltering => "Sweltering",
            Condition::Sultry => "Sultry",
            Condition::Balmy => "Balmy",
            Condition::Temperate => "Temperate",
            Condition::Brisk => "Brisk",
            Condition::Chilly => "Chilly",
            Condition::Frosty => "Frosty",
            Condition::Frigid => "Frigid",
            Condition::Glacial => "Glacial",
            Condition::Polar => "Polar",
        }
    }

    /// True for the twelve conditions chosen purely by temperature
    #[must_use]
    pub fn is_temperature_band(self) -> bool {
        matches!(
            self,
            Condition::Hellscape
                | Condition::Inferno
                | Condition::Sweltering
                | Condition::Sultry
                | Condition::Balmy
                | Condition::Temperate
                | Condition::Brisk
                | Condition::Chilly
                | Condition::Frosty
                | Condition::Frigid
                | Condition::Glacial
                | Condition::Polar
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
