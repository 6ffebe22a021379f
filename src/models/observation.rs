//! Weather observation model and unit conversion

use serde::{Deserialize, Serialize};

use crate::{OmenError, Result};

/// Miles per hour in one metre per second, as used by the weather service adapter
pub const MPS_TO_MPH: f64 = 2.237;

/// Current conditions as delivered by Open-Meteo (metric units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Air temperature at 2 m in Celsius
    #[serde(rename = "temperature_2m")]
    pub temperature_c: f64,
    /// Relative humidity at 2 m in percent
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: u8,
    /// Wind speed at 10 m in m/s
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed_ms: f64,
    /// Precipitation in mm
    pub precipitation: f64,
    /// Snowfall in mm, absent for some models
    #[serde(default)]
    pub snowfall: Option<f64>,
    /// Thunderstorm probability in percent, often null
    #[serde(default)]
    pub thunderstorm_probability: Option<u8>,
}

/// Validated observation in the units the classifier works with (°F, mph)
///
/// Fields are private: the only ways in are [`Observation::new`] and
/// [`Observation::from_metric`], both of which reject malformed values, so
/// every `Observation` is within the classifier's domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    temperature_f: f64,
    relative_humidity: u8,
    wind_speed_mph: f64,
    precipitation_mm: f64,
    snowfall_mm: f64,
    thunderstorm_probability: Option<u8>,
}

impl Observation {
    /// Build an observation from already converted values
    pub fn new(
        temperature_f: f64,
        relative_humidity: u8,
        wind_speed_mph: f64,
        precipitation_mm: f64,
        snowfall_mm: f64,
        thunderstorm_probability: Option<u8>,
    ) -> Result<Self> {
        let observation = Self {
            temperature_f,
            relative_humidity,
            wind_speed_mph,
            precipitation_mm,
            snowfall_mm,
            thunderstorm_probability,
        };
        observation.validate()?;
        Ok(observation)
    }

    /// Convert a metric API reading and validate it
    pub fn from_metric(raw: &RawObservation) -> Result<Self> {
        Self::new(
            celsius_to_fahrenheit(raw.temperature_c),
            raw.relative_humidity,
            mps_to_mph(raw.wind_speed_ms),
            raw.precipitation,
            raw.snowfall.unwrap_or(0.0),
            raw.thunderstorm_probability,
        )
    }

    fn validate(&self) -> Result<()> {
        let finite = [
            ("temperature", self.temperature_f),
            ("wind speed", self.wind_speed_mph),
            ("precipitation", self.precipitation_mm),
            ("snowfall", self.snowfall_mm),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(OmenError::validation(format!("{name} must be a finite number")));
        }

        if self.relative_humidity > 100 {
            return Err(OmenError::validation(format!(
                "relative humidity {}% is outside 0-100",
                self.relative_humidity
            )));
        }
        if self.wind_speed_mph < 0.0 {
            return Err(OmenError::validation("wind speed cannot be negative"));
        }
        if self.precipitation_mm < 0.0 {
            return Err(OmenError::validation("precipitation cannot be negative"));
        }
        if self.snowfall_mm < 0.0 {
            return Err(OmenError::validation("snowfall cannot be negative"));
        }
        if let Some(probability) = self.thunderstorm_probability
            && probability > 100
        {
            return Err(OmenError::validation(format!(
                "thunderstorm probability {probability}% is outside 0-100"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn temperature_f(&self) -> f64 {
        self.temperature_f
    }

    #[must_use]
    pub fn relative_humidity(&self) -> u8 {
        self.relative_humidity
    }

    #[must_use]
    pub fn wind_speed_mph(&self) -> f64 {
        self.wind_speed_mph
    }

    #[must_use]
    pub fn precipitation_mm(&self) -> f64 {
        self.precipitation_mm
    }

    #[must_use]
    pub fn snowfall_mm(&self) -> f64 {
        self.snowfall_mm
    }

    #[must_use]
    pub fn thunderstorm_probability(&self) -> Option<u8> {
        self.thunderstorm_probability
    }

    /// Format temperature with unit, truncated like the watch display
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°F", self.temperature_f.trunc() as i64)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} mph", self.wind_speed_mph)
    }

    /// Format precipitation with unit
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        format!("{:.1} mm", self.precipitation_mm)
    }
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert metres per second to miles per hour
#[must_use]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}
