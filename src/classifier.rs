//! Weather condition classifier
//!
//! Maps a validated [`Observation`] to exactly one [`Condition`] through an
//! ordered cascade of guards. The order is part of the contract: raw value
//! ranges overlap between guards and only the evaluation order decides which
//! one wins.
//!
//! 1. thunderstorm probability > 30%
//! 2. any snowfall
//! 3. precipitation > 7.6 / 2.5 / 0.1 mm
//! 4. wind > 40 / 20 mph
//! 5. humidity > 90% with wind < 5 mph
//! 6. humidity > 80 / 65%
//! 7. temperature bands, hottest first, lower bound inclusive
//!
//! Only step 7 looks at temperature, and it looks at the value produced by the
//! classifier's [`TemperatureAdjustment`]. The default adjustment is the
//! identity; [`FeelsLike`] blends in humidity, wind and rain.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Condition, Observation};

const THUNDERSTORM_PROBABILITY_THRESHOLD: u8 = 30;

const DOWNPOUR_MM: f64 = 7.6;
const RAIN_MM: f64 = 2.5;
const DRIZZLE_MM: f64 = 0.1;

const STORM_WIND_MPH: f64 = 40.0;
const WINDY_MPH: f64 = 20.0;

const FOG_HUMIDITY: u8 = 90;
const FOG_MAX_WIND_MPH: f64 = 5.0;
const CLOUDY_HUMIDITY: u8 = 80;
const PARTLY_CLOUDY_HUMIDITY: u8 = 65;

/// Lower bounds (inclusive) of each temperature band, scanned top to bottom.
/// Anything below the last bound is [`Condition::Polar`].
const TEMPERATURE_BANDS: [(f64, Condition); 11] = [
    (100.0, Condition::Hellscape),
    (90.0, Condition::Inferno),
    (80.0, Condition::Sweltering),
    (70.0, Condition::Sultry),
    (60.0, Condition::Balmy),
    (50.0, Condition::Temperate),
    (40.0, Condition::Brisk),
    (30.0, Condition::Chilly),
    (20.0, Condition::Frosty),
    (10.0, Condition::Frigid),
    (0.0, Condition::Glacial),
];

/// Produces the temperature used for band lookup
pub trait TemperatureAdjustment: Debug + Send + Sync {
    /// Temperature in °F to classify by
    fn effective_temperature(&self, observation: &Observation) -> f64;
}

/// Classify by ambient temperature as measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawTemperature;

impl TemperatureAdjustment for RawTemperature {
    fn effective_temperature(&self, observation: &Observation) -> f64 {
        observation.temperature_f()
    }
}

/// Classify by a perceived temperature.
///
/// At or above 80°F this is the NWS heat index. Below 80°F it is the NWS wind
/// chill (only applied at or below 50°F with wind above 3 mph), minus 1°F of
/// evaporative cooling per mm of precipitation, capped at 5°F.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeelsLike;

impl FeelsLike {
    const MAX_EVAPORATIVE_COOLING_F: f64 = 5.0;
    const COOLING_PER_MM_F: f64 = 1.0;
}

impl TemperatureAdjustment for FeelsLike {
    fn effective_temperature(&self, observation: &Observation) -> f64 {
        let temperature = observation.temperature_f();
        if temperature >= 80.0 {
            return heat_index(temperature, f64::from(observation.relative_humidity()));
        }

        let chilled = wind_chill(temperature, observation.wind_speed_mph());
        let cooling = (observation.precipitation_mm() * Self::COOLING_PER_MM_F)
            .min(Self::MAX_EVAPORATIVE_COOLING_F);
        chilled - cooling
    }
}

/// Temperature strategy selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureStrategy {
    #[default]
    Raw,
    FeelsLike,
}

impl TemperatureAdjustment for TemperatureStrategy {
    fn effective_temperature(&self, observation: &Observation) -> f64 {
        match self {
            TemperatureStrategy::Raw => RawTemperature.effective_temperature(observation),
            TemperatureStrategy::FeelsLike => FeelsLike.effective_temperature(observation),
        }
    }
}

impl std::str::FromStr for TemperatureStrategy {
    type Err = crate::OmenError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "raw" => Ok(TemperatureStrategy::Raw),
            "feels_like" | "feels-like" => Ok(TemperatureStrategy::FeelsLike),
            other => Err(crate::OmenError::config(format!(
                "Invalid temperature strategy '{other}'. Must be one of: raw, feels_like"
            ))),
        }
    }
}

/// Weather condition classifier, generic over the temperature strategy
#[derive(Debug, Clone, Default)]
pub struct WeatherClassifier<A = RawTemperature> {
    adjustment: A,
}

impl WeatherClassifier<RawTemperature> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjustment: RawTemperature,
        }
    }
}

impl<A: TemperatureAdjustment> WeatherClassifier<A> {
    #[must_use]
    pub fn with_adjustment(adjustment: A) -> Self {
        Self { adjustment }
    }

    #[must_use]
    pub fn adjustment(&self) -> &A {
        &self.adjustment
    }

    /// Classify an observation. Total: always returns exactly one condition.
    #[must_use]
    pub fn classify(&self, observation: &Observation) -> Condition {
        let condition = self.classify_signals(observation).unwrap_or_else(|| {
            temperature_band(self.adjustment.effective_temperature(observation))
        });
        tracing::debug!(?observation, %condition, "Classified observation");
        condition
    }

    fn classify_signals(&self, observation: &Observation) -> Option<Condition> {
        if observation
            .thunderstorm_probability()
            .is_some_and(|p| p > THUNDERSTORM_PROBABILITY_THRESHOLD)
        {
            return Some(Condition::Thunderstorm);
        }

        if observation.snowfall_mm() > 0.0 {
            return Some(Condition::Snowy);
        }

        let precipitation = observation.precipitation_mm();
        if precipitation > DOWNPOUR_MM {
            return Some(Condition::Downpour);
        } else if precipitation > RAIN_MM {
            return Some(Condition::Rainy);
        } else if precipitation > DRIZZLE_MM {
            return Some(Condition::Drizzle);
        }

        let wind = observation.wind_speed_mph();
        if wind > STORM_WIND_MPH {
            return Some(Condition::Stormy);
        } else if wind > WINDY_MPH {
            return Some(Condition::Windy);
        }

        let humidity = observation.relative_humidity();
        if humidity > FOG_HUMIDITY && wind < FOG_MAX_WIND_MPH {
            return Some(Condition::Foggy);
        }

        if humidity > CLOUDY_HUMIDITY {
            Some(Condition::Cloudy)
        } else if humidity > PARTLY_CLOUDY_HUMIDITY {
            Some(Condition::PartlyCloudy)
        } else {
            None
        }
    }
}

/// Classify with the default (raw temperature) classifier
#[must_use]
pub fn classify(observation: &Observation) -> Condition {
    WeatherClassifier::new().classify(observation)
}

/// Band for a temperature in °F
#[must_use]
pub fn temperature_band(temperature_f: f64) -> Condition {
    TEMPERATURE_BANDS
        .iter()
        .find(|(lower_bound, _)| temperature_f >= *lower_bound)
        .map_or(Condition::Polar, |(_, condition)| *condition)
}

/// NWS heat index in °F
#[must_use]
pub fn heat_index(temperature_f: f64, relative_humidity: f64) -> f64 {
    let t = temperature_f;
    let rh = relative_humidity;

    let simple = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);
    if (simple + t) / 2.0 < 80.0 {
        return simple;
    }

    let mut hi = -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
        - 0.224_755_41 * t * rh
        - 0.006_837_83 * t * t
        - 0.054_817_17 * rh * rh
        + 0.001_228_74 * t * t * rh
        + 0.000_852_82 * t * rh * rh
        - 0.000_001_99 * t * t * rh * rh;

    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        hi -= ((13.0 - rh) / 4.0) * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        hi += ((rh - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }
    hi
}

/// NWS wind chill in °F; identity outside its defined range
#[must_use]
pub fn wind_chill(temperature_f: f64, wind_mph: f64) -> f64 {
    if temperature_f > 50.0 || wind_mph <= 3.0 {
        return temperature_f;
    }
    let v = wind_mph.powf(0.16);
    35.74 + 0.6215 * temperature_f - 35.75 * v + 0.4275 * temperature_f * v
}
