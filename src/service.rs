//! Fetch, classify, pick a haiku, publish

use serde::Serialize;

use crate::Result;
use crate::classifier::{TemperatureAdjustment, WeatherClassifier};
use crate::messages::MessageSelector;
use crate::models::{Condition, Observation};
use crate::store::{SharedStore, SharedWeatherState};
use crate::weather::ObservationSource;

/// Outcome of one refresh cycle
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub observation: Observation,
    pub condition: Condition,
    pub haiku: String,
}

impl Reading {
    /// Label/value rows for the details view. Thunder only shows above 30%.
    #[must_use]
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let observation = &self.observation;
        let mut rows = vec![
            ("Temperature", observation.format_temperature()),
            ("Condition", self.condition.to_string()),
            ("Humidity", format!("{}%", observation.relative_humidity())),
            ("Wind", observation.format_wind()),
            ("Rain", observation.format_precipitation()),
        ];
        if let Some(probability) = observation.thunderstorm_probability()
            && probability > 30
        {
            rows.push(("Thunder", format!("{probability}%")));
        }
        rows
    }
}

pub struct OmenService<W, A, S> {
    source: W,
    classifier: WeatherClassifier<A>,
    selector: MessageSelector,
    state: SharedWeatherState<S>,
}

impl<W, A, S> OmenService<W, A, S>
where
    W: ObservationSource,
    A: TemperatureAdjustment,
    S: SharedStore,
{
    pub fn new(
        source: W,
        classifier: WeatherClassifier<A>,
        selector: MessageSelector,
        store: S,
    ) -> Self {
        Self {
            source,
            classifier,
            selector,
            state: SharedWeatherState::new(store),
        }
    }

    /// Classify an observation and pick its haiku without touching the store
    #[must_use]
    pub fn interpret(&self, observation: Observation) -> Reading {
        let condition = self.classifier.classify(&observation);
        let haiku = self.selector.select(condition);
        Reading {
            observation,
            condition,
            haiku,
        }
    }

    /// Run one full cycle for a coordinate. Nothing is published on failure.
    #[tracing::instrument(name = "refresh", skip(self))]
    pub async fn refresh(&self, latitude: f64, longitude: f64) -> Result<Reading> {
        let observation = self.source.current(latitude, longitude).await?;
        let reading = self.interpret(observation);
        tracing::info!(condition = %reading.condition, "Weather condition determined");

        self.state.publish(&reading.haiku).await?;
        Ok(reading)
    }

    pub fn state(&self) -> &SharedWeatherState<S> {
        &self.state
    }
}
