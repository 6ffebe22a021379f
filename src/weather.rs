//! Current-conditions client for the Open-Meteo API
//!
//! Fetches the handful of `current` fields the classifier needs, converts them
//! to °F / mph and hands back a validated [`Observation`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::instrument;

use crate::config::WeatherConfig;
use crate::models::{Observation, RawObservation};
use crate::{OmenError, Result};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation,snowfall,thunderstorm_probability";

/// Anything that can produce the current observation for a coordinate
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<Observation>;
}

/// Open-Meteo client with timeout and transient-error retries
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("omen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for the current conditions at a coordinate.
    ///
    /// Wind is requested in m/s explicitly; the service default is km/h.
    #[must_use]
    pub fn request_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={latitude}&longitude={longitude}&current={CURRENT_FIELDS}&wind_speed_unit=ms",
            self.base_url
        )
    }
}

#[async_trait]
impl ObservationSource for OpenMeteoClient {
    #[instrument(name = "fetch_current", level = "debug", skip(self))]
    async fn current(&self, latitude: f64, longitude: f64) -> Result<Observation> {
        validate_coordinates(latitude, longitude)?;

        let url = self.request_url(latitude, longitude);
        tracing::debug!(%url, "Calling the API");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OmenError::network(format!(
                "Invalid server response: HTTP {status}"
            )));
        }

        let body = response.text().await?;
        let raw = parse_current(&body)?;
        Observation::from_metric(&raw)
    }
}

/// Reject coordinates no weather service would accept
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(OmenError::location(format!(
            "latitude {latitude} is outside -90..90"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(OmenError::location(format!(
            "longitude {longitude} is outside -180..180"
        )));
    }
    Ok(())
}

/// Decode the `current` block of an Open-Meteo forecast response
pub fn parse_current(body: &str) -> Result<RawObservation> {
    let response: openmeteo::ForecastResponse = serde_json::from_str(body)?;
    Ok(response.current)
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use super::RawObservation;
    use serde::Deserialize;

    /// Forecast response carrying only the `current` block
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: RawObservation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.419998,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "elevation": 38.0,
        "current_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "wind_speed_10m": "m/s"
        },
        "current": {
            "time": "2025-03-16T12:00",
            "interval": 900,
            "temperature_2m": 21.0,
            "relative_humidity_2m": 48,
            "wind_speed_10m": 2.0,
            "precipitation": 0.0,
            "snowfall": 0.0,
            "thunderstorm_probability": null
        }
    }"#;

    fn client(base_url: &str) -> OpenMeteoClient {
        OpenMeteoClient::new(&WeatherConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            max_retries: 0,
        })
        .unwrap()
    }

    #[test]
    fn test_request_url() {
        let url = client("https://api.open-meteo.com/v1/").request_url(52.52, 13.41);
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert!(url.contains("latitude=52.52"));
        assert!(url.contains("longitude=13.41"));
        assert!(url.contains("relative_humidity_2m"));
        assert!(url.contains("thunderstorm_probability"));
        assert!(url.ends_with("wind_speed_unit=ms"));
    }

    #[test]
    fn test_parse_current_fixture() {
        let raw = parse_current(FIXTURE).unwrap();
        assert_eq!(raw.temperature_c, 21.0);
        assert_eq!(raw.relative_humidity, 48);
        assert_eq!(raw.snowfall, Some(0.0));
        assert_eq!(raw.thunderstorm_probability, None);

        let observation = Observation::from_metric(&raw).unwrap();
        assert!((observation.temperature_f() - 69.8).abs() < 1e-9);
    }

    #[test]
    fn test_parse_current_rejects_garbage() {
        let err = parse_current(r#"{"hourly": {}}"#).unwrap_err();
        assert!(matches!(err, OmenError::Decoding { .. }));
        assert!(parse_current("not json").is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(0.0, 0.0).is_ok());
        assert!(validate_coordinates(90.0, -180.0).is_ok());
        assert!(matches!(
            validate_coordinates(90.5, 0.0),
            Err(OmenError::Location { .. })
        ));
        assert!(validate_coordinates(0.0, 181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[tokio::test]
    async fn test_invalid_coordinates_fail_before_request() {
        let err = client("http://127.0.0.1:9").current(123.0, 0.0).await.unwrap_err();
        assert!(matches!(err, OmenError::Location { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let err = client("http://127.0.0.1:9").current(10.0, 10.0).await.unwrap_err();
        assert!(matches!(err, OmenError::Network { .. }), "{err}");
    }
}
