//! `Omen` - Weather haikus for the sky outside
//!
//! This library classifies current conditions into one of a fixed set of
//! categories, picks a themed haiku for the category and publishes it to a
//! small shared record that a widget reads.

pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;
pub mod service;
pub mod store;
pub mod weather;
pub mod widget;

// Re-export core types for public API
pub use classifier::{
    FeelsLike, RawTemperature, TemperatureAdjustment, TemperatureStrategy, WeatherClassifier,
    classify,
};
pub use config::OmenConfig;
pub use error::OmenError;
pub use messages::{FALLBACK_MESSAGE, MessageSelector, MessageTable, select_message};
pub use models::{Condition, Observation, RawObservation};
pub use service::{OmenService, Reading};
pub use store::{FjallStore, MemoryStore, SharedStore, SharedWeatherState};
pub use weather::{ObservationSource, OpenMeteoClient};
pub use widget::{Timeline, WidgetEntry, WidgetProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, OmenError>;
