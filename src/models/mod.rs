//! Data models for the Omen application
//!
//! - Observation: raw and unit-converted weather readings
//! - Condition: the discrete category produced by the classifier

pub mod condition;
pub mod observation;

// Re-export all public types for convenient access
pub use condition::Condition;
pub use observation::{Observation, RawObservation, celsius_to_fahrenheit, mps_to_mph};
