//! Error types and handling for the Omen application

use thiserror::Error;

/// Main error type for the Omen application
#[derive(Error, Debug)]
pub enum OmenError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Observation or input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Coordinates missing or out of range
    #[error("Location error: {message}")]
    Location { message: String },

    /// Transport failures and non-success HTTP statuses
    #[error("Network error: {message}")]
    Network { message: String },

    /// Weather API payload could not be decoded
    #[error("Decoding error: {message}")]
    Decoding { message: String },

    /// Shared store operation errors
    #[error("Store error: {message}")]
    Store { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl OmenError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new location error
    pub fn location<S: Into<String>>(message: S) -> Self {
        Self::Location {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decoding error
    pub fn decoding<S: Into<String>>(message: S) -> Self {
        Self::Decoding {
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            OmenError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            OmenError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            OmenError::Location { .. } => {
                "Unable to determine your location. Please try again.".to_string()
            }
            OmenError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            OmenError::Decoding { .. } => {
                "The weather service answered with something unexpected.".to_string()
            }
            OmenError::Store { .. } => {
                "Shared store operation failed. You may need to clear the store directory."
                    .to_string()
            }
            OmenError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            OmenError::General { message } => message.clone(),
        }
    }

    /// Themed haiku shown in place of a weather haiku when a collaborator fails
    #[must_use]
    pub fn haiku(&self) -> &'static str {
        match self {
            OmenError::Config { .. } | OmenError::Validation { .. } => {
                "Path leads to nowhere\nDigital gates sealed shut tight\nThe way is broken"
            }
            OmenError::Network { .. } => {
                "Silent connection\nWhispers lost in digital\nMist, await return"
            }
            OmenError::Decoding { .. } => {
                "Numbers turn to ash\nData writhes, resists our grasp\nKnowledge slips away"
            }
            OmenError::Location { .. } => {
                "Coordinates lost\nIn void between here and there\nThe map bleeds shadows"
            }
            OmenError::Store { .. } | OmenError::Io { .. } | OmenError::General { .. } => {
                "Ancient error lurks\nBeyond mortal comprehension\nDarkness takes its toll"
            }
        }
    }
}

impl From<reqwest_middleware::Error> for OmenError {
    fn from(err: reqwest_middleware::Error) -> Self {
        OmenError::network(err.to_string())
    }
}

impl From<reqwest::Error> for OmenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OmenError::decoding(err.to_string())
        } else {
            OmenError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OmenError {
    fn from(err: serde_json::Error) -> Self {
        OmenError::decoding(err.to_string())
    }
}

impl From<postcard::Error> for OmenError {
    fn from(err: postcard::Error) -> Self {
        OmenError::store(err.to_string())
    }
}

impl From<tokio::task::JoinError> for OmenError {
    fn from(err: tokio::task::JoinError) -> Self {
        OmenError::store(format!("store task failed: {err}"))
    }
}
