//! Mapping provider error types

use thiserror::Error;

/// Errors that can occur talking to the mapping provider
#[derive(Debug, Error)]
pub enum MapsError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("{status}: {message}")]
    Status { status: String, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing credentials: set the {0} environment variable")]
    MissingApiKey(String),
}

impl MapsError {
    /// Build a status error, falling back to the bare status when the provider gave no message
    pub fn status(status: impl Into<String>, message: Option<String>) -> Self {
        let status = status.into();
        let message = message.unwrap_or_else(|| format!("request failed with status {}", status));
        MapsError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_provider_message() {
        let err = MapsError::status("REQUEST_DENIED", Some("The provided API key is invalid.".to_string()));
        assert_eq!(err.to_string(), "REQUEST_DENIED: The provided API key is invalid.");
    }

    #[test]
    fn test_status_without_message() {
        let err = MapsError::status("OVER_QUERY_LIMIT", None);
        assert_eq!(err.to_string(), "OVER_QUERY_LIMIT: request failed with status OVER_QUERY_LIMIT");
    }
}
