//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing credentials: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_display() {
        let err = LlmError::RateLimited {
            retry_after: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 60s");
    }

    #[test]
    fn test_display_includes_message() {
        let err = LlmError::ApiError {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: You exceeded your current quota");

        let err = LlmError::MissingApiKey("OPENAI_API_KEY".to_string());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
