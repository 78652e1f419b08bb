//! LLM client module
//!
//! Provides the `LlmClient` seam and the OpenAI implementation behind it.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, TokenUsage};

use crate::config::LlmConfig;

/// Create an LLM client from configuration
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(model = %config.model, "create_client: called");
    Ok(Arc::new(OpenAIClient::from_config(config)?))
}
