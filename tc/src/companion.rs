//! Language-model adapter for travel questions
//!
//! Wraps every question in a fixed system instruction and prompt template,
//! and turns provider failures into an apology instead of an error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm::{CompletionRequest, LlmClient, LlmError};

/// System instruction sent with every question
pub const SYSTEM_PROMPT: &str = "You are a helpful AI Travel Companion.";

/// Prefix of the apology shown when the provider call fails
pub const APOLOGY_PREFIX: &str = "I apologize, but I encountered an error:";

/// Embed the user's text verbatim in the travel prompt
pub fn render_prompt(user_text: &str) -> String {
    format!(
        "As an AI Travel Companion, help the user with their travel needs.\n\
         User input: {user_text}\n\
         Provide helpful, concise responses focusing on:\n\
         1. Route planning\n\
         2. Attraction suggestions\n\
         3. Gas station locations\n\
         4. General travel advice\n"
    )
}

/// Result of asking the companion a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionReply {
    /// Text generated by the model
    Answer(String),
    /// The provider call failed; `error` is the underlying message
    Apology { error: String },
}

impl CompanionReply {
    /// Text to show the user; always non-empty for apologies
    pub fn into_text(self) -> String {
        match self {
            CompanionReply::Answer(text) => text,
            CompanionReply::Apology { error } => format!("{} {}", APOLOGY_PREFIX, error),
        }
    }

    pub fn is_apology(&self) -> bool {
        matches!(self, CompanionReply::Apology { .. })
    }
}

impl From<Result<String, LlmError>> for CompanionReply {
    fn from(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => CompanionReply::Answer(text),
            Err(e) => CompanionReply::Apology { error: e.to_string() },
        }
    }
}

/// Travel assistant backed by an LLM client
#[derive(Clone)]
pub struct TravelCompanion {
    llm: Arc<dyn LlmClient>,
}

impl TravelCompanion {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Ask one question; provider errors come back as `CompanionReply::Apology`
    pub async fn complete(&self, user_text: &str) -> CompanionReply {
        debug!(text_len = user_text.len(), "complete: called");
        let result = self.ask(user_text).await;
        if let Err(ref e) = result {
            warn!(error = %e, "complete: provider call failed, replying with apology");
        }
        CompanionReply::from(result)
    }

    async fn ask(&self, user_text: &str) -> Result<String, LlmError> {
        let request = CompletionRequest::single_turn(SYSTEM_PROMPT, render_prompt(user_text));
        let response = self.llm.complete(request).await?;

        response
            .content
            .filter(|text| !text.is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("no completion text returned".to_string()))
    }
}
