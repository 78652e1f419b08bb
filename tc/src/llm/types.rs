//! LLM request/response types
//!
//! These types model the OpenAI Chat Completions API closely enough to map
//! one-to-one onto the wire format, without leaking serde details of the
//! provider into the rest of the crate.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction, sent as the first message
    pub system_prompt: String,

    /// Messages following the system instruction
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Request with a system instruction and a single user message
    pub fn single_turn(system_prompt: impl Into<String>, user_text: impl Into<String>) -> Self {
        debug!("CompletionRequest::single_turn: called");
        Self {
            system_prompt: system_prompt.into(),
            messages: vec![Message::user(user_text)],
        }
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        debug!("Message::user: called");
        Self {
            role: Role::User,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text of the first choice (if any)
    pub content: Option<String>,

    /// Token usage reported by the provider
    pub usage: TokenUsage,
}

/// Token usage for logging
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
