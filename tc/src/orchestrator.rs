//! Turn orchestration
//!
//! One user submission produces exactly two turns: the user's text, then the
//! companion's reply (an answer or an apology). The caller owns the history
//! and lends it out for the duration of the turn.

use thiserror::Error;
use tracing::{debug, info};

use crate::companion::TravelCompanion;
use crate::conversation::{ConversationHistory, Turn};

/// Reasons a submission is rejected before any turn is recorded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Message is empty")]
    EmptyInput,
}

/// Drives a chat turn through the companion
#[derive(Clone)]
pub struct TurnOrchestrator {
    companion: TravelCompanion,
}

impl TurnOrchestrator {
    pub fn new(companion: TravelCompanion) -> Self {
        Self { companion }
    }

    /// Record the user's text, ask the companion, record the reply
    ///
    /// Returns the assistant turn. Empty input is rejected and leaves the
    /// history untouched; once the user turn is appended the assistant turn
    /// always follows.
    pub async fn submit<'h>(&self, history: &'h mut ConversationHistory, text: &str) -> Result<&'h Turn, TurnError> {
        if text.is_empty() {
            debug!("submit: rejecting empty input");
            return Err(TurnError::EmptyInput);
        }

        debug!(history_len = history.len(), "submit: called");
        history.push(Turn::user(text));

        let reply = self.companion.complete(text).await;
        info!(
            apology = reply.is_apology(),
            history_len = history.len() + 1,
            "submit: turn complete"
        );
        Ok(history.push(Turn::assistant(reply.into_text())))
    }
}
