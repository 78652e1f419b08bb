//! Conversation history for one chat session
//!
//! Append-only: turns are never edited or removed while the session lives,
//! and nothing is persisted once it ends.

use serde::Serialize;
use tracing::debug;

pub use crate::llm::Role;

/// One message exchanged in the chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered record of all turns in a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and return a reference to it
    pub fn push(&mut self, turn: Turn) -> &Turn {
        debug!(role = %turn.role, len = self.turns.len(), "ConversationHistory::push: called");
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// Turns in chronological order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a ConversationHistory {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
