//! Travel Companion - conversational travel assistant
//!
//! Relays travel questions to a language model and augments the session with
//! results from a mapping provider: nearby attractions, gas stations and
//! driving directions.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and OpenAI implementation
//! - [`maps`] - Maps client trait and Google Maps implementation
//! - [`travel`] - Recommendations and route lookups with tagged results
//! - [`companion`] - Travel prompt and the always-answers LLM adapter
//! - [`conversation`] - Append-only chat history
//! - [`orchestrator`] - One chat turn: user turn, reply, assistant turn
//! - [`repl`] - Interactive session
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod companion;
pub mod config;
pub mod conversation;
pub mod llm;
pub mod maps;
pub mod orchestrator;
pub mod repl;
pub mod travel;

// Re-export commonly used types
pub use companion::{CompanionReply, TravelCompanion};
pub use config::{Config, LlmConfig, MapsConfig};
pub use conversation::{ConversationHistory, Role, Turn};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient};
pub use maps::{DirectionsRequest, GeoPoint, GoogleMapsClient, MapsClient, MapsError, Place, PlaceCategory, Route};
pub use orchestrator::{TurnError, TurnOrchestrator};
pub use travel::{
    RecommendationQuery, RecommendationResult, RouteFormError, RouteOutcome, RoutePlan, fetch_recommendations,
    fetch_route, plan_route,
};
