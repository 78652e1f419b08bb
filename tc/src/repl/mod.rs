//! Interactive chat REPL
//!
//! Chat turns go through the orchestrator; `/route` and `/nearby` call the
//! maps adapters directly and leave the history untouched.

mod render;
mod session;

pub use render::{render_history, render_recommendations, render_route_plan, render_turn};
pub use session::{ReplSession, SlashCommand, SlashResult};

use eyre::{Context, Result};

use crate::companion::TravelCompanion;
use crate::config::Config;
use crate::orchestrator::TurnOrchestrator;

/// Run the interactive REPL
///
/// This is the main entry point for `tc chat`.
pub async fn run_interactive(config: &Config, initial_question: Option<String>) -> Result<()> {
    config.validate()?;

    let llm = crate::llm::create_client(&config.llm).context("Failed to create LLM client")?;
    let maps = crate::maps::create_client(&config.maps).context("Failed to create maps client")?;

    let orchestrator = TurnOrchestrator::new(TravelCompanion::new(llm));
    let mut session = ReplSession::new(orchestrator, maps, config.maps.radius_m);
    session.run(initial_question).await
}
