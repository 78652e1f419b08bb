//! REPL session management

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use super::render::{render_history, render_recommendations, render_route_plan, render_turn};
use crate::conversation::ConversationHistory;
use crate::maps::MapsClient;
use crate::orchestrator::{TurnError, TurnOrchestrator};
use crate::travel::{RecommendationQuery, fetch_recommendations, plan_route, resolve_location};

/// Interactive chat session
///
/// Owns the conversation history for its whole lifetime; it is dropped with
/// the session.
pub struct ReplSession {
    orchestrator: TurnOrchestrator,
    maps: Arc<dyn MapsClient>,
    history: ConversationHistory,
    radius_m: u32,
}

impl ReplSession {
    /// Create a new REPL session
    pub fn new(orchestrator: TurnOrchestrator, maps: Arc<dyn MapsClient>, radius_m: u32) -> Self {
        Self {
            orchestrator,
            maps,
            history: ConversationHistory::new(),
            radius_m,
        }
    }

    /// Conversation so far
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Run the REPL main loop
    pub async fn run(&mut self, initial_question: Option<String>) -> Result<()> {
        self.print_welcome();

        if let Some(question) = initial_question {
            println!("{} {}", ">".bright_green(), question);
            self.process_line(&question).await;
        }

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line.as_str());

                    if self.process_line(&line).await == SlashResult::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        info!(turns = self.history.len(), "run: session ended");
        println!("Safe travels!");
        Ok(())
    }

    /// Dispatch one line of input: slash command or chat turn
    pub async fn process_line(&mut self, input: &str) -> SlashResult {
        match SlashCommand::parse(input) {
            Some(command) => self.handle_slash_command(command).await,
            None => {
                self.process_user_input(input).await;
                SlashResult::Continue
            }
        }
    }

    /// Print welcome message
    fn print_welcome(&self) {
        println!();
        println!("{}", "AI Travel Companion".bright_cyan().bold());
        println!("I can help you with:");
        println!("  - Planning travel routes");
        println!("  - Suggesting attractions");
        println!("  - Finding gas stations");
        println!("  - Providing travel recommendations");
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    /// Handle slash commands
    async fn handle_slash_command(&mut self, command: SlashCommand) -> SlashResult {
        debug!(?command, "handle_slash_command: called");
        match command {
            SlashCommand::Help => self.print_help(),
            SlashCommand::Quit => return SlashResult::Quit,
            SlashCommand::History => {
                println!();
                println!("{}", render_history(&self.history));
                println!();
            }
            SlashCommand::Route { start, end } => self.route(&start, &end).await,
            SlashCommand::Nearby { location, radius_m } => {
                self.nearby(&location, radius_m.unwrap_or(self.radius_m)).await
            }
            SlashCommand::Usage(usage) => {
                println!("{} {}", "Usage:".yellow(), usage);
            }
            SlashCommand::Unknown(cmd) => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
            }
        }
        SlashResult::Continue
    }

    /// Print help message
    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:28} Show this help", "/help".yellow());
        println!("  {:28} Exit the session", "/quit".yellow());
        println!("  {:28} Show conversation history", "/history".yellow());
        println!("  {:28} Plan a driving route", "/route <start> to <end>".yellow());
        println!(
            "  {:28} Attractions and gas stations nearby",
            "/nearby <place|lat,lng> [<n>m]".yellow()
        );
        println!();
        println!("Anything else is sent to the travel companion.");
        println!();
    }

    /// Send a chat turn and print the reply
    async fn process_user_input(&mut self, input: &str) {
        match self.orchestrator.submit(&mut self.history, input).await {
            Ok(turn) => {
                println!();
                println!("{}", render_turn(turn));
                println!();
            }
            Err(TurnError::EmptyInput) => {
                debug!("process_user_input: empty input ignored");
            }
        }
    }

    async fn route(&self, start: &str, end: &str) {
        match plan_route(self.maps.as_ref(), start, end).await {
            Ok(plan) => println!("{}", render_route_plan(&plan)),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        println!();
    }

    async fn nearby(&self, location: &str, radius_m: u32) {
        let point = match resolve_location(self.maps.as_ref(), location).await {
            Ok(Some(point)) => point,
            Ok(None) => {
                println!("{} {}", "Location not found:".red(), location);
                return;
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
                return;
            }
        };

        let query = RecommendationQuery::new(point).with_radius(radius_m);
        let result = fetch_recommendations(self.maps.as_ref(), &query).await;
        println!("{}", render_recommendations(&result));
    }
}

/// Result of handling a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashResult {
    Continue,
    Quit,
}

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Quit,
    History,
    Route { start: String, end: String },
    Nearby { location: String, radius_m: Option<u32> },
    Usage(&'static str),
    Unknown(String),
}

impl SlashCommand {
    /// Parse a line; `None` when the line is not a slash command
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if !input.starts_with('/') {
            return None;
        }

        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        let command = match cmd {
            "/help" | "/h" => SlashCommand::Help,
            "/quit" | "/q" | "/exit" => SlashCommand::Quit,
            "/history" => SlashCommand::History,
            "/route" => match split_route(rest) {
                Some((start, end)) => SlashCommand::Route { start, end },
                None => SlashCommand::Usage("/route <start> to <end>"),
            },
            "/nearby" => match split_nearby(rest) {
                Some((location, radius_m)) => SlashCommand::Nearby { location, radius_m },
                None => SlashCommand::Usage("/nearby <place|lat,lng> [<radius>m]"),
            },
            other => SlashCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Split `<start> to <end>` (or `<start> | <end>`) into its two halves
fn split_route(args: &str) -> Option<(String, String)> {
    let (start, end) = args.split_once(" to ").or_else(|| args.split_once('|'))?;
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return None;
    }
    Some((start.to_string(), end.to_string()))
}

/// Split `<location> [<n>m]`; only a trailing token like `2000m` is a radius
fn split_nearby(args: &str) -> Option<(String, Option<u32>)> {
    if args.is_empty() {
        return None;
    }
    if let Some((location, last)) = args.rsplit_once(char::is_whitespace)
        && let Some(radius) = last.strip_suffix('m').and_then(|n| n.parse::<u32>().ok())
        && !location.trim().is_empty()
    {
        return Some((location.trim().to_string(), Some(radius)));
    }
    Some((args.to_string(), None))
}
