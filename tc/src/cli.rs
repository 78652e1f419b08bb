//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::maps::TravelMode;

/// Travel Companion - chat, routes and nearby places from the terminal
#[derive(Parser)]
#[command(
    name = "tc",
    about = "AI travel companion: route planning, attractions, gas stations and travel advice",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/travelcompanion/logs/travelcompanion.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive chat session (default)
    Chat {
        /// Question to ask before the prompt appears
        question: Option<String>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// Travel question
        question: String,
    },

    /// Plan a route between two locations
    Route {
        /// Starting location
        start: String,

        /// Destination
        end: String,

        /// Travel mode (driving, walking, bicycling, transit)
        #[arg(short, long, default_value = "driving")]
        mode: TravelMode,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find attractions and gas stations near a location
    Nearby {
        /// Address or "lat,lng"
        location: String,

        /// Search radius in meters (defaults to the configured radius)
        #[arg(short, long)]
        radius: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for route/nearby commands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Path of the log file written by the binary
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("travelcompanion")
        .join("logs")
        .join("travelcompanion.log")
}
