//! Travel Companion
//!
//! CLI entry point for the chat session and the route/nearby lookups.

use std::fs;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use travelcompanion::cli::{Cli, Command, OutputFormat, get_log_path};
use travelcompanion::companion::TravelCompanion;
use travelcompanion::config::Config;
use travelcompanion::conversation::ConversationHistory;
use travelcompanion::maps::{Departure, DirectionsRequest, TravelMode};
use travelcompanion::orchestrator::TurnOrchestrator;
use travelcompanion::repl::{self, render_recommendations, render_route_plan, render_turn};
use travelcompanion::travel::{RecommendationQuery, RoutePlan, fetch_recommendations, plan_route_with, resolve_location};
use travelcompanion::{llm, maps};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credentials may live in a .env file next to the working directory
    let dotenv = dotenvy::dotenv();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!(error = %e, "main: no .env file loaded"),
    }

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("Travel Companion loaded config: model={}", config.llm.model);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Chat { question }) => repl::run_interactive(&config, question).await,
        Some(Command::Ask { question }) => cmd_ask(&config, &question).await,
        Some(Command::Route {
            start,
            end,
            mode,
            format,
        }) => cmd_route(&config, &start, &end, mode, format).await,
        Some(Command::Nearby {
            location,
            radius,
            format,
        }) => cmd_nearby(&config, &location, radius, format).await,
        None => repl::run_interactive(&config, None).await,
    }
}

/// Ask one question in a fresh conversation
async fn cmd_ask(config: &Config, question: &str) -> Result<()> {
    config.validate()?;
    let llm = llm::create_client(&config.llm).context("Failed to create LLM client")?;
    let orchestrator = TurnOrchestrator::new(TravelCompanion::new(llm));

    let mut history = ConversationHistory::new();
    let turn = orchestrator.submit(&mut history, question).await?;
    println!("{}", render_turn(turn));
    Ok(())
}

/// Plan a route and print it
async fn cmd_route(config: &Config, start: &str, end: &str, mode: TravelMode, format: OutputFormat) -> Result<()> {
    config.validate()?;
    let maps = maps::create_client(&config.maps).context("Failed to create maps client")?;

    let request = DirectionsRequest {
        origin: start.to_string(),
        destination: end.to_string(),
        mode,
        departure: Departure::Now,
    };
    let plan = plan_route_with(maps.as_ref(), request).await?;

    match format {
        OutputFormat::Json => match &plan {
            RoutePlan::Found(route) => println!("{}", serde_json::to_string_pretty(route)?),
            RoutePlan::Unavailable => println!("{}", serde_json::json!({ "error": plan.notice() })),
        },
        OutputFormat::Text => println!("{}", render_route_plan(&plan)),
    }

    if plan == RoutePlan::Unavailable {
        std::process::exit(1);
    }
    Ok(())
}

/// Find attractions and gas stations near a location and print them
async fn cmd_nearby(config: &Config, location: &str, radius: Option<u32>, format: OutputFormat) -> Result<()> {
    config.validate()?;
    let maps = maps::create_client(&config.maps).context("Failed to create maps client")?;

    let point = resolve_location(maps.as_ref(), location)
        .await
        .context("Failed to resolve location")?
        .ok_or_else(|| eyre::eyre!("Location not found: {}", location))?;
    debug!(%point, "cmd_nearby: resolved location");

    let query = RecommendationQuery::new(point).with_radius(radius.unwrap_or(config.maps.radius_m));
    let result = fetch_recommendations(maps.as_ref(), &query).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            println!("{} {}", "Near".bright_cyan(), point);
            println!("{}", render_recommendations(&result));
        }
    }

    if result.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
