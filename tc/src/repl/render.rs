//! Terminal rendering for chat turns and travel lookups

use colored::Colorize;

use crate::conversation::{ConversationHistory, Role, Turn};
use crate::maps::Place;
use crate::travel::{RecommendationResult, RoutePlan};

/// Max places listed per section in text output
const MAX_LISTED_PLACES: usize = 10;

pub fn render_turn(turn: &Turn) -> String {
    match turn.role() {
        Role::User => format!("{} {}", "You:".bright_green(), turn.content()),
        Role::Assistant => format!("{} {}", "Assistant:".bright_blue(), turn.content()),
    }
}

/// Every turn in order, one block per turn
pub fn render_history(history: &ConversationHistory) -> String {
    if history.is_empty() {
        return "No conversation history.".dimmed().to_string();
    }
    history.iter().map(render_turn).collect::<Vec<_>>().join("\n\n")
}

/// Route form result: success line plus raw route JSON, or the generic notice
pub fn render_route_plan(plan: &RoutePlan) -> String {
    match plan {
        RoutePlan::Found(route) => {
            let mut out = format!("{}", plan.notice().green());
            if let Some((distance, duration)) = route.first_leg_text() {
                let via = route.summary().map(|s| format!(" via {}", s)).unwrap_or_default();
                out.push_str(&format!("\n{} ({}){}", distance, duration, via));
            }
            let json = serde_json::to_string_pretty(route.as_json()).unwrap_or_else(|_| route.as_json().to_string());
            out.push('\n');
            out.push_str(&json);
            out
        }
        RoutePlan::Unavailable => plan.notice().red().to_string(),
    }
}

pub fn render_recommendations(result: &RecommendationResult) -> String {
    match result {
        RecommendationResult::Found {
            attractions,
            gas_stations,
        } => {
            let mut out = String::new();
            out.push_str(&render_place_section("Attractions", attractions));
            out.push('\n');
            out.push_str(&render_place_section("Gas stations", gas_stations));
            out
        }
        RecommendationResult::Failed { error } => format!("{} {}", "Error:".red(), error),
    }
}

fn render_place_section(title: &str, places: &[Place]) -> String {
    let mut out = format!("{} ({})\n", title.bright_cyan(), places.len());
    if places.is_empty() {
        out.push_str(&format!("  {}\n", "None found".dimmed()));
        return out;
    }
    for place in places.iter().take(MAX_LISTED_PLACES) {
        let name = place.name().unwrap_or("(unnamed)");
        let mut line = format!("  - {}", name);
        if let Some(rating) = place.rating() {
            line.push_str(&format!(" [{:.1}]", rating));
        }
        if let Some(vicinity) = place.vicinity() {
            line.push_str(&format!(" {}", vicinity.dimmed()));
        }
        out.push_str(&line);
        out.push('\n');
    }
    if places.len() > MAX_LISTED_PLACES {
        out.push_str(&format!("  ... and {} more\n", places.len() - MAX_LISTED_PLACES));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::Route;
    use crate::travel::ROUTE_UNAVAILABLE_NOTICE;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_history_in_order() {
        plain();
        let mut history = ConversationHistory::new();
        history.push(Turn::user("Paris to Lyon?"));
        history.push(Turn::assistant("Take the A6 highway"));

        let out = render_history(&history);
        assert_eq!(out, "You: Paris to Lyon?\n\nAssistant: Take the A6 highway");
    }

    #[test]
    fn test_render_empty_history() {
        plain();
        assert_eq!(render_history(&ConversationHistory::new()), "No conversation history.");
    }

    #[test]
    fn test_render_route_found_includes_raw_json() {
        plain();
        let route = Route::from_json(serde_json::json!({
            "summary": "A6",
            "legs": [{"distance": {"text": "465 km"}, "duration": {"text": "4 hours 35 mins"}}]
        }));

        let out = render_route_plan(&RoutePlan::Found(route));
        assert!(out.starts_with("Route found!"));
        assert!(out.contains("465 km (4 hours 35 mins) via A6"));
        assert!(out.contains("\"summary\": \"A6\""));
    }

    #[test]
    fn test_render_route_unavailable() {
        plain();
        assert_eq!(render_route_plan(&RoutePlan::Unavailable), ROUTE_UNAVAILABLE_NOTICE);
    }

    #[test]
    fn test_render_recommendations() {
        plain();
        let result = RecommendationResult::Found {
            attractions: vec![Place::from_json(
                serde_json::json!({"name": "Louvre", "rating": 4.7, "vicinity": "Rue de Rivoli"}),
            )],
            gas_stations: vec![],
        };

        let out = render_recommendations(&result);
        assert!(out.contains("Attractions (1)"));
        assert!(out.contains("  - Louvre [4.7] Rue de Rivoli"));
        assert!(out.contains("Gas stations (0)"));
        assert!(out.contains("None found"));
    }

    #[test]
    fn test_render_recommendations_error() {
        plain();
        let result = RecommendationResult::Failed {
            error: "REQUEST_DENIED: bad key".to_string(),
        };
        assert_eq!(render_recommendations(&result), "Error: REQUEST_DENIED: bad key");
    }
}
