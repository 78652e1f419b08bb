//! Directions lookup and the route-planning form

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::maps::{DirectionsRequest, MapsClient, Route};

/// Notice shown when the route form cannot produce a route
pub const ROUTE_UNAVAILABLE_NOTICE: &str = "Could not find route. Please try again.";

/// Outcome of a directions lookup
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// First candidate returned by the provider
    Found(Route),
    /// Provider answered with zero candidates
    NotFound,
    /// Provider call failed
    Failed { error: String },
}

/// Fetch directions and keep only the first candidate
///
/// Never returns an error to the caller; failures become `Failed`.
pub async fn fetch_route(maps: &dyn MapsClient, request: &DirectionsRequest) -> RouteOutcome {
    debug!(origin = %request.origin, destination = %request.destination, mode = %request.mode, "fetch_route: called");

    match maps.directions(request).await {
        Ok(routes) => match routes.into_iter().next() {
            Some(route) => {
                debug!("fetch_route: found");
                RouteOutcome::Found(route)
            }
            None => {
                debug!("fetch_route: no candidates");
                RouteOutcome::NotFound
            }
        },
        Err(e) => {
            warn!(error = %e, "fetch_route: provider error");
            RouteOutcome::Failed { error: e.to_string() }
        }
    }
}

/// Input errors on the route form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteFormError {
    #[error("Starting location is required")]
    MissingStart,

    #[error("Destination is required")]
    MissingEnd,
}

/// What the route form displays
#[derive(Debug, Clone, PartialEq)]
pub enum RoutePlan {
    Found(Route),
    Unavailable,
}

impl RoutePlan {
    /// User-facing status line
    pub fn notice(&self) -> &'static str {
        match self {
            RoutePlan::Found(_) => "Route found!",
            RoutePlan::Unavailable => ROUTE_UNAVAILABLE_NOTICE,
        }
    }
}

/// Plan a driving route departing now between two free-text locations
///
/// Both fields must be non-empty; their text goes to the provider as typed.
/// Zero candidates and provider failures both display the same generic
/// notice; the underlying error is only logged.
pub async fn plan_route(maps: &dyn MapsClient, start: &str, end: &str) -> Result<RoutePlan, RouteFormError> {
    plan_route_with(maps, DirectionsRequest::driving(start, end)).await
}

/// Route form with an explicit request (mode, departure)
pub async fn plan_route_with(maps: &dyn MapsClient, request: DirectionsRequest) -> Result<RoutePlan, RouteFormError> {
    if request.origin.is_empty() {
        return Err(RouteFormError::MissingStart);
    }
    if request.destination.is_empty() {
        return Err(RouteFormError::MissingEnd);
    }

    let plan = match fetch_route(maps, &request).await {
        RouteOutcome::Found(route) => RoutePlan::Found(route),
        RouteOutcome::NotFound => RoutePlan::Unavailable,
        RouteOutcome::Failed { error } => {
            info!(%error, "plan_route: hiding provider error from route form");
            RoutePlan::Unavailable
        }
    };
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::client::mock::MockMapsClient;
    use crate::maps::{Departure, TravelMode};

    fn route(summary: &str) -> Route {
        Route::from_json(serde_json::json!({ "summary": summary, "legs": [] }))
    }

    #[tokio::test]
    async fn test_fetch_route_returns_first_candidate() {
        let maps = MockMapsClient {
            routes: vec![route("A6"), route("A77")],
            ..MockMapsClient::default()
        };

        let outcome = fetch_route(&maps, &DirectionsRequest::driving("Paris", "Lyon")).await;
        assert_eq!(outcome, RouteOutcome::Found(route("A6")));
    }

    #[tokio::test]
    async fn test_fetch_route_empty_is_not_found() {
        let maps = MockMapsClient::default();

        let outcome = fetch_route(&maps, &DirectionsRequest::driving("Paris", "Atlantis")).await;
        assert_eq!(outcome, RouteOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_route_failure_is_tagged() {
        let maps = MockMapsClient::failing("quota exceeded");

        let outcome = fetch_route(&maps, &DirectionsRequest::driving("Paris", "Lyon")).await;
        assert!(matches!(outcome, RouteOutcome::Failed { ref error } if error.contains("quota exceeded")));
    }

    #[tokio::test]
    async fn test_plan_route_sends_driving_now() {
        let maps = MockMapsClient {
            routes: vec![route("A6")],
            ..MockMapsClient::default()
        };

        let plan = plan_route(&maps, " Paris ", "Lyon").await.unwrap();
        assert_eq!(plan, RoutePlan::Found(route("A6")));
        assert_eq!(plan.notice(), "Route found!");

        let calls = maps.directions_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].origin, " Paris ");
        assert_eq!(calls[0].mode, TravelMode::Driving);
        assert_eq!(calls[0].departure, Departure::Now);
    }

    #[tokio::test]
    async fn test_plan_route_requires_both_fields() {
        let maps = MockMapsClient::default();

        assert_eq!(plan_route(&maps, "", "Lyon").await, Err(RouteFormError::MissingStart));
        assert_eq!(plan_route(&maps, "Paris", "").await, Err(RouteFormError::MissingEnd));
        assert!(maps.directions_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_plan_route_passes_whitespace_fields_to_provider() {
        let maps = MockMapsClient::default();

        let plan = plan_route(&maps, "  ", "Lyon").await.unwrap();
        assert_eq!(plan, RoutePlan::Unavailable);

        let calls = maps.directions_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].origin, "  ");
    }

    #[tokio::test]
    async fn test_plan_route_hides_failure_details() {
        let maps = MockMapsClient::failing("REQUEST_DENIED secret detail");

        let plan = plan_route(&maps, "Paris", "Lyon").await.unwrap();
        assert_eq!(plan, RoutePlan::Unavailable);
        assert_eq!(plan.notice(), ROUTE_UNAVAILABLE_NOTICE);
    }
}
