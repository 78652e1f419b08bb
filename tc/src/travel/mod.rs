//! Travel lookups built on the maps client
//!
//! These functions sit at the adapter boundary: provider errors are folded
//! into tagged results here and never propagate to callers.

mod location;
mod recommendations;
mod route;

pub use location::resolve_location;
pub use recommendations::{RecommendationQuery, RecommendationResult, fetch_recommendations};
pub use route::{
    ROUTE_UNAVAILABLE_NOTICE, RouteFormError, RouteOutcome, RoutePlan, fetch_route, plan_route, plan_route_with,
};
