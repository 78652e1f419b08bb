//! Nearby attractions and gas stations

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DEFAULT_RADIUS_M;
use crate::maps::{GeoPoint, MapsClient, Place, PlaceCategory};

/// What to search for around a location
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub location: GeoPoint,
    pub radius_m: u32,
    /// Categories for the attractions query; gas stations are always queried separately
    pub categories: Vec<PlaceCategory>,
}

impl RecommendationQuery {
    /// Default radius and attraction categories around `location`
    pub fn new(location: GeoPoint) -> Self {
        Self {
            location,
            radius_m: DEFAULT_RADIUS_M,
            categories: PlaceCategory::ATTRACTIONS.to_vec(),
        }
    }

    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }
}

/// Outcome of a recommendations lookup
///
/// Serializes as `{"attractions": [...], "gas_stations": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationResult {
    Found {
        attractions: Vec<Place>,
        gas_stations: Vec<Place>,
    },
    Failed {
        error: String,
    },
}

impl RecommendationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, RecommendationResult::Failed { .. })
    }
}

/// Look up attractions and gas stations around a location
///
/// Both queries share location and radius and run concurrently. Any failure
/// becomes `Failed`; this never returns an error to the caller.
pub async fn fetch_recommendations(maps: &dyn MapsClient, query: &RecommendationQuery) -> RecommendationResult {
    debug!(location = %query.location, radius_m = query.radius_m, "fetch_recommendations: called");

    let attractions = maps.nearby_places(query.location, query.radius_m, &query.categories);
    let gas_stations = maps.nearby_places(query.location, query.radius_m, &[PlaceCategory::GasStation]);

    match futures::try_join!(attractions, gas_stations) {
        Ok((attractions, gas_stations)) => {
            debug!(
                attractions = attractions.len(),
                gas_stations = gas_stations.len(),
                "fetch_recommendations: success"
            );
            RecommendationResult::Found {
                attractions,
                gas_stations,
            }
        }
        Err(e) => {
            warn!(error = %e, "fetch_recommendations: provider error");
            RecommendationResult::Failed { error: e.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::client::mock::MockMapsClient;

    fn place(name: &str) -> Place {
        Place::from_json(serde_json::json!({ "name": name }))
    }

    #[test]
    fn test_query_defaults() {
        let query = RecommendationQuery::new(GeoPoint::new(1.0, 2.0));
        assert_eq!(query.radius_m, 5000);
        assert_eq!(query.categories, PlaceCategory::ATTRACTIONS.to_vec());
        assert_eq!(query.with_radius(800).radius_m, 800);
    }

    #[tokio::test]
    async fn test_fetch_recommendations_splits_queries() {
        let maps = MockMapsClient {
            attractions: vec![place("Louvre"), place("Le Meurice")],
            gas_stations: vec![place("TotalEnergies")],
            ..MockMapsClient::default()
        };
        let location = GeoPoint::new(48.8566, 2.3522);

        let result = fetch_recommendations(&maps, &RecommendationQuery::new(location)).await;

        match result {
            RecommendationResult::Found {
                attractions,
                gas_stations,
            } => {
                assert_eq!(attractions.len(), 2);
                assert_eq!(gas_stations[0].name(), Some("TotalEnergies"));
            }
            other => panic!("Expected Found, got {:?}", other),
        }

        let calls = maps.nearby_calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(loc, radius, _)| *loc == location && *radius == 5000));
        assert!(calls.iter().any(|(_, _, c)| c == &PlaceCategory::ATTRACTIONS.to_vec()));
        assert!(calls.iter().any(|(_, _, c)| c == &vec![PlaceCategory::GasStation]));
    }

    #[tokio::test]
    async fn test_fetch_recommendations_empty_is_not_error() {
        let maps = MockMapsClient::default();

        let result = fetch_recommendations(&maps, &RecommendationQuery::new(GeoPoint::new(0.0, 0.0))).await;

        assert_eq!(
            result,
            RecommendationResult::Found {
                attractions: vec![],
                gas_stations: vec![],
            }
        );
        assert!(!result.is_error());
    }

    #[tokio::test]
    async fn test_fetch_recommendations_failure_is_tagged() {
        let maps = MockMapsClient::failing("The provided API key is invalid.");

        let result = fetch_recommendations(&maps, &RecommendationQuery::new(GeoPoint::new(0.0, 0.0))).await;

        assert!(result.is_error());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["error"].as_str().unwrap().contains("The provided API key is invalid."));
        assert!(json.get("attractions").is_none());
    }

    #[test]
    fn test_found_serializes_both_lists() {
        let result = RecommendationResult::Found {
            attractions: vec![place("Louvre")],
            gas_stations: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["attractions"][0]["name"], "Louvre");
        assert!(json["gas_stations"].as_array().unwrap().is_empty());
        assert!(json.get("error").is_none());
    }
}
