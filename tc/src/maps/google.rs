//! Google Maps Platform client implementation
//!
//! Covers Places Nearby Search, Directions and Geocoding over their JSON web
//! service endpoints. Each request is one GET with no retries; a nearby
//! search issues one request per category and merges the results.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};

use super::{DirectionsRequest, GeoPoint, MapsClient, MapsError, Place, PlaceCategory, Route};
use crate::config::MapsConfig;

/// Google Maps web services client
pub struct GoogleMapsClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl GoogleMapsClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &MapsConfig) -> Result<Self, MapsError> {
        debug!(base_url = %config.base_url, "from_config: called");
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MapsError::MissingApiKey(config.api_key_env.clone()))?;

        Self::new(api_key, &config.base_url, Duration::from_millis(config.timeout_ms))
    }

    /// Create a client with explicit settings
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self, MapsError> {
        let http = Client::builder().timeout(timeout).build().map_err(MapsError::Network)?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// One Nearby Search request, optionally filtered to a single category
    async fn nearby_search(
        &self,
        location: GeoPoint,
        radius_m: u32,
        category: Option<PlaceCategory>,
    ) -> Result<Vec<serde_json::Value>, MapsError> {
        let params = nearby_params(location, radius_m, category);
        let response: PlacesResponse = self.get_json("place/nearbysearch/json", &params).await?;
        check_status(&response.status, response.error_message, response.results)
    }

    /// GET `{base_url}/{path}` with the API key appended and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, MapsError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, param_count = params.len(), "get_json: called");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, %path, "get_json: network error");
                MapsError::Network(e)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(%status, %path, "get_json: HTTP error");
            return Err(MapsError::Http { status, message });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MapsClient for GoogleMapsClient {
    async fn nearby_places(
        &self,
        location: GeoPoint,
        radius_m: u32,
        categories: &[PlaceCategory],
    ) -> Result<Vec<Place>, MapsError> {
        debug!(%location, %radius_m, ?categories, "nearby_places: called");

        // Nearby Search honours a single `type`, so each category is its own request
        let batches = if categories.is_empty() {
            vec![self.nearby_search(location, radius_m, None).await?]
        } else {
            futures::future::try_join_all(
                categories
                    .iter()
                    .map(|category| self.nearby_search(location, radius_m, Some(*category))),
            )
            .await?
        };

        let results = merge_places(batches);
        debug!(count = results.len(), "nearby_places: success");
        Ok(results.into_iter().map(Place::from_json).collect())
    }

    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>, MapsError> {
        debug!(?request, "directions: called");
        let params = directions_params(request);

        let response: DirectionsResponse = self.get_json("directions/json", &params).await?;
        let routes = check_status(&response.status, response.error_message, response.routes)?;

        debug!(count = routes.len(), "directions: success");
        Ok(routes.into_iter().map(Route::from_json).collect())
    }

    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, MapsError> {
        debug!(%address, "geocode: called");
        let params = [("address", address.to_string())];

        let response: GeocodeResponse = self.get_json("geocode/json", &params).await?;
        let results = check_status(&response.status, response.error_message, response.results)?;

        let point = results
            .into_iter()
            .next()
            .map(|r| GeoPoint::new(r.geometry.location.lat, r.geometry.location.lng));
        debug!(?point, "geocode: resolved");
        Ok(point)
    }
}

/// Query parameters for a nearby search
fn nearby_params(location: GeoPoint, radius_m: u32, category: Option<PlaceCategory>) -> Vec<(&'static str, String)> {
    let mut params = vec![("location", location.to_query()), ("radius", radius_m.to_string())];
    if let Some(category) = category {
        params.push(("type", category.as_str().to_string()));
    }
    params
}

/// Concatenate per-category results in request order, dropping repeats
///
/// A place matching several categories appears once, at its first position.
/// Records without a `place_id` are always kept.
fn merge_places(batches: Vec<Vec<serde_json::Value>>) -> Vec<serde_json::Value> {
    let mut seen = HashSet::new();
    batches
        .into_iter()
        .flatten()
        .filter(|place| match place.get("place_id").and_then(|id| id.as_str()) {
            Some(id) => seen.insert(id.to_string()),
            None => true,
        })
        .collect()
}

/// Query parameters for a directions request
fn directions_params(request: &DirectionsRequest) -> Vec<(&'static str, String)> {
    vec![
        ("origin", request.origin.clone()),
        ("destination", request.destination.clone()),
        ("mode", request.mode.as_str().to_string()),
        ("departure_time", request.departure.to_query()),
    ]
}

/// Map a web-service `status` onto results
///
/// `OK` yields the results, `ZERO_RESULTS` an empty list; anything else is an error.
fn check_status<T>(status: &str, error_message: Option<String>, results: Vec<T>) -> Result<Vec<T>, MapsError> {
    match status {
        "OK" => Ok(results),
        "ZERO_RESULTS" => {
            debug!("check_status: zero results");
            Ok(Vec::new())
        }
        other => {
            warn!(status = %other, ?error_message, "check_status: provider rejected request");
            Err(MapsError::status(other, error_message))
        }
    }
}

// Google web service response types

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    results: Vec<serde_json::Value>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<serde_json::Value>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}
