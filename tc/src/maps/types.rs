//! Mapping provider types
//!
//! `Place` and `Route` wrap the provider's JSON untouched. The accessors only
//! read fields for terminal display; nothing here validates or normalizes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// A resolved geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `lat,lng` form used by the provider's query strings
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

impl FromStr for GeoPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "GeoPoint::from_str: called");
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected 'lat,lng', got '{}'", s))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("Invalid latitude: '{}'", lat.trim()))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| format!("Invalid longitude: '{}'", lng.trim()))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("Latitude out of range: {}", lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!("Longitude out of range: {}", lng));
        }
        Ok(Self { lat, lng })
    }
}

/// Place category tags understood by the places provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    TouristAttraction,
    Restaurant,
    Hotel,
    GasStation,
}

impl PlaceCategory {
    /// Categories for the attractions query
    pub const ATTRACTIONS: [PlaceCategory; 3] = [
        PlaceCategory::TouristAttraction,
        PlaceCategory::Restaurant,
        PlaceCategory::Hotel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::TouristAttraction => "tourist_attraction",
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Hotel => "hotel",
            PlaceCategory::GasStation => "gas_station",
        }
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Travel mode for directions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driving" | "drive" => Ok(Self::Driving),
            "walking" | "walk" => Ok(Self::Walking),
            "bicycling" | "bike" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            _ => Err(format!(
                "Unknown travel mode: {}. Use: driving, walking, bicycling, or transit",
                s
            )),
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When the trip starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Departure {
    #[default]
    Now,
    At(DateTime<Utc>),
}

impl Departure {
    /// Provider query value: `now` or a unix timestamp in seconds
    pub fn to_query(&self) -> String {
        match self {
            Departure::Now => "now".to_string(),
            Departure::At(when) => when.timestamp().to_string(),
        }
    }
}

/// A directions request
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub departure: Departure,
}

impl DirectionsRequest {
    /// Driving directions departing now
    pub fn driving(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: TravelMode::Driving,
            departure: Departure::Now,
        }
    }
}

/// A point-of-interest record as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(serde_json::Value);

impl Place {
    pub fn from_json(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(|v| v.as_str())
    }

    pub fn vicinity(&self) -> Option<&str> {
        self.0
            .get("vicinity")
            .or_else(|| self.0.get("formatted_address"))
            .and_then(|v| v.as_str())
    }

    pub fn rating(&self) -> Option<f64> {
        self.0.get("rating").and_then(|v| v.as_f64())
    }
}

/// A route candidate as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(serde_json::Value);

impl Route {
    pub fn from_json(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn summary(&self) -> Option<&str> {
        self.0.get("summary").and_then(|v| v.as_str())
    }

    /// Distance and duration text of the first leg, e.g. `("465 km", "4 hours 35 mins")`
    pub fn first_leg_text(&self) -> Option<(&str, &str)> {
        let leg = self.0.get("legs")?.get(0)?;
        let distance = leg.get("distance")?.get("text")?.as_str()?;
        let duration = leg.get("duration")?.get("text")?.as_str()?;
        Some((distance, duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_geo_point_parse() {
        let p: GeoPoint = "48.8566, 2.3522".parse().unwrap();
        assert_eq!(p, GeoPoint::new(48.8566, 2.3522));
        assert_eq!(p.to_query(), "48.8566,2.3522");
    }

    #[test]
    fn test_geo_point_parse_rejects_bad_input() {
        assert!("Paris".parse::<GeoPoint>().is_err());
        assert!("abc,2.0".parse::<GeoPoint>().is_err());
        assert!("91.0,2.0".parse::<GeoPoint>().is_err());
        assert!("45.0,181.0".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_place_category_tags() {
        let tags: Vec<&str> = PlaceCategory::ATTRACTIONS.iter().map(|c| c.as_str()).collect();
        assert_eq!(tags, vec!["tourist_attraction", "restaurant", "hotel"]);
        assert_eq!(PlaceCategory::GasStation.to_string(), "gas_station");
    }

    #[test]
    fn test_travel_mode_from_str() {
        assert_eq!("driving".parse::<TravelMode>().unwrap(), TravelMode::Driving);
        assert_eq!("WALK".parse::<TravelMode>().unwrap(), TravelMode::Walking);
        assert_eq!("transit".parse::<TravelMode>().unwrap(), TravelMode::Transit);
        assert!("teleport".parse::<TravelMode>().is_err());
        assert_eq!(TravelMode::default(), TravelMode::Driving);
    }

    #[test]
    fn test_departure_query() {
        assert_eq!(Departure::Now.to_query(), "now");
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Departure::At(at).to_query(), "1714564800");
    }

    #[test]
    fn test_place_accessors_pass_through() {
        let raw = serde_json::json!({"name": "Louvre", "vicinity": "Rue de Rivoli", "rating": 4.7, "extra": [1, 2]});
        let place = Place::from_json(raw.clone());
        assert_eq!(place.name(), Some("Louvre"));
        assert_eq!(place.vicinity(), Some("Rue de Rivoli"));
        assert_eq!(place.rating(), Some(4.7));
        assert_eq!(serde_json::to_value(&place).unwrap(), raw);
    }

    #[test]
    fn test_route_accessors() {
        let route = Route::from_json(serde_json::json!({
            "summary": "A6",
            "legs": [{"distance": {"text": "465 km"}, "duration": {"text": "4 hours 35 mins"}}]
        }));
        assert_eq!(route.summary(), Some("A6"));
        assert_eq!(route.first_leg_text(), Some(("465 km", "4 hours 35 mins")));

        let bare = Route::from_json(serde_json::json!({}));
        assert!(bare.summary().is_none());
        assert!(bare.first_leg_text().is_none());
    }
}
