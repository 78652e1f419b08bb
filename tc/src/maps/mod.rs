//! Mapping/places provider module
//!
//! Provides the `MapsClient` seam, the Google Maps implementation behind it,
//! and the pass-through `Place`/`Route` records.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod google;
mod types;

pub use client::MapsClient;
pub use error::MapsError;
pub use google::GoogleMapsClient;
pub use types::{Departure, DirectionsRequest, GeoPoint, Place, PlaceCategory, Route, TravelMode};

use crate::config::MapsConfig;

/// Create a maps client from configuration
pub fn create_client(config: &MapsConfig) -> Result<Arc<dyn MapsClient>, MapsError> {
    debug!(base_url = %config.base_url, "create_client: called");
    Ok(Arc::new(GoogleMapsClient::from_config(config)?))
}
