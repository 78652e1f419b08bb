//! MapsClient trait definition

use async_trait::async_trait;

use super::{DirectionsRequest, GeoPoint, MapsError, Place, PlaceCategory, Route};

/// Stateless mapping provider client
///
/// Each method is a single outbound request. Empty results are `Ok` with an
/// empty list or `None`; only genuine failures are `Err`.
#[async_trait]
pub trait MapsClient: Send + Sync {
    /// Places within `radius_m` of `location` matching any of `categories`
    async fn nearby_places(
        &self,
        location: GeoPoint,
        radius_m: u32,
        categories: &[PlaceCategory],
    ) -> Result<Vec<Place>, MapsError>;

    /// All route candidates for a directions request, in provider order
    async fn directions(&self, request: &DirectionsRequest) -> Result<Vec<Route>, MapsError>;

    /// Resolve a free-text address to a coordinate
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, MapsError>;
}
