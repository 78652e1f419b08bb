//! Resolving user-entered locations to coordinates

use tracing::debug;

use crate::maps::{GeoPoint, MapsClient, MapsError};

/// Resolve `lat,lng` directly, anything else through the geocoder
///
/// `Ok(None)` means the geocoder found nothing for the address.
pub async fn resolve_location(maps: &dyn MapsClient, input: &str) -> Result<Option<GeoPoint>, MapsError> {
    let input = input.trim();
    if let Ok(point) = input.parse::<GeoPoint>() {
        debug!(%point, "resolve_location: coordinate input");
        return Ok(Some(point));
    }

    debug!(%input, "resolve_location: geocoding address");
    maps.geocode(input).await
}
