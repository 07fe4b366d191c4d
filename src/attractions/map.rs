//! Marker bounding-box math for the hosting map layer.

use crate::attractions::response::Attraction;
use crate::types::location::LatLon;

/// Bounding box of a set of attraction markers plus its midpoint, used by
/// the UI layer to center its map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
    pub center: LatLon,
}

/// Computes the marker bounds; `None` for an empty attraction list.
pub fn marker_bounds(attractions: &[Attraction]) -> Option<MapBounds> {
    let first = attractions.first()?.coordinate;
    let mut min_lat = first.0;
    let mut max_lat = first.0;
    let mut min_lon = first.1;
    let mut max_lon = first.1;

    for attraction in &attractions[1..] {
        let LatLon(lat, lon) = attraction.coordinate;
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
        min_lon = min_lon.min(lon);
        max_lon = max_lon.max(lon);
    }

    Some(MapBounds {
        south_west: LatLon(min_lat, min_lon),
        north_east: LatLon(max_lat, max_lon),
        center: LatLon((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0),
    })
}
