//! Great-circle distance, distance formatting, and two-point viewport framing.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, as used by the distance and zoom math.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Map center and zoom bucket framing two points of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Haversine great-circle distance between two points, in kilometres.
///
/// Identical points yield exactly `0.0`; the result is symmetric under
/// swapping the arguments.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Render a distance for display.
///
/// Under 1 km the value is shown in whole metres (`"500m"`), from 1 km up
/// to 10 km with one decimal (`"5.5km"`), and from 10 km as whole
/// kilometres (`"55km"`).
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round())
    } else if km < 10.0 {
        format!("{km:.1}km")
    } else {
        format!("{}km", km.round())
    }
}

/// Center and zoom framing both points.
///
/// The center is the arithmetic midpoint of the two coordinate pairs, not a
/// geodesic midpoint; at the distances involved the difference is below the
/// zoom-bucket granularity. Zoom buckets are keyed on the haversine
/// distance, first match from the top.
#[must_use]
pub fn map_bounds(a: GeoPoint, b: GeoPoint) -> MapBounds {
    let center = GeoPoint {
        lat: (a.lat + b.lat) / 2.0,
        lon: (a.lon + b.lon) / 2.0,
    };

    let distance = distance_km(a, b);
    let zoom = if distance > 100.0 {
        8
    } else if distance > 50.0 {
        9
    } else if distance > 20.0 {
        10
    } else if distance > 10.0 {
        11
    } else if distance > 5.0 {
        12
    } else if distance > 2.0 {
        13
    } else if distance > 1.0 {
        14
    } else {
        15
    };

    MapBounds { center, zoom }
}
