use crate::models::{BoundingBox, GeoPoint};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// Spherical-Earth approximation; symmetric, zero for identical points,
/// monotonic in true angular separation. No sub-meter precision claims.
/// Callers are expected to validate coordinates upstream (see
/// `GeoPoint::new`); out-of-range inputs produce meaningless output.
#[inline]
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a_rad = a.lat.to_radians();
    let lat_b_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than Haversine for pre-filtering: the box encloses the
/// radius circle, so anything outside the box is outside the circle.
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
///
/// The box is computed in plain degrees and can extend past ±180°
/// longitude near the antimeridian; `is_within_bounding_box` does not
/// wrap, so such a box must not be used as a short-circuit.
pub fn calculate_bounding_box(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;
    let lng_delta = radius_km / (111.0 * center.lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: center.lat - lat_delta,
        max_lat: center.lat + lat_delta,
        min_lng: center.lng - lng_delta,
        max_lng: center.lng + lng_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: GeoPoint, bbox: &BoundingBox) -> bool {
    point.lat >= bbox.min_lat
        && point.lat <= bbox.max_lat
        && point.lng >= bbox.min_lng
        && point.lng <= bbox.max_lng
}

/// Format a distance for display with one decimal place, e.g. "3.0", "12.4"
///
/// The raw float stays on `AnnotatedPost`; this is the shared formatting
/// the listing UI uses for its distance badge.
pub fn format_km(distance_km: f64) -> String {
    format!("{:.1}", distance_km)
}
