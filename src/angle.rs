//! Compass-angle utilities shared by graph annotation, extraction, and binning.
//!
//! All angles here are compass bearings in degrees: 0° is North and values
//! grow clockwise.

/// Mean Earth radius in metres used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// Wraps an angle in degrees into [0, 360).
#[inline]
pub fn normalize_bearing(deg: f64) -> f64 {
    let norm = deg.rem_euclid(360.0);
    // rem_euclid may round tiny negatives up to exactly 360.
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Bearing of the same segment traversed the other way.
///
/// Uses the add-or-subtract form rather than a modulo so that results match
/// the reference numbers exactly for inputs already in [0, 360).
#[inline]
pub fn reciprocal_bearing(deg: f64) -> f64 {
    if deg < 180.0 {
        deg + 180.0
    } else {
        deg - 180.0
    }
}

/// Initial great-circle bearing from `(lat1, lon1)` towards `(lat2, lon2)`,
/// both in decimal degrees. Returns a value in [0, 360).
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Haversine distance in metres between two lat/lon points.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = phi2 - phi1;
    let dlon = (lon2 - lon1).to_radians();
    let h = (dphi * 0.5).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon * 0.5).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Converts a compass bearing to a unit vector `(east, north)`.
#[inline]
pub fn compass_to_xy(deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (rad.sin(), rad.cos())
}
