//! Struct definitions and implementations for [`Coordinate`].
//!
//! A [`Coordinate`] is both a geographic point and the identity of a
//! vertex in a [`GraphStore`](super::graph::GraphStore). Two coordinates
//! name the same vertex only when both fields are bit-for-bit equal, so
//! the type can be used directly as a map or set key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Earth radius approximation used by [`distance`], in miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.2;

/// An immutable latitude/longitude point, in degrees.
///
/// Equality, hashing and ordering all work on the raw bit patterns of
/// the two fields: there is no epsilon tolerance, and `0.0` and `-0.0`
/// are different coordinates. Ordering is lexicographic on
/// (latitude, longitude) and carries no geographic meaning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate from degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Distance in miles to `other`. See [`distance`].
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance(self, other)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

/// Calculates the distance in miles between two points using an
/// equirectangular projection centered on their average latitude.
///
/// This is a local flat-earth approximation, not a great-circle
/// distance. It is exact-symmetric and returns `0.0` for a point and
/// itself.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let delta_lon = (a.longitude - b.longitude).to_radians();
    let delta_lat = (a.latitude - b.latitude).to_radians();
    let mean_lat = ((a.latitude + b.latitude) / 2.0).to_radians();
    let dx = EARTH_RADIUS_MILES * mean_lat.cos() * delta_lon;
    let dy = EARTH_RADIUS_MILES * delta_lat;
    (dx * dx + dy * dy).sqrt()
}

/// Sums the distance between consecutive points of `path`.
///
/// The points are not checked against any graph. Paths with fewer than
/// two points have length `0.0`.
pub fn route_distance(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
