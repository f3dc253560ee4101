//! Great-circle measurements over WGS84 coordinates
//!
//! Thin wrappers around the `geo` algorithms so the rest of the codebase
//! speaks meters and [`GeoPoint`] rather than geo's traits. All results
//! are spherical approximations (mean earth radius), which is what a
//! hand-sketched boundary warrants.

use geo::{ChamberlainDuquetteArea, HaversineDistance, HaversineLength};
use geo_types::{LineString, Point, Polygon};

use crate::core::types::GeoPoint;

/// Great-circle distance between two points in meters
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let a: Point<f64> = a.into();
    let b: Point<f64> = b.into();
    a.haversine_distance(&b)
}

/// Length in meters of the path through `points` in order
///
/// Zero for fewer than two points.
pub fn path_length_m(points: &[GeoPoint]) -> f64 {
    let path: LineString<f64> = points.iter().copied().map(geo_types::Coord::from).collect();
    path.haversine_length()
}

/// Unsigned spherical area in square meters of the ring through `points`
///
/// The ring is closed automatically, so the first point may or may not be
/// repeated at the end. Fewer than three distinct vertices yield zero.
pub fn ring_area_m2(points: &[GeoPoint]) -> f64 {
    let ring: LineString<f64> = points.iter().copied().map(geo_types::Coord::from).collect();
    Polygon::new(ring, vec![]).chamberlain_duquette_unsigned_area()
}
