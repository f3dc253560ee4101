//! Simple-polygon validation for closed rings

use crate::core::types::GeoPoint;

/// Turn direction of an ordered point triple in lon/lat coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the triple (p, q, r)
///
/// Sign of the cross product of (q - p) and (r - q), treating longitude
/// as x and latitude as y. Positive means a left (counter-clockwise) turn.
pub fn orientation(p: GeoPoint, q: GeoPoint, r: GeoPoint) -> Orientation {
    let value = (q.lon - p.lon) * (r.lat - q.lat) - (q.lat - p.lat) * (r.lon - q.lon);
    if value > 0.0 {
        Orientation::CounterClockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

pub struct RingValidator;

impl RingValidator {
    /// Validate that a closed ring bounds a simple polygon
    ///
    /// `ring` must repeat its first point at the end, so a triangle
    /// arrives as four entries. Rings shorter than that are rejected.
    /// Every pair of non-adjacent edges is tested for a proper crossing;
    /// the pair made of the first and last edges is skipped because they
    /// share the start point.
    ///
    /// Vertices are assumed to be in general position. Edges that overlap
    /// collinearly or touch at a vertex without crossing are not detected.
    pub fn is_simple_polygon(ring: &[GeoPoint]) -> bool {
        let n = ring.len();
        if n < 4 {
            return false;
        }

        for i in 0..n - 1 {
            for j in (i + 2)..n - 1 {
                // First and last edges share the closing point
                if i == 0 && j == n - 2 {
                    continue;
                }

                if Self::segments_cross(ring[i], ring[i + 1], ring[j], ring[(j + 1) % n]) {
                    return false;
                }
            }
        }

        true
    }

    /// Proper crossing test for segments (p1, q1) and (p2, q2)
    ///
    /// True only when each segment's endpoints straddle the other's
    /// supporting line.
    fn segments_cross(p1: GeoPoint, q1: GeoPoint, p2: GeoPoint, q2: GeoPoint) -> bool {
        let o1 = orientation(p1, q1, p2);
        let o2 = orientation(p1, q1, q2);
        let o3 = orientation(p2, q2, p1);
        let o4 = orientation(p2, q2, q1);

        o1 != o2 && o3 != o4
    }
}
