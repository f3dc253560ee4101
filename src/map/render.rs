//! Rendering seam between the sketch and whatever displays it

use serde::{Deserialize, Serialize};

use crate::core::types::GeoPoint;

/// Receiver for sketch drawing operations
///
/// The sketch issues these in interaction order: one marker per placed
/// point, the line through every position after each placement from the
/// second point on, a filled polygon once a ring closes and validates,
/// and a clear when the sketch is reset. Line styling (caps, color,
/// width) is the implementor's business.
pub trait MapRenderer {
    /// Place a labeled marker at `point`
    fn add_marker(&mut self, point: GeoPoint, label: &str);

    /// Draw the path through `positions` in order
    fn add_line(&mut self, positions: &[GeoPoint]);

    /// Fill the closed ring through `positions` (first point repeated last)
    fn add_filled_polygon(&mut self, positions: &[GeoPoint]);

    /// Remove everything previously drawn
    fn clear(&mut self);
}

/// A recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderOp {
    Marker { point: GeoPoint, label: String },
    Line { positions: Vec<GeoPoint> },
    FilledPolygon { positions: Vec<GeoPoint> },
    Clear,
}

/// Renderer that draws nothing
///
/// For headless use of the sketch, measurements only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl MapRenderer for NullRenderer {
    fn add_marker(&mut self, _point: GeoPoint, _label: &str) {}
    fn add_line(&mut self, _positions: &[GeoPoint]) {}
    fn add_filled_polygon(&mut self, _positions: &[GeoPoint]) {}
    fn clear(&mut self) {}
}

/// Renderer that records every operation it receives, oldest first
///
/// The record is never truncated; a clear is recorded as an operation
/// like any other, so tests can audit the full drawing history.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    ops: Vec<RenderOp>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations received so far
    #[inline]
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    /// Labels of markers recorded since the last clear, in placement order
    pub fn marker_labels(&self) -> Vec<&str> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, RenderOp::Clear))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                RenderOp::Marker { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl MapRenderer for RecordingRenderer {
    fn add_marker(&mut self, point: GeoPoint, label: &str) {
        self.ops.push(RenderOp::Marker { point, label: label.to_string() });
    }

    fn add_line(&mut self, positions: &[GeoPoint]) {
        self.ops.push(RenderOp::Line { positions: positions.to_vec() });
    }

    fn add_filled_polygon(&mut self, positions: &[GeoPoint]) {
        self.ops.push(RenderOp::FilledPolygon { positions: positions.to_vec() });
    }

    fn clear(&mut self) {
        self.ops.push(RenderOp::Clear);
    }
}
