//! Sketch lifecycle: gesture handling, ring closure, measurements

use crate::core::config::SketchConfig;
use crate::core::types::GeoPoint;
use crate::map::render::MapRenderer;
use crate::sketch::state::{InteractionState, SketchEvent};
use crate::sketch::validation::RingValidator;
use crate::spherical;

/// Owns the working sketch and drives a [`MapRenderer`]
///
/// The interaction is a two-gesture protocol: a long-press places the
/// first point, taps place the rest, and a tap landing within the closure
/// tolerance of the first point (once there are more than two) closes the
/// ring. A closed sketch ignores gestures until [`clear`](Self::clear).
///
/// All methods take `&mut self`; callers serialize access the way a UI
/// event loop does.
pub struct PolygonSketchManager<R: MapRenderer> {
    renderer: R,
    config: SketchConfig,
    positions: Vec<GeoPoint>,
    closed: bool,
    awaiting_first_point: bool,
    marker_counter: u32,
}

impl<R: MapRenderer> PolygonSketchManager<R> {
    /// Create an empty sketch with the default configuration
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, SketchConfig::default())
    }

    /// Create an empty sketch with an explicit configuration
    pub fn with_config(renderer: R, config: SketchConfig) -> Self {
        let marker_counter = config.first_marker_number;
        Self {
            renderer,
            config,
            positions: Vec::new(),
            closed: false,
            awaiting_first_point: true,
            marker_counter,
        }
    }

    /// Current phase of the interaction
    pub fn state(&self) -> InteractionState {
        if self.closed {
            InteractionState::Closed
        } else if self.positions.is_empty() {
            InteractionState::Empty
        } else {
            InteractionState::Open
        }
    }

    /// Points placed so far, in placement order
    ///
    /// Once closed, the first point is repeated at the end.
    #[inline]
    pub fn positions(&self) -> &[GeoPoint] {
        &self.positions
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Handle a long-press at `point`
    ///
    /// Places the first point of an empty sketch. Anywhere else in the
    /// interaction a long-press does nothing.
    pub fn handle_long_press(&mut self, point: GeoPoint) -> SketchEvent {
        if self.closed || !self.positions.is_empty() || !self.awaiting_first_point {
            tracing::debug!(lat = point.lat, lon = point.lon, "long-press ignored");
            return SketchEvent::Ignored;
        }

        self.awaiting_first_point = false;
        self.place_point(point)
    }

    /// Handle a tap at `point`
    ///
    /// Before the long-press, and after closure, taps do nothing. On an
    /// open sketch a tap either closes the ring (within the closure
    /// tolerance of the first point, with more than two points placed) or
    /// places the next point.
    pub fn handle_tap(&mut self, point: GeoPoint) -> SketchEvent {
        if self.closed || self.awaiting_first_point {
            tracing::debug!(lat = point.lat, lon = point.lon, "tap ignored");
            return SketchEvent::Ignored;
        }

        if let Some(&first) = self.positions.first() {
            if self.positions.len() > 2
                && spherical::distance_m(point, first) < self.config.closure_tolerance_m
            {
                return self.close_ring();
            }
        }

        self.place_point(point)
    }

    /// Close the ring directly, without the tap gesture
    ///
    /// Rejected with fewer than three points; ignored once closed.
    pub fn close_polygon(&mut self) -> SketchEvent {
        if self.closed {
            return SketchEvent::Ignored;
        }
        if self.positions.len() <= 2 {
            return SketchEvent::CloseRejected;
        }
        self.close_ring()
    }

    /// Great-circle distance in meters between the first and latest points
    ///
    /// Zero unless the sketch is open with at least two points.
    pub fn distance(&self) -> f64 {
        if self.closed || self.positions.len() < 2 {
            return 0.0;
        }
        let first = self.positions[0];
        let last = self.positions[self.positions.len() - 1];
        spherical::distance_m(first, last)
    }

    /// Length in meters of the sketched path
    ///
    /// Zero with two or fewer points. On a closed sketch the path includes
    /// the closing edge, so this is the ring perimeter.
    pub fn perimeter(&self) -> f64 {
        if self.positions.len() > 2 {
            spherical::path_length_m(&self.positions)
        } else {
            0.0
        }
    }

    /// Spherical area in square meters of the closed ring
    ///
    /// Zero until the sketch is closed.
    pub fn area(&self) -> f64 {
        if self.positions.len() >= 2 && self.closed {
            spherical::ring_area_m2(&self.positions)
        } else {
            0.0
        }
    }

    /// Discard the sketch and start over
    ///
    /// Clears the renderer, forgets all points, reopens the long-press
    /// gesture and resets marker numbering.
    pub fn clear(&mut self) {
        self.renderer.clear();
        self.positions.clear();
        self.closed = false;
        self.awaiting_first_point = true;
        self.marker_counter = self.config.first_marker_number;
        tracing::debug!("sketch cleared");
    }

    fn place_point(&mut self, point: GeoPoint) -> SketchEvent {
        self.positions.push(point);
        if self.positions.len() >= 2 {
            self.renderer.add_line(&self.positions);
        }

        let label = format!("Point {}", self.marker_counter);
        self.marker_counter += 1;
        self.renderer.add_marker(point, &label);

        tracing::debug!(lat = point.lat, lon = point.lon, label = %label, "point placed");
        SketchEvent::PointPlaced { label, point }
    }

    // Caller guarantees an open sketch with more than two points.
    fn close_ring(&mut self) -> SketchEvent {
        let first = self.positions[0];
        self.positions.push(first);
        self.renderer.add_line(&self.positions);
        self.closed = true;

        let valid = RingValidator::is_simple_polygon(&self.positions);
        if valid {
            self.renderer.add_filled_polygon(&self.positions);
        }

        tracing::info!(vertices = self.positions.len() - 1, valid, "ring closed");
        SketchEvent::Closed { valid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::render::{RecordingRenderer, RenderOp};

    fn sketch() -> PolygonSketchManager<RecordingRenderer> {
        PolygonSketchManager::new(RecordingRenderer::new())
    }

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn test_tap_before_long_press_is_ignored() {
        let mut sketch = sketch();
        assert_eq!(sketch.handle_tap(p(0.0, 0.0)), SketchEvent::Ignored);
        assert_eq!(sketch.state(), InteractionState::Empty);
        assert!(sketch.renderer().ops().is_empty());
    }

    #[test]
    fn test_long_press_opens_the_sketch() {
        let mut sketch = sketch();
        let event = sketch.handle_long_press(p(40.0, -3.0));
        assert_eq!(
            event,
            SketchEvent::PointPlaced { label: "Point 1".into(), point: p(40.0, -3.0) }
        );
        assert_eq!(sketch.state(), InteractionState::Open);
        // First placement draws a marker and no line
        assert_eq!(
            sketch.renderer().ops(),
            &[RenderOp::Marker { point: p(40.0, -3.0), label: "Point 1".into() }]
        );
    }

    #[test]
    fn test_second_long_press_is_ignored() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        assert_eq!(sketch.handle_long_press(p(1.0, 1.0)), SketchEvent::Ignored);
        assert_eq!(sketch.positions().len(), 1);
    }

    #[test]
    fn test_taps_extend_and_number_markers() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 1.0));
        let event = sketch.handle_tap(p(1.0, 1.0));
        assert_eq!(
            event,
            SketchEvent::PointPlaced { label: "Point 3".into(), point: p(1.0, 1.0) }
        );
        assert_eq!(sketch.positions().len(), 3);
        assert_eq!(
            sketch.renderer().marker_labels(),
            vec!["Point 1", "Point 2", "Point 3"]
        );
    }

    #[test]
    fn test_tap_near_start_closes_after_three_points() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 0.01));
        sketch.handle_tap(p(0.01, 0.01));
        let event = sketch.handle_tap(p(0.0, 0.0));
        assert_eq!(event, SketchEvent::Closed { valid: true });
        assert_eq!(sketch.state(), InteractionState::Closed);
        assert_eq!(sketch.positions().first(), sketch.positions().last());
        assert_eq!(sketch.positions().len(), 4);
    }

    #[test]
    fn test_tap_near_start_with_two_points_places_instead() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 0.01));
        // Near the first point, but only two placed, so it is a vertex
        let event = sketch.handle_tap(p(0.0, 0.00001));
        assert!(matches!(event, SketchEvent::PointPlaced { .. }));
        assert_eq!(sketch.state(), InteractionState::Open);
    }

    #[test]
    fn test_closure_respects_configured_tolerance() {
        let mut config = SketchConfig::default();
        config.closure_tolerance_m = 5000.0;
        let mut sketch = PolygonSketchManager::with_config(RecordingRenderer::new(), config);
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 0.5));
        sketch.handle_tap(p(0.5, 0.5));
        // ~3.3 km from the start: outside the default 10 m, inside 5 km
        let event = sketch.handle_tap(p(0.0, 0.03));
        assert_eq!(event, SketchEvent::Closed { valid: true });
    }

    #[test]
    fn test_closed_sketch_ignores_gestures() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 0.01));
        sketch.handle_tap(p(0.01, 0.01));
        sketch.handle_tap(p(0.0, 0.0));
        assert_eq!(sketch.state(), InteractionState::Closed);

        assert_eq!(sketch.handle_tap(p(5.0, 5.0)), SketchEvent::Ignored);
        assert_eq!(sketch.handle_long_press(p(5.0, 5.0)), SketchEvent::Ignored);
        assert_eq!(sketch.close_polygon(), SketchEvent::Ignored);
        assert_eq!(sketch.positions().len(), 4);
    }

    #[test]
    fn test_direct_close_needs_three_points() {
        let mut sketch = sketch();
        assert_eq!(sketch.close_polygon(), SketchEvent::CloseRejected);
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 0.01));
        assert_eq!(sketch.close_polygon(), SketchEvent::CloseRejected);
        sketch.handle_tap(p(0.01, 0.01));
        assert_eq!(sketch.close_polygon(), SketchEvent::Closed { valid: true });
    }

    #[test]
    fn test_self_crossing_ring_closes_invalid_without_fill() {
        let mut sketch = sketch();
        // Bowtie: the closing edge setup guarantees a crossing
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(1.0, 1.0));
        sketch.handle_tap(p(1.0, 0.0));
        sketch.handle_tap(p(0.0, 1.0));
        let event = sketch.close_polygon();
        assert_eq!(event, SketchEvent::Closed { valid: false });
        assert!(sketch.is_closed());
        assert!(!sketch
            .renderer()
            .ops()
            .iter()
            .any(|op| matches!(op, RenderOp::FilledPolygon { .. })));
    }

    #[test]
    fn test_clear_resets_protocol_and_numbering() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 0.01));
        sketch.handle_tap(p(0.01, 0.01));
        sketch.handle_tap(p(0.0, 0.0));
        sketch.clear();

        assert_eq!(sketch.state(), InteractionState::Empty);
        assert!(sketch.positions().is_empty());
        assert_eq!(sketch.handle_tap(p(0.0, 0.0)), SketchEvent::Ignored);

        let event = sketch.handle_long_press(p(2.0, 2.0));
        assert_eq!(
            event,
            SketchEvent::PointPlaced { label: "Point 1".into(), point: p(2.0, 2.0) }
        );
    }

    #[test]
    fn test_distance_window() {
        let mut sketch = sketch();
        assert_eq!(sketch.distance(), 0.0);
        sketch.handle_long_press(p(0.0, 0.0));
        assert_eq!(sketch.distance(), 0.0);
        sketch.handle_tap(p(0.0, 1.0));
        let open_distance = sketch.distance();
        assert!(open_distance > 100_000.0);

        sketch.handle_tap(p(1.0, 1.0));
        sketch.handle_tap(p(0.0, 0.0));
        assert!(sketch.is_closed());
        assert_eq!(sketch.distance(), 0.0);
    }

    #[test]
    fn test_area_window() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 1.0));
        sketch.handle_tap(p(1.0, 1.0));
        assert_eq!(sketch.area(), 0.0);
        sketch.handle_tap(p(0.0, 0.0));
        assert!(sketch.area() > 0.0);
    }

    #[test]
    fn test_perimeter_includes_closing_edge() {
        let mut sketch = sketch();
        sketch.handle_long_press(p(0.0, 0.0));
        sketch.handle_tap(p(0.0, 1.0));
        assert_eq!(sketch.perimeter(), 0.0);
        sketch.handle_tap(p(1.0, 1.0));
        let open_length = sketch.perimeter();
        sketch.handle_tap(p(0.0, 0.0));
        assert!(sketch.perimeter() > open_length);
    }
}
