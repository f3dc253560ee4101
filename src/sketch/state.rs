//! Interaction states and gesture outcomes

use serde::{Deserialize, Serialize};

use crate::core::types::GeoPoint;

/// Phase of the sketch interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionState {
    /// No points yet; only a long-press registers
    Empty,
    /// At least one point placed; taps extend the path or close it
    Open,
    /// The ring is closed; gestures are ignored until a clear
    Closed,
}

/// Outcome of a single gesture or close request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SketchEvent {
    /// The gesture had no effect in the current state
    Ignored,
    /// A vertex was placed and a marker created for it
    PointPlaced { label: String, point: GeoPoint },
    /// The ring was closed; `valid` reports the simple-polygon check
    Closed { valid: bool },
    /// A close was requested with fewer than three points
    CloseRejected,
}

impl SketchEvent {
    /// User-facing advisory for this outcome, if it warrants one
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            SketchEvent::Ignored | SketchEvent::PointPlaced { .. } => None,
            SketchEvent::Closed { valid: true } => Some("Polygon closed and validated."),
            SketchEvent::Closed { valid: false } => {
                Some("The polygon is not valid. Check the points.")
            }
            SketchEvent::CloseRejected => {
                Some("At least 3 points are needed to close the polygon.")
            }
        }
    }
}
