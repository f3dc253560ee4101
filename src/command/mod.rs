//! Measurement menu over a sketch
//!
//! Each command resolves against the sketch's current state to a typed
//! reply; the reply's display text is the wording shown to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::map::render::MapRenderer;
use crate::sketch::manager::PolygonSketchManager;

/// Menu actions a user can invoke on the sketch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCommand {
    Distance,
    Perimeter,
    Area,
    Clear,
}

/// Reply produced by a menu command
///
/// Measurement variants carry meters (or square meters); the rest are
/// guidance for a sketch that cannot answer the question yet.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuReply {
    Distance(f64),
    Perimeter(f64),
    Area(f64),
    Cleared,
    NeedTwoPointsForDistance,
    DistanceUnavailableWhenClosed,
    NeedClosedForPerimeter,
    NeedMorePointsForPerimeter,
    NeedMorePointsForArea,
}

impl fmt::Display for MenuReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuReply::Distance(m) => write!(f, "Distance between points: {:.2} meters", m),
            MenuReply::Perimeter(m) => write!(f, "Perimeter: {:.2} meters", m),
            MenuReply::Area(m2) => write!(f, "Area: {:.2} square meters", m2),
            MenuReply::Cleared => write!(f, "Map cleared."),
            MenuReply::NeedTwoPointsForDistance => {
                write!(f, "Select at least two points to calculate the distance.")
            }
            MenuReply::DistanceUnavailableWhenClosed => {
                write!(f, "The polygon is closed. Use 'perimeter' instead.")
            }
            MenuReply::NeedClosedForPerimeter => {
                write!(f, "The polygon must be closed. Use 'distance' instead.")
            }
            MenuReply::NeedMorePointsForPerimeter => {
                write!(f, "Select more than two points to calculate the perimeter.")
            }
            MenuReply::NeedMorePointsForArea => {
                write!(f, "Select more than two points to calculate the area.")
            }
        }
    }
}

/// Run a menu command against the sketch
///
/// Distance answers only while the sketch is open, perimeter only once it
/// is closed. Area asks for more than two points and otherwise reports the
/// sketch's area as is, zero included, so an unclosed sketch answers
/// "Area: 0.00 square meters".
pub fn execute<R: MapRenderer>(
    command: MenuCommand,
    sketch: &mut PolygonSketchManager<R>,
) -> MenuReply {
    match command {
        MenuCommand::Distance => {
            if sketch.is_closed() {
                MenuReply::DistanceUnavailableWhenClosed
            } else if sketch.positions().len() >= 2 {
                MenuReply::Distance(sketch.distance())
            } else {
                MenuReply::NeedTwoPointsForDistance
            }
        }
        MenuCommand::Perimeter => {
            if !sketch.is_closed() {
                MenuReply::NeedClosedForPerimeter
            } else if sketch.positions().len() > 2 {
                MenuReply::Perimeter(sketch.perimeter())
            } else {
                MenuReply::NeedMorePointsForPerimeter
            }
        }
        MenuCommand::Area => {
            if sketch.positions().len() > 2 {
                MenuReply::Area(sketch.area())
            } else {
                MenuReply::NeedMorePointsForArea
            }
        }
        MenuCommand::Clear => {
            sketch.clear();
            MenuReply::Cleared
        }
    }
}
