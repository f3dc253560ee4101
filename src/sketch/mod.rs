pub mod manager;
pub mod state;
pub mod validation;

pub use manager::PolygonSketchManager;
pub use state::{InteractionState, SketchEvent};
pub use validation::RingValidator;
