pub mod location;
pub mod render;

pub use location::{FixedLocationProvider, LocationProvider};
pub use render::{MapRenderer, NullRenderer, RecordingRenderer, RenderOp};
