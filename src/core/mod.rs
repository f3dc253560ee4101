pub mod config;
pub mod error;
pub mod types;

pub use config::SketchConfig;
pub use error::{Result, SketchError};
pub use types::GeoPoint;
