//! Geosketch - Interactive geographic polygon sketching

pub mod command;
pub mod core;
pub mod map;
pub mod sketch;
pub mod spherical;
